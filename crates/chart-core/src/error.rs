// File: crates/chart-core/src/error.rs
// Summary: Error type returned by chart rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The chart has no series; nothing is drawn and no renderer is created.
    #[error("please provide at least one series")]
    NoSeries,
    /// The font could not be resolved or loaded while text was required.
    #[error("font unavailable: {0}")]
    Font(String),
    /// Paddings and decorations leave no room for the plot area.
    #[error("canvas box is degenerate ({width}x{height}); padding exceeds chart dimensions")]
    CanvasTooSmall { width: i32, height: i32 },
    /// The backend could not allocate a drawing surface.
    #[error("failed to create a {width}x{height} drawing surface")]
    Surface { width: i32, height: i32 },
    /// The backend failed to encode its output.
    #[error("encode failed: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
