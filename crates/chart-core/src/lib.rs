// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod layout;
pub mod scale;
pub mod view;
pub mod theme;
pub mod style;
pub mod render;
pub mod draw;
pub mod error;

pub use chart::Chart;
pub use series::{Series, TimeSeries, ValueFormatter, XySeries};
pub use scale::Range;
pub use geometry::RectI32;
pub use types::{Defaults, Insets};
pub use theme::{Color, Theme};
pub use style::{Padding, Style};
pub use render::{Font, FontProvider, Renderer, RendererProvider};
pub use error::ChartError;
