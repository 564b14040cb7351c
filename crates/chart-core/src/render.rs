// File: crates/chart-core/src/render.rs
// Summary: Renderer capability consumed by the chart, plus the provider and font handles.

use std::io::Write;
use std::sync::Arc;

use crate::error::ChartError;
use crate::theme::Color;

/// Font resource handed to a renderer. Cloning shares the underlying bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Font {
    family: Arc<str>,
    data: Option<Arc<[u8]>>,
}

impl Font {
    /// A font resolved by family name on the backend side.
    pub fn family(name: impl Into<Arc<str>>) -> Self {
        Self { family: name.into(), data: None }
    }

    /// A font loaded from TrueType/OpenType bytes.
    pub fn from_bytes(name: impl Into<Arc<str>>, data: impl Into<Arc<[u8]>>) -> Self {
        Self { family: name.into(), data: Some(data.into()) }
    }

    pub fn family_name(&self) -> &str { &self.family }
    pub fn data(&self) -> Option<&[u8]> { self.data.as_deref() }
}

/// Drawing surface driven by a single render call.
///
/// Coordinates are integer pixels with the origin at the top-left corner. Path commands
/// accumulate until `stroke` or `fill_stroke` paints and clears the current path.
pub trait Renderer {
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    /// Load `font` for all later text; fails when the backend cannot use it.
    fn set_font(&mut self, font: &Font) -> Result<(), ChartError>;
    fn set_font_size(&mut self, size: f64);
    fn set_font_color(&mut self, color: Color);

    fn move_to(&mut self, x: i32, y: i32);
    fn line_to(&mut self, x: i32, y: i32);
    fn close(&mut self);
    fn stroke(&mut self);
    fn fill_stroke(&mut self);

    /// Pixel width of `text` at the current font and size.
    fn measure_text(&self, text: &str) -> i32;
    /// Draw `text` with its baseline-left corner at (`x`, `y`).
    fn text(&mut self, text: &str, x: i32, y: i32);

    /// Flush everything drawn so far into `w`. Consumes the renderer.
    fn save(self, w: &mut dyn Write) -> Result<(), ChartError>
    where
        Self: Sized;
}

/// Source of the application-wide default font.
pub trait FontProvider {
    fn default_font(&self) -> Result<Font, ChartError>;
}

/// Factory for fresh renderer instances, one per render call.
pub trait RendererProvider: FontProvider {
    type Renderer: Renderer;
    fn create(&self, width: i32, height: i32) -> Result<Self::Renderer, ChartError>;
}
