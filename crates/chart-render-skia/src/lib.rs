// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster renderer for chart-core; paths, text and PNG encoding.

pub mod text;

use std::io::Write;
use std::path::Path;

use chart_core::{Chart, ChartError, Color, Font, FontProvider, Renderer, RendererProvider};
use skia_safe as skia;
use tracing::debug;

use crate::text::TextShaper;

#[inline]
fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Renderer drawing into an N32 premultiplied raster surface.
pub struct SkiaRenderer {
    surface: skia::Surface,
    path: skia::Path,
    fill: skia::Color,
    stroke: skia::Color,
    line_width: f32,
    font_color: skia::Color,
    font_size: f32,
    text: TextShaper,
}

impl SkiaRenderer {
    /// `None` when Skia cannot allocate a surface of that size.
    pub fn new(width: i32, height: i32) -> Option<Self> {
        let surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))?;
        Some(Self {
            surface,
            path: skia::Path::new(),
            fill: skia::Color::WHITE,
            stroke: skia::Color::BLACK,
            line_width: 1.0,
            font_color: skia::Color::BLACK,
            font_size: 10.0,
            text: TextShaper::new(),
        })
    }

    fn paint(&self, color: skia::Color, style: skia::paint::Style) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(style);
        paint.set_stroke_width(self.line_width);
        paint.set_color(color);
        paint
    }

    fn take_path(&mut self) -> skia::Path {
        std::mem::replace(&mut self.path, skia::Path::new())
    }
}

impl Renderer for SkiaRenderer {
    fn set_fill_color(&mut self, color: Color) { self.fill = to_skia(color); }
    fn set_stroke_color(&mut self, color: Color) { self.stroke = to_skia(color); }
    fn set_line_width(&mut self, width: f64) { self.line_width = width as f32; }
    fn set_font(&mut self, font: &Font) -> Result<(), ChartError> { self.text.select(font) }
    fn set_font_size(&mut self, size: f64) { self.font_size = size as f32; }
    fn set_font_color(&mut self, color: Color) { self.font_color = to_skia(color); }

    fn move_to(&mut self, x: i32, y: i32) { self.path.move_to((x as f32, y as f32)); }
    fn line_to(&mut self, x: i32, y: i32) { self.path.line_to((x as f32, y as f32)); }
    fn close(&mut self) { self.path.close(); }

    fn stroke(&mut self) {
        let path = self.take_path();
        let paint = self.paint(self.stroke, skia::paint::Style::Stroke);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_stroke(&mut self) {
        let path = self.take_path();
        let fill = self.paint(self.fill, skia::paint::Style::Fill);
        let stroke = self.paint(self.stroke, skia::paint::Style::Stroke);
        let canvas = self.surface.canvas();
        canvas.draw_path(&path, &fill);
        canvas.draw_path(&path, &stroke);
    }

    fn measure_text(&self, text: &str) -> i32 {
        self.text.measure_width(text, self.font_size).ceil() as i32
    }

    fn text(&mut self, text: &str, x: i32, y: i32) {
        let (size, color) = (self.font_size, self.font_color);
        let canvas = self.surface.canvas();
        self.text.draw_left(canvas, text, x as f32, y as f32, size, color);
    }

    fn save(mut self, w: &mut dyn Write) -> Result<(), ChartError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode("PNG encoding failed".into()))?;
        debug!(bytes = data.as_bytes().len(), "encoded png");
        w.write_all(data.as_bytes())?;
        Ok(())
    }
}

/// Creates a raster renderer per render call and resolves fonts through Skia's font manager.
#[derive(Clone, Debug, Default)]
pub struct SkiaProvider {
    /// Preferred family for the default font; the system fallback typeface when unset.
    pub default_family: Option<String>,
}

impl SkiaProvider {
    pub fn new() -> Self { Self::default() }

    pub fn with_default_family(family: impl Into<String>) -> Self {
        Self { default_family: Some(family.into()) }
    }
}

impl FontProvider for SkiaProvider {
    fn default_font(&self) -> Result<Font, ChartError> {
        let fonts = skia::FontMgr::new();
        let typeface = match &self.default_family {
            Some(family) => fonts.match_family_style(family, skia::FontStyle::normal()),
            None => fonts.legacy_make_typeface(None, skia::FontStyle::normal()),
        };
        typeface
            .map(|tf| Font::family(tf.family_name()))
            .ok_or_else(|| ChartError::Font(match &self.default_family {
                Some(family) => format!("font family '{family}' not found"),
                None => "no system typeface available".to_string(),
            }))
    }
}

impl RendererProvider for SkiaProvider {
    type Renderer = SkiaRenderer;
    fn create(&self, width: i32, height: i32) -> Result<SkiaRenderer, ChartError> {
        SkiaRenderer::new(width, height).ok_or(ChartError::Surface { width, height })
    }
}

/// Render `chart` to PNG bytes in memory.
pub fn render_to_png_bytes(chart: &Chart<'_>, provider: &SkiaProvider) -> Result<Vec<u8>, ChartError> {
    let mut out = Vec::new();
    chart.render(provider, &mut out)?;
    Ok(out)
}

/// Render `chart` to a PNG file, creating parent directories as needed.
pub fn render_to_png(chart: &Chart<'_>, provider: &SkiaProvider, output_png_path: impl AsRef<Path>) -> anyhow::Result<()> {
    let bytes = render_to_png_bytes(chart, provider)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}
