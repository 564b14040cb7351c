// File: crates/chart-render-skia/src/text.rs
// Summary: Typeface resolution, measurement and drawing of single-line labels with Skia fonts.

use chart_core::{ChartError, Font};
use skia_safe as skia;
use skia::{FontMgr, FontStyle, Typeface};

pub struct TextShaper {
    fonts: FontMgr,
    typeface: Option<Typeface>,
}

impl TextShaper {
    pub fn new() -> Self {
        Self { fonts: FontMgr::new(), typeface: None }
    }

    /// Load `font` from its bytes or by family name. Bytes that do not parse and unknown
    /// families are errors; the previous typeface stays selected.
    pub fn select(&mut self, font: &Font) -> Result<(), ChartError> {
        let typeface = match font.data() {
            Some(bytes) => self.fonts.new_from_data(bytes, None).ok_or_else(|| {
                ChartError::Font(format!("could not parse font data for '{}'", font.family_name()))
            })?,
            None => self
                .fonts
                .match_family_style(font.family_name(), FontStyle::normal())
                .ok_or_else(|| ChartError::Font(format!("font family '{}' not found", font.family_name())))?,
        };
        self.typeface = Some(typeface);
        Ok(())
    }

    fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size.max(1.0)),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size.max(1.0));
                f
            }
        }
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let (advance, _bounds) = self.font(size).measure_str(text, None);
        advance
    }

    /// Draw with the baseline starting at (`x`, `y`).
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        canvas.draw_str(text, (x, y), &self.font(size), &paint);
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
