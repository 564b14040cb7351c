// File: crates/chart-core/src/style.rs
// Summary: Visual style attributes with explicit -> caller default -> hardcoded fallback.

use crate::theme::Color;

/// Resolve one attribute: the explicit value wins, then the caller's default, then the
/// hardcoded default.
#[inline]
pub fn resolve<T>(explicit: Option<T>, caller_default: Option<T>, hardcoded: T) -> T {
    explicit.or(caller_default).unwrap_or(hardcoded)
}

/// Per-side padding where each side may be left unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub bottom: Option<u32>,
}

impl Padding {
    pub const fn all(v: u32) -> Self {
        Self { top: Some(v), left: Some(v), right: Some(v), bottom: Some(v) }
    }
    pub fn top_or(&self, default: u32) -> u32 { self.top.unwrap_or(default) }
    pub fn left_or(&self, default: u32) -> u32 { self.left.unwrap_or(default) }
    pub fn right_or(&self, default: u32) -> u32 { self.right.unwrap_or(default) }
    pub fn bottom_or(&self, default: u32) -> u32 { self.bottom.unwrap_or(default) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    pub show: bool,
    pub stroke_color: Option<Color>,
    pub stroke_width: Option<f64>,
    pub fill_color: Option<Color>,
    pub font_size: Option<f64>,
    pub font_color: Option<Color>,
    pub padding: Padding,
}

impl Style {
    /// A style that is shown and otherwise uses every default.
    pub fn shown() -> Self {
        Self { show: true, ..Self::default() }
    }

    pub fn with_stroke_color(mut self, c: Color) -> Self { self.stroke_color = Some(c); self }
    pub fn with_stroke_width(mut self, w: f64) -> Self { self.stroke_width = Some(w); self }
    pub fn with_fill_color(mut self, c: Color) -> Self { self.fill_color = Some(c); self }
    pub fn with_font_size(mut self, s: f64) -> Self { self.font_size = Some(s); self }
    pub fn with_font_color(mut self, c: Color) -> Self { self.font_color = Some(c); self }
    pub fn with_padding(mut self, p: Padding) -> Self { self.padding = p; self }

    pub fn stroke_color_or(&self, default: Color) -> Color { self.stroke_color.unwrap_or(default) }
    pub fn stroke_width_or(&self, default: f64) -> f64 { self.stroke_width.unwrap_or(default) }
    pub fn fill_color_or(&self, default: Color) -> Color { self.fill_color.unwrap_or(default) }
    pub fn font_size_or(&self, default: f64) -> f64 { self.font_size.unwrap_or(default) }
    pub fn font_color_or(&self, default: Color) -> Color { self.font_color.unwrap_or(default) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_explicit_then_caller() {
        assert_eq!(resolve(Some(1), Some(2), 3), 1);
        assert_eq!(resolve(None, Some(2), 3), 2);
        assert_eq!(resolve::<i32>(None, None, 3), 3);
    }

    #[test]
    fn padding_sides_fall_back_independently() {
        let p = Padding { top: Some(7), ..Padding::default() };
        assert_eq!(p.top_or(1), 7);
        assert_eq!(p.bottom_or(1), 1);
    }
}
