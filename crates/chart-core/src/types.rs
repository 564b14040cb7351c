// File: crates/chart-core/src/types.rs
// Summary: Shared types and the immutable defaults table (sizes, paddings, font sizes, colors).

use crate::theme::Theme;

/// Default chart width in pixels.
pub const WIDTH: i32 = 1024;
/// Default chart height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(5)
    }
}

/// Hardcoded fallbacks used when neither a style nor the caller supplies a value.
/// Built once and handed to the chart; never mutated during a render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Defaults {
    pub theme: Theme,
    pub stroke_width: f64,
    pub axis_line_width: f64,
    pub axis_font_size: f64,
    pub title_font_size: f64,
    /// Space above the title text.
    pub title_top: u32,
    pub final_label_font_size: f64,
    /// Horizontal gap between the plot edge and the callout body.
    pub final_label_delta_width: i32,
    pub final_label_padding: Insets,
    pub background_padding: Insets,
    pub x_axis_margin: i32,
    pub min_tick_horizontal_spacing: i32,
    pub min_tick_vertical_spacing: f64,
    /// Assumed width of an X tick label when budgeting ticks.
    pub x_label_width: i32,
    pub max_tick_count: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            stroke_width: 1.0,
            axis_line_width: 1.0,
            axis_font_size: 10.0,
            title_font_size: 18.0,
            title_top: 10,
            final_label_font_size: 10.0,
            final_label_delta_width: 10,
            final_label_padding: Insets::new(0, 5, 5, 5),
            background_padding: Insets::default(),
            x_axis_margin: 10,
            min_tick_horizontal_spacing: 20,
            min_tick_vertical_spacing: 20.0,
            x_label_width: 60,
            max_tick_count: 15,
        }
    }
}

impl Defaults {
    /// Stock defaults with a different color theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }
}
