// File: crates/chart-core/src/layout.rs
// Summary: Canvas-box calculation; sizes the plot area around axis labels and final-value callouts.

use crate::chart::Chart;
use crate::geometry::{px, RectI32};
use crate::render::Renderer;

impl Chart<'_> {
    /// Axis stroke width in whole pixels, or 0 when axes are hidden.
    pub fn axis_width(&self) -> i32 {
        if self.axes.show {
            self.axes.stroke_width_or(self.defaults.axis_line_width) as i32
        } else {
            0
        }
    }

    /// Longest formatted last value across all non-empty series; ties keep the first.
    pub fn widest_final_label(&self) -> String {
        let mut widest = String::new();
        for s in &self.series {
            let Some((_, last)) = s.last_value() else { continue };
            let label = (s.y_formatter())(last);
            if label.chars().count() > widest.chars().count() {
                widest = label;
            }
        }
        widest
    }

    /// Horizontal room the final-value callouts need to the right of the plot, or 0 when
    /// they are hidden. Leaves the renderer's font size at the callout size.
    pub fn final_label_width<R: Renderer>(&self, r: &mut R) -> i32 {
        if !self.final_value_label.show {
            return 0;
        }
        let style = &self.final_value_label;
        let d = &self.defaults;

        r.set_font_size(style.font_size_or(d.final_label_font_size));
        let text_width = r.measure_text(&self.widest_final_label());

        let pl = px(style.padding.left_or(d.final_label_padding.left));
        let pr = px(style.padding.right_or(d.final_label_padding.right));
        let lsw = style.stroke_width_or(d.axis_line_width) as i32;

        [pl, pr, text_width, self.axis_width(), lsw.saturating_mul(2)]
            .into_iter()
            .fold(d.final_label_delta_width, i32::saturating_add)
    }

    /// Vertical room the X tick labels need below the plot, or 0 when axes are hidden.
    pub fn bottom_label_height(&self) -> i32 {
        if !self.axes.show {
            return 0;
        }
        let font_size = self.axes.font_size_or(self.defaults.axis_font_size);
        self.axis_width() + font_size.ceil() as i32 + self.defaults.x_axis_margin
    }

    /// Plot rectangle inside the background padding. Explicit background padding wins;
    /// otherwise the right and bottom sides grow to fit callouts and axis labels.
    /// The result is not floored and may be degenerate.
    pub fn canvas_box<R: Renderer>(&self, r: &mut R) -> RectI32 {
        let defaults = self.defaults.background_padding;
        let right_pad = defaults.right.max(self.final_label_width(r).max(0) as u32);
        let bottom_pad = defaults.bottom.max(self.bottom_label_height().max(0) as u32);

        let padding = &self.background.padding;
        RectI32::from_ltrb(
            px(padding.left_or(defaults.left)),
            px(padding.top_or(defaults.top)),
            self.width.saturating_sub(px(padding.right_or(right_pad))),
            self.height.saturating_sub(px(padding.bottom_or(bottom_pad))),
        )
    }
}
