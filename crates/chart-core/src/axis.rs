// File: crates/chart-core/src/axis.rs
// Summary: Axis border and tick labels; tick budgets derived from font size and spacing.

use tracing::debug;

use crate::chart::Chart;
use crate::geometry::RectI32;
use crate::grid::{paired_ticks, tick_count};
use crate::render::Renderer;
use crate::scale::Range;

impl Chart<'_> {
    fn axis_font_size(&self) -> f64 {
        self.axes.font_size_or(self.defaults.axis_font_size)
    }

    /// Number of X tick intervals that fit, assuming fixed-width labels.
    pub fn x_tick_count(&self, xrange: &Range) -> usize {
        let d = &self.defaults;
        let min_width = (d.x_label_width + d.min_tick_horizontal_spacing) as f64;
        tick_count(xrange.domain, min_width, d.max_tick_count)
    }

    /// Number of Y tick intervals that fit, one label line plus spacing each.
    pub fn y_tick_count(&self, yrange: &Range) -> usize {
        let d = &self.defaults;
        let min_height = self.axis_font_size() + d.min_tick_vertical_spacing;
        tick_count(yrange.domain, min_height, d.max_tick_count)
    }
}

/// L-shaped border along the bottom and right edges, then tick labels for both axes.
pub fn draw_axes<R: Renderer>(chart: &Chart<'_>, r: &mut R, canvas_box: &RectI32, xrange: &Range, yrange: &Range) {
    if !chart.axes.show {
        return;
    }
    let d = &chart.defaults;
    r.set_stroke_color(chart.axes.stroke_color_or(d.theme.axis));
    r.set_line_width(chart.axes.stroke_width_or(d.stroke_width));
    r.move_to(canvas_box.left, canvas_box.bottom);
    r.line_to(canvas_box.right, canvas_box.bottom);
    r.line_to(canvas_box.right, canvas_box.top);
    r.stroke();

    draw_x_labels(chart, r, canvas_box, xrange);
    draw_y_labels(chart, r, canvas_box, yrange);
}

fn set_label_font<R: Renderer>(chart: &Chart<'_>, r: &mut R) -> f64 {
    let size = chart.axis_font_size();
    r.set_font_color(chart.axes.font_color_or(chart.defaults.theme.axis));
    r.set_font_size(size);
    size
}

/// Labels below the bottom edge, left to right from the range minimum.
pub fn draw_x_labels<R: Renderer>(chart: &Chart<'_>, r: &mut R, canvas_box: &RectI32, xrange: &Range) {
    let font_size = set_label_font(chart, r);
    let count = chart.x_tick_count(xrange);
    debug!(ticks = count, domain = xrange.domain, "x axis ticks");

    let ty = canvas_box.bottom + chart.defaults.x_axis_margin + font_size as i32;
    for (value, px) in paired_ticks(count, xrange.delta(), xrange.domain) {
        let tx = canvas_box.left + px as i32;
        r.text(&xrange.format(value + xrange.min), tx, ty);
    }
}

/// Labels right of the plot (past the callout gap), bottom to top from the range minimum.
pub fn draw_y_labels<R: Renderer>(chart: &Chart<'_>, r: &mut R, canvas_box: &RectI32, yrange: &Range) {
    set_label_font(chart, r);
    let count = chart.y_tick_count(yrange);
    debug!(ticks = count, domain = yrange.domain, "y axis ticks");

    let tx = canvas_box.right + chart.defaults.final_label_delta_width + chart.axis_width();
    for (value, px) in paired_ticks(count, yrange.delta(), yrange.domain) {
        let ty = canvas_box.bottom - px as i32;
        r.text(&yrange.format(value + yrange.min), tx, ty);
    }
}
