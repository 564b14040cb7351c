// File: crates/chart-core/src/draw.rs
// Summary: Drawing passes for background, canvas, series lines, final-value callouts and title.

use tracing::debug;

use crate::chart::Chart;
use crate::geometry::{px, RectI32};
use crate::render::Renderer;
use crate::scale::Range;
use crate::series::Series;
use crate::style::resolve;

fn fill_rect<R: Renderer>(r: &mut R, rect: &RectI32) {
    let [first, rest @ ..] = rect.outline();
    r.move_to(first.0, first.1);
    for (x, y) in rest {
        r.line_to(x, y);
    }
    r.close();
    r.fill_stroke();
}

/// Full-chart rectangle.
pub fn background<R: Renderer>(chart: &Chart<'_>, r: &mut R) {
    let (style, theme) = (&chart.background, &chart.defaults.theme);
    r.set_fill_color(style.fill_color_or(theme.background));
    r.set_stroke_color(style.stroke_color_or(theme.background_stroke));
    r.set_line_width(style.stroke_width_or(chart.defaults.stroke_width));
    fill_rect(r, &RectI32::from_ltwh(0, 0, chart.width, chart.height));
}

/// Plot-area rectangle.
pub fn canvas<R: Renderer>(chart: &Chart<'_>, r: &mut R, canvas_box: &RectI32) {
    let (style, theme) = (&chart.canvas, &chart.defaults.theme);
    r.set_fill_color(style.fill_color_or(theme.canvas));
    r.set_stroke_color(style.stroke_color_or(theme.canvas_stroke));
    r.set_line_width(style.stroke_width_or(chart.defaults.stroke_width));
    fill_rect(r, canvas_box);
}

/// One polyline through every point of `s`, then its callout when enabled.
///
/// X pixels run from the right edge: `left + width - translate(x)`. Pixel sums saturate,
/// so points far outside the ranges pin to the `i32` limits.
pub fn series<R: Renderer>(
    chart: &Chart<'_>,
    r: &mut R,
    canvas_box: &RectI32,
    index: usize,
    s: &dyn Series,
    xrange: &Range,
    yrange: &Range,
) {
    if s.is_empty() {
        debug!(index, name = s.name(), "skipping empty series");
        return;
    }
    let style = s.style();
    r.set_stroke_color(style.stroke_color_or(chart.defaults.theme.series_color(index)));
    r.set_line_width(style.stroke_width_or(chart.defaults.stroke_width));

    let (cx, cy, cw) = (canvas_box.left, canvas_box.top, canvas_box.width());
    let to_px = |(vx, vy): (f64, f64)| {
        (cx.saturating_add(cw).saturating_sub(xrange.translate(vx)), cy.saturating_add(yrange.translate(vy)))
    };

    let (x0, y0) = to_px(s.value(0));
    r.move_to(x0, y0);
    for i in 1..s.len() {
        let (x, y) = to_px(s.value(i));
        r.line_to(x, y);
    }
    r.stroke();

    final_value_label(chart, r, canvas_box, index, s, yrange);
}

/// Pointed tab right of the plot at the height of the series' last value, holding that
/// value's text. The apex touches the plot edge; the body extends right.
pub fn final_value_label<R: Renderer>(
    chart: &Chart<'_>,
    r: &mut R,
    canvas_box: &RectI32,
    index: usize,
    s: &dyn Series,
    yrange: &Range,
) {
    if !chart.final_value_label.show {
        return;
    }
    let Some((_, last)) = s.last_value() else { return };
    let style = &chart.final_value_label;
    let d = &chart.defaults;

    let label = (s.y_formatter())(last);
    let ly = canvas_box.top.saturating_add(yrange.translate(last));

    let font_size = style.font_size_or(d.final_label_font_size);
    r.set_font_size(font_size);
    let text_width = r.measure_text(&label);
    let half_text_height = (font_size.floor() as i32) >> 1;

    let cx = canvas_box.right.saturating_add(chart.axis_width());
    let pt = px(style.padding.top_or(d.final_label_padding.top));
    let pl = px(style.padding.left_or(d.final_label_padding.left));
    let pr = px(style.padding.right_or(d.final_label_padding.right));
    let pb = px(style.padding.bottom_or(d.final_label_padding.bottom));

    let body_left = cx.saturating_add(pl).saturating_add(d.final_label_delta_width);
    let body_right = body_left.saturating_add(text_width).saturating_add(pr);
    let body_top = ly.saturating_sub(pt.saturating_add(half_text_height));
    let body_bottom = ly.saturating_add(pb.saturating_add(half_text_height));

    r.set_fill_color(style.fill_color_or(d.theme.final_label_background));
    r.set_stroke_color(resolve(style.stroke_color, s.style().stroke_color, d.theme.series_color(index)));
    r.set_line_width(style.stroke_width_or(d.axis_line_width));
    r.move_to(cx, ly);
    r.line_to(body_left, body_top);
    r.line_to(body_right, body_top);
    r.line_to(body_right, body_bottom);
    r.line_to(body_left, body_bottom);
    r.line_to(cx, ly);
    r.close();
    r.fill_stroke();

    r.set_font_color(style.font_color_or(d.theme.text));
    r.text(&label, body_left, ly.saturating_add(half_text_height));
}

/// Single-line title centered horizontally near the top.
pub fn title<R: Renderer>(chart: &Chart<'_>, r: &mut R) {
    if chart.title.is_empty() || !chart.title_style.show {
        return;
    }
    let style = &chart.title_style;
    let d = &chart.defaults;
    r.set_font_color(style.font_color_or(d.theme.text));
    let font_size = style.font_size_or(d.title_font_size);
    r.set_font_size(font_size);

    let text_width = r.measure_text(&chart.title);
    let x = (chart.width >> 1) - (text_width >> 1);
    let y = px(style.padding.top_or(d.title_top)).saturating_add(font_size as i32);
    r.text(&chart.title, x, y);
}
