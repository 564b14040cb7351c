// File: crates/chart-core/tests/layout.rs
// Purpose: Canvas-box sizing around axis labels, final-value callouts and explicit padding.

mod common;

use chart_core::style::Padding;
use chart_core::{Chart, RectI32, RendererProvider, Style, XySeries};
use common::{Call, RecordingProvider};

fn series() -> XySeries {
    XySeries::new(vec![(0.0, 3.0), (1.0, 12.5)])
}

#[test]
fn bare_chart_uses_background_padding() {
    let s = series();
    let chart = Chart::new(400, 300).with_series(&s);
    let provider = RecordingProvider::new();
    let b = chart.canvas_box(&mut provider.create(400, 300).expect("renderer"));
    assert_eq!(b, RectI32::from_ltrb(5, 5, 395, 295));
    assert_eq!((b.width(), b.height()), (390, 290));
    assert!(provider.calls().is_empty(), "no measuring without callouts");
}

#[test]
fn axes_reserve_room_for_x_labels() {
    let s = series();
    let mut chart = Chart::new(400, 300).with_series(&s);
    chart.axes.show = true;
    // stroke 1 + ceil(10.0) + margin 10
    assert_eq!(chart.bottom_label_height(), 21);

    let provider = RecordingProvider::new();
    let b = chart.canvas_box(&mut provider.create(400, 300).expect("renderer"));
    assert_eq!(b.bottom, 279);
    assert_eq!(b.right, 395);
}

#[test]
fn callouts_widen_right_padding_to_longest_label() {
    let short = XySeries::new(vec![(0.0, 1.0)]);
    let long = series();
    let mut chart = Chart::new(400, 300).with_series(&short).with_series(&long);
    chart.axes.show = true;
    chart.final_value_label.show = true;
    assert_eq!(chart.widest_final_label(), "12.50");

    let provider = RecordingProvider::new();
    let b = chart.canvas_box(&mut provider.create(400, 300).expect("renderer"));
    // delta 10 + pad 0 + 5 + text 30 + axis 1 + 2 * label stroke 1
    assert_eq!(b.right, 400 - 48);
    assert_eq!(
        provider.calls(),
        vec![Call::FontSize(10.0), Call::Measure("12.50".into())]
    );
}

#[test]
fn explicit_background_padding_wins() {
    let s = series();
    let mut chart = Chart::new(400, 300).with_series(&s);
    chart.axes.show = true;
    chart.final_value_label.show = true;
    chart.background = Style::default().with_padding(Padding { right: Some(2), bottom: Some(3), ..Padding::default() });

    let provider = RecordingProvider::new();
    let b = chart.canvas_box(&mut provider.create(400, 300).expect("renderer"));
    assert_eq!(b, RectI32::from_ltrb(5, 5, 398, 297));
}

#[test]
fn oversized_padding_yields_degenerate_box() {
    let s = series();
    let mut chart = Chart::new(30, 30).with_series(&s);
    chart.background = Style::default().with_padding(Padding::all(20));
    let provider = RecordingProvider::new();
    let b = chart.canvas_box(&mut provider.create(30, 30).expect("renderer"));
    assert_eq!((b.width(), b.height()), (-10, -10));
    assert!(b.is_degenerate());
}

#[test]
fn huge_padding_saturates_instead_of_wrapping() {
    let s = series();
    let mut chart = Chart::new(400, 300).with_series(&s);
    chart.background = Style::default().with_padding(Padding { right: Some(u32::MAX), ..Padding::default() });
    let provider = RecordingProvider::new();
    let b = chart.canvas_box(&mut provider.create(400, 300).expect("renderer"));
    assert_eq!(b, RectI32::from_ltrb(5, 5, 400 - i32::MAX, 295));
    assert!(b.is_degenerate());

    chart.background = Style::default().with_padding(Padding::all(u32::MAX));
    let b = chart.canvas_box(&mut provider.create(400, 300).expect("renderer"));
    assert_eq!(b.width(), i32::MIN);
    assert!(b.is_degenerate());
}

#[test]
fn huge_padding_is_rejected_by_render() {
    let s = series();
    let mut chart = Chart::new(400, 300).with_series(&s);
    chart.background = Style::default().with_padding(Padding { right: Some(u32::MAX), ..Padding::default() });
    let err = chart.render(&RecordingProvider::new(), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, chart_core::ChartError::CanvasTooSmall { .. }));
}
