// File: crates/chart-core/src/view.rs
// Summary: Range initialization; explicit bounds or a running min/max over every series point.

use crate::chart::Chart;
use crate::geometry::RectI32;
use crate::scale::Range;
use crate::series::Series;

/// Running bounds over all points of all series, seeded from the first point seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// `None` when no series has any points.
    pub fn scan(series: &[&dyn Series]) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for s in series {
            for i in 0..s.len() {
                let (x, y) = s.value(i);
                match bounds.as_mut() {
                    Some(b) => {
                        if b.x_min > x { b.x_min = x; }
                        if b.x_max < x { b.x_max = x; }
                        if b.y_min > y { b.y_min = y; }
                        if b.y_max < y { b.y_max = y; }
                    }
                    None => bounds = Some(Self { x_min: x, x_max: x, y_min: y, y_max: y }),
                }
            }
        }
        bounds
    }
}

impl Chart<'_> {
    /// Final X/Y ranges bound to the canvas box: X spans its width, Y its height.
    ///
    /// Each range takes its formatter from the last series in the chart, even when an
    /// earlier series supplied a custom one.
    pub fn init_ranges(&self, canvas_box: &RectI32) -> (Range, Range) {
        let scanned = DataBounds::scan(&self.series).unwrap_or(DataBounds {
            x_min: 0.0, x_max: 0.0, y_min: 0.0, y_max: 0.0,
        });

        let mut xrange = match self.x_range {
            Some(r) if !r.is_zero() => Range::new(r.min, r.max),
            _ => Range::new(scanned.x_min, scanned.x_max),
        };
        let mut yrange = match self.y_range {
            Some(r) if !r.is_zero() => Range::new(r.min, r.max),
            _ => Range::new(scanned.y_min, scanned.y_max),
        };

        for s in &self.series {
            xrange.formatter = Some(s.x_formatter());
            yrange.formatter = Some(s.y_formatter());
        }

        xrange.domain = canvas_box.width();
        yrange.domain = canvas_box.height();
        (xrange, yrange)
    }
}
