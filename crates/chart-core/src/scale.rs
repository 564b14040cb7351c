// File: crates/chart-core/src/scale.rs
// Summary: Value range bound to a pixel domain, with its linear transform and label formatter.

use crate::series::{format_float, ValueFormatter};

/// A value span mapped onto `domain` pixels.
#[derive(Clone, Copy, Debug)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub domain: i32,
    pub formatter: Option<ValueFormatter>,
}

impl Range {
    /// Caller-supplied bounds; the domain is filled in when the chart lays itself out.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, domain: 0, formatter: None }
    }

    /// A range with both bounds at zero carries no information and is auto-computed.
    pub fn is_zero(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    pub fn delta(&self) -> f64 { self.max - self.min }

    /// Linear map of `value` into `[0, domain]`. Values outside `[min, max]` land outside
    /// that interval; nothing is clamped. Fractional pixels truncate toward zero and results
    /// beyond `i32` saturate. A zero-width range maps everything to 0.
    pub fn translate(&self, value: f64) -> i32 {
        let delta = self.delta();
        if delta == 0.0 { return 0; }
        ((value - self.min) / delta * self.domain as f64).trunc() as i32
    }

    pub fn format(&self, value: f64) -> String {
        (self.formatter.unwrap_or(format_float))(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(min: f64, max: f64, domain: i32) -> Range {
        Range { domain, ..Range::new(min, max) }
    }

    #[test]
    fn translate_is_linear_and_unclamped() {
        let r = bound(10.0, 20.0, 100);
        assert_eq!(r.translate(10.0), 0);
        assert_eq!(r.translate(15.0), 50);
        assert_eq!(r.translate(20.0), 100);
        assert_eq!(r.translate(30.0), 200);
        assert_eq!(r.translate(0.0), -100);
    }

    #[test]
    fn fractions_truncate_toward_zero() {
        let r = bound(0.0, 4.0, 6);
        assert_eq!(r.translate(1.0), 1);
        assert_eq!(r.translate(-1.0), -1);
        assert_eq!(r.translate(1e12), i32::MAX);
    }

    #[test]
    fn flat_range_translates_to_origin() {
        assert_eq!(bound(3.0, 3.0, 100).translate(3.0), 0);
    }

    #[test]
    fn format_uses_custom_formatter() {
        fn pct(v: f64) -> String { format!("{v:.0}%") }
        let mut r = Range::new(0.0, 1.0);
        assert_eq!(r.format(0.5), "0.50");
        r.formatter = Some(pct);
        assert_eq!(r.format(12.0), "12%");
    }
}
