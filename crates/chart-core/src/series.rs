// File: crates/chart-core/src/series.rs
// Summary: Series capability trait plus numeric and time-indexed implementations.

use chrono::DateTime;

use crate::style::Style;

/// Turns an axis or data value into label text.
pub type ValueFormatter = fn(f64) -> String;

/// Two-decimal float formatting used when a series does not supply its own.
pub fn format_float(v: f64) -> String {
    format!("{v:.2}")
}

/// Formats Unix seconds as a `YYYY-MM-DD` date. Values outside chrono's range fall back to
/// plain float formatting.
pub fn format_date(v: f64) -> String {
    match DateTime::from_timestamp(v.floor() as i64, 0) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => format_float(v),
    }
}

/// One plotted line of ordered (x, y) points, supplied on demand.
pub trait Series: Send + Sync {
    fn name(&self) -> &str { "" }
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
    /// Point at `index`; callers stay below `len()`.
    fn value(&self, index: usize) -> (f64, f64);
    fn x_formatter(&self) -> ValueFormatter { format_float }
    fn y_formatter(&self) -> ValueFormatter { format_float }
    fn style(&self) -> &Style;

    /// Last point, if any.
    fn last_value(&self) -> Option<(f64, f64)> {
        match self.len() {
            0 => None,
            n => Some(self.value(n - 1)),
        }
    }
}

/// Purely numeric series.
#[derive(Clone, Debug, Default)]
pub struct XySeries {
    pub name: String,
    pub style: Style,
    pub data: Vec<(f64, f64)>,
    pub x_formatter: Option<ValueFormatter>,
    pub y_formatter: Option<ValueFormatter>,
}

impl XySeries {
    pub fn new(data: Vec<(f64, f64)>) -> Self {
        Self { data, ..Self::default() }
    }

    /// Build from parallel x/y slices, stopping at the shorter one.
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Self {
        Self::new(xs.iter().copied().zip(ys.iter().copied()).collect())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self { self.name = name.into(); self }
    pub fn with_style(mut self, style: Style) -> Self { self.style = style; self }
    pub fn with_x_formatter(mut self, f: ValueFormatter) -> Self { self.x_formatter = Some(f); self }
    pub fn with_y_formatter(mut self, f: ValueFormatter) -> Self { self.y_formatter = Some(f); self }
}

impl Series for XySeries {
    fn name(&self) -> &str { &self.name }
    fn len(&self) -> usize { self.data.len() }
    fn value(&self, index: usize) -> (f64, f64) { self.data[index] }
    fn x_formatter(&self) -> ValueFormatter { self.x_formatter.unwrap_or(format_float) }
    fn y_formatter(&self) -> ValueFormatter { self.y_formatter.unwrap_or(format_float) }
    fn style(&self) -> &Style { &self.style }
}

/// Series indexed by Unix timestamps (seconds); X labels render as dates.
#[derive(Clone, Debug, Default)]
pub struct TimeSeries {
    pub name: String,
    pub style: Style,
    pub times: Vec<i64>,
    pub values: Vec<f64>,
    pub y_formatter: Option<ValueFormatter>,
}

impl TimeSeries {
    /// Pairs `times` with `values`; the series length is the shorter of the two.
    pub fn new(times: Vec<i64>, values: Vec<f64>) -> Self {
        Self { times, values, ..Self::default() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self { self.name = name.into(); self }
    pub fn with_style(mut self, style: Style) -> Self { self.style = style; self }
    pub fn with_y_formatter(mut self, f: ValueFormatter) -> Self { self.y_formatter = Some(f); self }
}

impl Series for TimeSeries {
    fn name(&self) -> &str { &self.name }
    fn len(&self) -> usize { self.times.len().min(self.values.len()) }
    fn value(&self, index: usize) -> (f64, f64) { (self.times[index] as f64, self.values[index]) }
    fn x_formatter(&self) -> ValueFormatter { format_date }
    fn y_formatter(&self) -> ValueFormatter { self.y_formatter.unwrap_or(format_float) }
    fn style(&self) -> &Style { &self.style }
}
