// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers (evenly spaced slices and the per-axis tick budget).

/// `count + 1` evenly spaced values from `0` to `total` inclusive.
/// The last value is exactly `total`; `count == 0` yields `[0.0]`.
pub fn slices(count: usize, total: f64) -> Vec<f64> {
    if count == 0 { return vec![0.0]; }
    let step = total / count as f64;
    (0..=count)
        .map(|i| if i == count { total } else { step * i as f64 })
        .collect()
}

/// How many ticks fit in `domain` pixels when each needs at least `min_spacing` pixels,
/// capped at `max_count`.
pub fn tick_count(domain: i32, min_spacing: f64, max_count: usize) -> usize {
    if domain <= 0 || min_spacing <= 0.0 { return 0; }
    let n = (domain as f64 / min_spacing).floor() as usize;
    n.min(max_count)
}

/// Pair value ticks with pixel ticks by index, stopping at the shorter sequence.
pub fn paired_ticks(count: usize, span: f64, domain: i32) -> Vec<(f64, f64)> {
    let values = slices(count, span);
    let pixels = slices(count, domain as f64);
    values.into_iter().zip(pixels).collect()
}
