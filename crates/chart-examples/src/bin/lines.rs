// File: crates/chart-examples/src/bin/lines.rs
// Summary: Renders a two-series line chart with axes, callouts and title to PNG.
// Usage: example-lines [data.csv]   (CSV columns: x,y or time,value; header row required)
//        CHART_THEME=dark selects a theme preset.

use anyhow::{Context, Result};
use chart_core::{theme, Chart, Defaults, Series, Style, TimeSeries, XySeries};
use chart_render_skia::{render_to_png, SkiaProvider};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let loaded = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            let data = load_xy_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} points from {}", data.len(), path.display());
            if data.is_empty() {
                anyhow::bail!("no rows loaded; check headers/delimiter.");
            }
            Some(XySeries::new(data).with_name("csv"))
        }
        None => None,
    };

    let theme_name = std::env::var("CHART_THEME").unwrap_or_else(|_| "light".to_string());
    let defaults = Defaults::with_theme(theme::find(&theme_name));

    // Daily samples starting 2024-01-01
    let start = 1_704_067_200_i64;
    let times: Vec<i64> = (0..30).map(|d| start + d * 86_400).collect();
    let values: Vec<f64> = (0..30).map(|d| 100.0 + (d as f64 * 0.4).sin() * 8.0 + d as f64 * 0.5).collect();
    let daily = TimeSeries::new(times.clone(), values).with_name("daily");
    let trend = TimeSeries::new(times, (0..30).map(|d| 100.0 + d as f64 * 0.5).collect())
        .with_name("trend")
        .with_style(Style::default().with_stroke_width(2.0));

    let mut chart = Chart::with_defaults(1024, 400, defaults).with_title("Daily value");
    chart.axes = Style::shown();
    chart.final_value_label = Style::shown();
    match &loaded {
        Some(series) => chart.add_series(series),
        None => {
            chart.add_series(&daily);
            chart.add_series(&trend);
        }
    }
    let names: Vec<&str> = chart.series.iter().map(|s| s.name()).collect();
    println!("Series: {names:?} (theme {})", chart.defaults.theme.name);

    let out = PathBuf::from("target/out/example_lines.png");
    render_to_png(&chart, &SkiaProvider::new(), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Load a two-column numeric CSV. The X column may be named x/time/timestamp/date, the Y
/// column y/value/close; otherwise the first two columns are used.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "date"]).unwrap_or(0);
    let i_y = idx(&["y", "value", "close"]).unwrap_or(1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push((x, y)),
            _ => println!("Skipping row {}: not numeric", row + 1),
        }
    }
    Ok(out)
}
