// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the single-pass render pipeline driving an injected renderer.

use std::io::Write;

use tracing::{debug, warn};

use crate::{axis, draw};
use crate::error::ChartError;
use crate::render::{Font, Renderer, RendererProvider};
use crate::scale::Range;
use crate::series::Series;
use crate::style::Style;
use crate::types::{Defaults, HEIGHT, WIDTH};

/// Everything needed for one render. Series are borrowed for the chart's lifetime and
/// only read; all derived geometry lives inside `render`.
#[derive(Clone)]
pub struct Chart<'a> {
    pub title: String,
    pub title_style: Style,

    pub width: i32,
    pub height: i32,

    pub background: Style,
    pub canvas: Style,
    pub axes: Style,
    pub final_value_label: Style,

    /// Explicit bounds; `None` (or an all-zero range) is computed from the data.
    pub x_range: Option<Range>,
    pub y_range: Option<Range>,

    /// Font for all text; the provider's default font is used when unset.
    pub font: Option<Font>,
    pub series: Vec<&'a dyn Series>,

    pub defaults: Defaults,
}

impl<'a> Chart<'a> {
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_defaults(width, height, Defaults::default())
    }

    pub fn with_defaults(width: i32, height: i32, defaults: Defaults) -> Self {
        Self {
            title: String::new(),
            title_style: Style::default(),
            width,
            height,
            background: Style::default(),
            canvas: Style::default(),
            axes: Style::default(),
            final_value_label: Style::default(),
            x_range: None,
            y_range: None,
            font: None,
            series: Vec::new(),
            defaults,
        }
    }

    pub fn add_series(&mut self, series: &'a dyn Series) {
        self.series.push(series);
    }

    pub fn with_series(mut self, series: &'a dyn Series) -> Self {
        self.add_series(series);
        self
    }

    /// Set a title and make it visible.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self.title_style.show = true;
        self
    }

    pub(crate) fn has_text(&self) -> bool {
        self.title_style.show || self.axes.show || self.final_value_label.show
    }

    /// The chart's own font, else the provider's application-wide default.
    pub fn resolve_font<P: RendererProvider>(&self, provider: &P) -> Result<Font, ChartError> {
        match &self.font {
            Some(f) => Ok(f.clone()),
            None => provider.default_font(),
        }
    }

    /// Lay out and draw the chart with a fresh renderer from `provider`, then save it to `w`.
    ///
    /// Fails with [`ChartError::NoSeries`] before the provider is touched when there is
    /// nothing to plot, and with [`ChartError::Font`] before drawing when text is needed but
    /// the font cannot be resolved or loaded. Once drawing starts only the final save can fail.
    pub fn render<P: RendererProvider, W: Write>(&self, provider: &P, w: &mut W) -> Result<(), ChartError> {
        if self.series.is_empty() {
            return Err(ChartError::NoSeries);
        }
        let mut r = provider.create(self.width, self.height)?;
        if self.has_text() {
            let font = self.resolve_font(provider)?;
            r.set_font(&font)?;
        }

        let canvas_box = self.canvas_box(&mut r);
        if canvas_box.is_degenerate() {
            warn!(width = canvas_box.width(), height = canvas_box.height(), "canvas box has no drawable area");
            return Err(ChartError::CanvasTooSmall { width: canvas_box.width(), height: canvas_box.height() });
        }
        let (xrange, yrange) = self.init_ranges(&canvas_box);
        debug!(?canvas_box, ?xrange, ?yrange, series = self.series.len(), "chart layout resolved");

        draw::background(self, &mut r);
        draw::canvas(self, &mut r, &canvas_box);
        axis::draw_axes(self, &mut r, &canvas_box, &xrange, &yrange);
        for (index, series) in self.series.iter().enumerate() {
            draw::series(self, &mut r, &canvas_box, index, *series, &xrange, &yrange);
        }
        draw::title(self, &mut r);

        r.save(w)
    }
}

impl Default for Chart<'_> {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
