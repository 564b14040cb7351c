// File: crates/chart-core/tests/common/mod.rs
// Purpose: Recording renderer/provider shared by the integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};

use chart_core::{ChartError, Color, Font, FontProvider, Renderer, RendererProvider};

/// Every renderer call, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    Font(String),
    FontSize(f64),
    FontColor(Color),
    MoveTo(i32, i32),
    LineTo(i32, i32),
    Close,
    Stroke,
    FillStroke,
    Measure(String),
    Text(String, i32, i32),
    Save,
}

/// Each character measures `CHAR_WIDTH` pixels regardless of font size.
pub const CHAR_WIDTH: i32 = 6;

/// Leading tags of font files the recorder accepts as embedded bytes.
pub const SFNT_TAGS: [&[u8]; 4] = [&[0, 1, 0, 0], b"OTTO", b"true", b"ttcf"];

pub struct Recorder {
    log: Arc<Mutex<Vec<Call>>>,
}

impl Recorder {
    fn push(&self, c: Call) { self.log.lock().unwrap().push(c); }
}

impl Renderer for Recorder {
    fn set_fill_color(&mut self, color: Color) { self.push(Call::FillColor(color)); }
    fn set_stroke_color(&mut self, color: Color) { self.push(Call::StrokeColor(color)); }
    fn set_line_width(&mut self, width: f64) { self.push(Call::LineWidth(width)); }
    fn set_font(&mut self, font: &Font) -> Result<(), ChartError> {
        if let Some(bytes) = font.data() {
            if !SFNT_TAGS.iter().any(|tag| bytes.starts_with(tag)) {
                return Err(ChartError::Font(format!("'{}' is not a TrueType/OpenType font", font.family_name())));
            }
        }
        self.push(Call::Font(font.family_name().to_string()));
        Ok(())
    }
    fn set_font_size(&mut self, size: f64) { self.push(Call::FontSize(size)); }
    fn set_font_color(&mut self, color: Color) { self.push(Call::FontColor(color)); }
    fn move_to(&mut self, x: i32, y: i32) { self.push(Call::MoveTo(x, y)); }
    fn line_to(&mut self, x: i32, y: i32) { self.push(Call::LineTo(x, y)); }
    fn close(&mut self) { self.push(Call::Close); }
    fn stroke(&mut self) { self.push(Call::Stroke); }
    fn fill_stroke(&mut self) { self.push(Call::FillStroke); }
    fn measure_text(&self, text: &str) -> i32 {
        self.push(Call::Measure(text.to_string()));
        text.chars().count() as i32 * CHAR_WIDTH
    }
    fn text(&mut self, text: &str, x: i32, y: i32) { self.push(Call::Text(text.to_string(), x, y)); }
    fn save(self, w: &mut dyn Write) -> Result<(), ChartError> {
        self.push(Call::Save);
        w.write_all(b"recorded")?;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingProvider {
    pub log: Arc<Mutex<Vec<Call>>>,
    pub created: Mutex<Vec<(i32, i32)>>,
    pub font_missing: bool,
}

impl RecordingProvider {
    pub fn new() -> Self { Self::default() }

    pub fn without_fonts() -> Self {
        Self { font_missing: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> { self.log.lock().unwrap().clone() }

    pub fn texts(&self) -> Vec<(String, i32, i32)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c { Call::Text(t, x, y) => Some((t, x, y)), _ => None })
            .collect()
    }
}

impl FontProvider for RecordingProvider {
    fn default_font(&self) -> Result<Font, ChartError> {
        if self.font_missing {
            return Err(ChartError::Font("no fonts installed".into()));
        }
        Ok(Font::family("test-sans"))
    }
}

impl RendererProvider for RecordingProvider {
    type Renderer = Recorder;
    fn create(&self, width: i32, height: i32) -> Result<Recorder, ChartError> {
        self.created.lock().unwrap().push((width, height));
        Ok(Recorder { log: Arc::clone(&self.log) })
    }
}

/// Sink whose writes always fail.
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed"))
    }
    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
