// File: crates/chart-core/src/theme.rs
// Summary: Color type and theme presets (fills, strokes, text and the series palette).

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
}

const LIGHT_PALETTE: &[Color] = &[
    Color::from_rgb(0, 116, 217),
    Color::from_rgb(0, 217, 116),
    Color::from_rgb(217, 0, 116),
];

const DARK_PALETTE: &[Color] = &[
    Color::from_rgb(64, 160, 255),
    Color::from_rgb(40, 200, 120),
    Color::from_rgb(220, 80, 80),
    Color::from_rgb(255, 230, 70),
];

const SOLARIZED_PALETTE: &[Color] = &[
    Color::from_rgb(0x26, 0x8b, 0xd2), // blue
    Color::from_rgb(0x2a, 0xa1, 0x98), // cyan
    Color::from_rgb(0xdc, 0x32, 0x2f), // red
    Color::from_rgb(0xb5, 0x89, 0x00), // yellow
    Color::from_rgb(0x6c, 0x71, 0xc4), // violet
];

const HIGH_CONTRAST_PALETTE: &[Color] = &[
    Color::from_rgb(0x00, 0xff, 0xff),
    Color::from_rgb(0x00, 0xff, 0x00),
    Color::from_rgb(0xff, 0x00, 0xff),
    Color::from_rgb(0xff, 0xff, 0x00),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub background_stroke: Color,
    pub canvas: Color,
    pub canvas_stroke: Color,
    pub axis: Color,
    pub text: Color,
    pub final_label_background: Color,
    /// Default series stroke colors, indexed by series position modulo length.
    pub series_palette: &'static [Color],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(239, 239, 239),
            background_stroke: Color::from_rgb(32, 32, 32),
            canvas: Color::from_rgb(255, 255, 255),
            canvas_stroke: Color::from_rgb(32, 32, 32),
            axis: Color::from_rgb(0, 0, 0),
            text: Color::from_rgb(0, 0, 0),
            final_label_background: Color::from_rgb(255, 255, 255),
            series_palette: LIGHT_PALETTE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            background_stroke: Color::from_rgb(40, 40, 45),
            canvas: Color::from_rgb(24, 24, 28),
            canvas_stroke: Color::from_rgb(40, 40, 45),
            axis: Color::from_rgb(180, 180, 190),
            text: Color::from_rgb(235, 235, 245),
            final_label_background: Color::from_rgb(18, 18, 20),
            series_palette: DARK_PALETTE,
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::from_rgb(0x00, 0x2b, 0x36),        // base03
            background_stroke: Color::from_rgb(0x07, 0x36, 0x42), // base02
            canvas: Color::from_rgb(0x07, 0x36, 0x42),
            canvas_stroke: Color::from_rgb(0x58, 0x6e, 0x75),     // base01
            axis: Color::from_rgb(0x93, 0xa1, 0xa1),              // base1
            text: Color::from_rgb(0xee, 0xe8, 0xd5),              // base2
            final_label_background: Color::from_rgb(0x00, 0x2b, 0x36),
            series_palette: SOLARIZED_PALETTE,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_rgb(0xee, 0xe8, 0xd5),        // base2
            background_stroke: Color::from_rgb(0x93, 0xa1, 0xa1), // base1
            canvas: Color::from_rgb(0xfd, 0xf6, 0xe3),            // base3
            canvas_stroke: Color::from_rgb(0x93, 0xa1, 0xa1),
            axis: Color::from_rgb(0x65, 0x7b, 0x83),              // base00
            text: Color::from_rgb(0x00, 0x2b, 0x36),              // base03
            final_label_background: Color::from_rgb(0xfd, 0xf6, 0xe3),
            series_palette: SOLARIZED_PALETTE,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_rgb(0x00, 0x00, 0x00),
            background_stroke: Color::from_rgb(0x22, 0x22, 0x22),
            canvas: Color::from_rgb(0x00, 0x00, 0x00),
            canvas_stroke: Color::from_rgb(0xcc, 0xcc, 0xcc),
            axis: Color::from_rgb(0xff, 0xff, 0xff),
            text: Color::from_rgb(0xff, 0xff, 0xff),
            final_label_background: Color::from_rgb(0x00, 0x00, 0x00),
            series_palette: HIGH_CONTRAST_PALETTE,
        }
    }

    /// Default stroke color for the series at `index`; the axis color when the palette is empty.
    pub fn series_color(&self, index: usize) -> Color {
        match self.series_palette.len() {
            0 => self.axis,
            n => self.series_palette[index % n],
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
