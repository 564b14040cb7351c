// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Pixel count from an unsigned padding, saturating at `i32::MAX`.
pub fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Pixel rectangle. Width and height are derived, so they always agree with the edges;
/// both may be zero or negative when the inputs that produced the box were too large.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left.saturating_add(width), bottom: top.saturating_add(height) }
    }
    pub const fn width(&self) -> i32 { self.right.saturating_sub(self.left) }
    pub const fn height(&self) -> i32 { self.bottom.saturating_sub(self.top) }

    /// True when either dimension is zero or negative.
    pub const fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Corner points in drawing order, closing back on the first corner.
    pub const fn outline(&self) -> [(i32, i32); 5] {
        [
            (self.left, self.top),
            (self.right, self.top),
            (self.right, self.bottom),
            (self.left, self.bottom),
            (self.left, self.top),
        ]
    }
}
