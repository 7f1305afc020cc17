use crate::units::*;

/// A rectangle on a canvas, specified by two opposite corners. Canvas coordinates
/// start at the top-left corner and grow to the right and downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x1: Px,
    /// The y-coordinate of the top edge.
    pub y1: Px,
    /// The x-coordinate of the right edge.
    pub x2: Px,
    /// The y-coordinate of the bottom edge.
    pub y2: Px,
}

impl Rect {
    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }

    /// The equivalent raster rectangle, `None` if the rectangle is empty or inverted
    pub(crate) fn to_skia(self) -> Option<tiny_skia::Rect> {
        tiny_skia::Rect::from_ltrb(self.x1.0, self.y1.0, self.x2.0, self.y2.0)
    }
}
