use crate::units::Px;

/// Blank space left around the written area of a page. Glyph jitter may stray
/// slightly into the margins; the margins are what line breaking and pagination
/// respect.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Px, horizontal: Px) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Px::ZERO)
    }

    /// Multiply every side by the supersampling rate
    pub fn scaled(&self, rate: u32) -> Margins {
        let rate = rate as f32;
        Margins {
            top: self.top * rate,
            right: self.right * rate,
            bottom: self.bottom * rate,
            left: self.left * rate,
        }
    }

    pub(crate) fn sides(&self) -> [(&'static str, Px); 4] {
        [
            ("top margin", self.top),
            ("right margin", self.right),
            ("bottom margin", self.bottom),
            ("left margin", self.left),
        ]
    }
}
