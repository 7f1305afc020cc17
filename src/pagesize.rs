//! Pre-defined page sizes, in nominal pixels (before the supersampling rate is
//! applied).
//!
//! All sizes are provided in portrait orientation. Use
//! [`PageSize::landscape`](crate::pagesize::PageSize::landscape) to turn them.
//!
//! # Example
//!
//! ```
//! use handwrite_gen::pagesize::{self, PageSize};
//!
//! let page: PageSize = pagesize::A4.landscape();
//! assert!(page.width > page.height);
//! ```

/// Page dimensions in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

impl PageSize {
    pub const fn new(width: u32, height: u32) -> PageSize {
        PageSize { width, height }
    }

    /// Returns the size in portrait orientation (width ≤ height).
    pub fn portrait(self) -> PageSize {
        if self.width <= self.height {
            self
        } else {
            PageSize::new(self.height, self.width)
        }
    }

    /// Returns the size in landscape orientation (width ≥ height).
    pub fn landscape(self) -> PageSize {
        if self.width >= self.height {
            self
        } else {
            PageSize::new(self.height, self.width)
        }
    }

    /// The size of the supersampled canvas, `None` if it would overflow
    pub fn scaled(self, rate: u32) -> Option<PageSize> {
        Some(PageSize::new(
            self.width.checked_mul(rate)?,
            self.height.checked_mul(rate)?,
        ))
    }
}

/// The default writing sheet, 667 by 945 pixels
pub const DEFAULT: PageSize = PageSize::new(667, 945);

// iso a-series and letter at 96 pixels per inch
pub const A4: PageSize = PageSize::new(794, 1123);
pub const A5: PageSize = PageSize::new(559, 794);
pub const LETTER: PageSize = PageSize::new(816, 1056);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_swaps_only_when_needed() {
        assert_eq!(A5.portrait(), A5);
        assert_eq!(A5.landscape(), PageSize::new(794, 559));
        assert_eq!(A5.landscape().portrait(), A5);
    }

    #[test]
    fn scaling_detects_overflow() {
        assert_eq!(DEFAULT.scaled(4), Some(PageSize::new(2668, 3780)));
        assert_eq!(PageSize::new(u32::MAX, 1).scaled(2), None);
    }
}
