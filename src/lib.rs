//! Render plain text into raster pages that look handwritten.
//!
//! Text is broken into lines and pages with a deterministic layout, and every
//! line and character then gets small, independent Gaussian perturbations of its
//! spacing, size, position and rotation before it is drawn with a TrueType font.
//!
//! ```no_run
//! use handwrite_gen::{handwrite, output::save_pages, Settings};
//!
//! let settings = Settings::default()
//!     .with_font_file("fonts/handwriting.ttf")
//!     .with_seed(42);
//! let pages = handwrite("Dear diary,\ntoday I learned Rust.", &settings)
//!     .expect("text can be written");
//! let saved = save_pages(&pages, "outputs").expect("pages can be saved");
//! println!("wrote {} pages", saved.len());
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Line breaking, pagination and glyph placement
pub mod layout;

/// Saving rendered pages as PNG files
pub mod output;

/// Common page sizes
pub mod pagesize;

/// Bundling rendered pages into a PDF document
pub mod pdf;

mod perturb;
pub use perturb::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod settings;
pub use settings::*;

mod units;
pub use units::*;

#[cfg(test)]
mod testing;

/// Re-export of the raster library glyphs are drawn with, for custom [Typeface] implementations
pub use tiny_skia;
