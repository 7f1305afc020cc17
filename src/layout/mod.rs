//! Turning text into positioned glyphs.
//!
//! Layout happens in three stages, each consuming the output of the previous one:
//!
//! - [`LineBreaker`](crate::layout::LineBreaker) - splits the text into lines that fit the
//!   printable width, honouring forbidden leading and trailing characters
//! - [`paginate`](crate::layout::paginate) - stacks the lines into pages and gives each line
//!   its (perturbed) baseline
//! - [`place_line`](crate::layout::place_line) - gives every character of a line its
//!   perturbed size, position and rotation
//!
//! # Example
//!
//! ```no_run
//! use handwrite_gen::{Font, Gaussian, Settings, Template};
//! use handwrite_gen::layout::{paginate, place_line, LineBreaker};
//!
//! let font = Font::load(std::fs::read("font.ttf").unwrap()).expect("can load font");
//! let template = Template::from_settings(&Settings::default()).expect("valid settings");
//! let mut perturbation = Gaussian::seeded(42);
//!
//! let lines = LineBreaker::new("Hello, world!", &template, &font);
//! let pages = paginate(lines, &template, &mut perturbation).expect("text fits");
//! for page in &pages {
//!     for line in &page.lines {
//!         let glyphs = place_line(line, &template, &font, &mut perturbation).unwrap();
//!         println!("page {} line at {}: {} glyphs", page.index, line.baseline, glyphs.len());
//!     }
//! }
//! ```

mod glyphs;
mod lines;
mod margins;
mod pages;

pub use glyphs::*;
pub use lines::*;
pub use margins::*;
pub use pages::*;
