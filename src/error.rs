use crate::units::Px;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the parameters of a render call. These are detected before any
/// page is laid out.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("supersampling rate must be at least 1")]
    /// The supersampling rate was zero
    ZeroRate,

    #[error("page size {width}x{height} has no area")]
    /// The page has a zero width or height
    EmptyPage { width: u32, height: u32 },

    #[error("{field} must be a finite, non-negative number (got {value})")]
    /// A length or a perturbation sigma was negative, infinite or NaN
    InvalidValue { field: &'static str, value: f32 },

    #[error("{field} must be positive (got {value})")]
    /// The font size or line spacing was zero
    NotPositive { field: &'static str, value: f32 },

    #[error("margins leave no printable area ({width} x {height})")]
    /// The margins cover the whole page in at least one direction
    NoPrintableArea { width: Px, height: Px },

    #[error("no font was configured")]
    /// [Settings](crate::Settings) had no font source
    MissingFont,

    #[error("could not read font file {}", .path.display())]
    /// The font file could not be read from disk
    UnreadableFont {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}

/// All errors that a render call can produce. Every one of them aborts the whole
/// call; partial page lists are never returned.
#[derive(Error, Debug)]
pub enum HandwriteError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(
        "character {ch:?} at position {position} (line {line}) is {advance} wide, \
         which does not fit in the printable width of {printable_width}"
    )]
    /// A single character is wider than the printable width, so no line can hold it
    UnbreakableLine {
        ch: char,
        /// Index of the line that was being filled
        line: usize,
        /// Character index within the input text
        position: usize,
        advance: Px,
        printable_width: Px,
    },

    #[error(
        "a line needs {line_height} but the page only has {printable_height} \
         between its margins, so no page could ever hold a line"
    )]
    /// The page geometry cannot fit a single line
    PaginationDeadlock {
        line_height: Px,
        printable_height: Px,
    },

    #[error("the font has no glyph for {0:?}")]
    /// The typeface cannot measure or draw a character
    MissingGlyph(char),

    #[error("a canvas of {width}x{height} pixels could not be allocated")]
    /// The raster surface for a page could not be created
    Canvas { width: u32, height: u32 },

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to encode a page
    Image(#[from] image::ImageError),
}
