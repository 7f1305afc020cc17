use crate::canvas::Canvas;
use crate::error::{ConfigurationError, HandwriteError};
use crate::layout::GlyphPlacement;
use crate::settings::FontSource;
use crate::units::Px;
use owned_ttf_parser::{AsFaceRef, GlyphId, OutlineBuilder, OwnedFace};
use tiny_skia::{Path, PathBuilder};

/// How many spaces a tab is worth when the font has no glyph for it
const TABSIZE: f32 = 4.0;

/// What the layout pipeline needs from a font: measuring a character and
/// drawing a placed glyph. Implemented by [`Font`] for TrueType / OpenType faces.
pub trait Typeface {
    /// The horizontal advance of `ch` at the given size
    fn advance(&self, ch: char, size: Px) -> Result<Px, HandwriteError>;

    /// Draw a placed glyph onto the canvas, applying its offset and rotation
    fn draw(&self, canvas: &mut Canvas, glyph: &GlyphPlacement) -> Result<(), HandwriteError>;
}

/// A parsed TrueType or OpenType font.
///
/// Characters the font has no glyph for are reported as
/// [`HandwriteError::MissingGlyph`] instead of being replaced, except for
/// whitespace, which falls back to the width of a space.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, ConfigurationError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse the font a [`FontSource`] points at
    pub fn from_source(source: &FontSource) -> Result<Font, ConfigurationError> {
        match source {
            FontSource::Bytes(bytes) => Font::load(bytes.clone()),
            FontSource::Path(path) => {
                let bytes =
                    std::fs::read(path).map_err(|source| ConfigurationError::UnreadableFont {
                        path: path.clone(),
                        source,
                    })?;
                Font::load(bytes)
            }
        }
    }

    fn scaling(&self, size: Px) -> Px {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    fn glyph_advance(&self, gid: GlyphId, size: Px) -> Px {
        self.scaling(size)
            * self
                .face
                .as_face_ref()
                .glyph_hor_advance(gid)
                .unwrap_or_default() as f32
    }

    fn outline(&self, gid: GlyphId, glyph: &GlyphPlacement) -> Option<Path> {
        let (x, y) = glyph.origin;
        let mut builder = GlyphPathBuilder::new(x.0, y.0, self.scaling(glyph.size).0);
        self.face.as_face_ref().outline_glyph(gid, &mut builder)?;
        builder.finish()
    }
}

impl Typeface for Font {
    fn advance(&self, ch: char, size: Px) -> Result<Px, HandwriteError> {
        if let Some(gid) = self.face.as_face_ref().glyph_index(ch) {
            return Ok(self.glyph_advance(gid, size));
        }
        if !ch.is_whitespace() {
            return Err(HandwriteError::MissingGlyph(ch));
        }

        let space = match self.face.as_face_ref().glyph_index(' ') {
            Some(gid) => self.glyph_advance(gid, size),
            None => size / 2.0,
        };
        Ok(if ch == '\t' { space * TABSIZE } else { space })
    }

    fn draw(&self, canvas: &mut Canvas, glyph: &GlyphPlacement) -> Result<(), HandwriteError> {
        let Some(gid) = self.face.as_face_ref().glyph_index(glyph.ch) else {
            if glyph.ch.is_whitespace() {
                return Ok(());
            }
            return Err(HandwriteError::MissingGlyph(glyph.ch));
        };

        // spaces and other blank glyphs have no outline
        let Some(path) = self.outline(gid, glyph) else {
            return Ok(());
        };

        canvas.fill_path(&path, glyph.colour, glyph.transform());
        Ok(())
    }
}

/// Collects a glyph outline in font units into a canvas path, flipping the
/// y-axis so that the outline stands on the baseline at `origin`.
struct GlyphPathBuilder {
    builder: PathBuilder,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn new(origin_x: f32, origin_y: f32, scale: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            origin_x,
            origin_y,
            scale,
        }
    }

    fn x(&self, x: f32) -> f32 {
        self.origin_x + x * self.scale
    }

    fn y(&self, y: f32) -> f32 {
        self.origin_y - y * self.scale
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = (self.x(x), self.y(y));
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = (self.x(x), self.y(y));
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1, x, y) = (self.x(x1), self.y(y1), self.x(x), self.y(y));
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = (self.x(x1), self.y(y1));
        let (x2, y2) = (self.x(x2), self.y(y2));
        let (x, y) = (self.x(x), self.y(y));
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
