//! Deterministic stand-ins for fonts and randomness used by the unit tests.

use crate::canvas::Canvas;
use crate::colour::colours;
use crate::error::HandwriteError;
use crate::font::Typeface;
use crate::layout::{GlyphPlacement, Margins};
use crate::perturb::Perturbation;
use crate::rect::Rect;
use crate::settings::{Perturbations, Template};
use crate::units::Px;
use std::collections::{HashMap, HashSet};

/// A typeface where every character is a solid block of a fixed advance
pub(crate) struct BlockFace {
    advance: Px,
    wide: HashMap<char, Px>,
    missing: HashSet<char>,
}

impl Default for BlockFace {
    fn default() -> Self {
        BlockFace {
            advance: Px(10.0),
            wide: HashMap::new(),
            missing: HashSet::new(),
        }
    }
}

impl BlockFace {
    pub(crate) fn with_wide(mut self, ch: char, advance: Px) -> Self {
        self.wide.insert(ch, advance);
        self
    }

    pub(crate) fn with_missing(mut self, ch: char) -> Self {
        self.missing.insert(ch);
        self
    }
}

impl Typeface for BlockFace {
    fn advance(&self, ch: char, _size: Px) -> Result<Px, HandwriteError> {
        if self.missing.contains(&ch) {
            return Err(HandwriteError::MissingGlyph(ch));
        }
        Ok(self.wide.get(&ch).copied().unwrap_or(self.advance))
    }

    fn draw(&self, canvas: &mut Canvas, glyph: &GlyphPlacement) -> Result<(), HandwriteError> {
        if glyph.ch.is_whitespace() {
            return Ok(());
        }
        let (x, baseline) = glyph.origin;
        let rect = Rect {
            x1: x,
            y1: baseline - glyph.size,
            x2: x + glyph.advance,
            y2: baseline,
        };
        canvas.fill_rect(rect, glyph.colour, glyph.transform());
        Ok(())
    }
}

/// Replays a fixed list of samples, cycling through it. Disabled channels
/// (sigma zero) get zero and do not advance the list.
pub(crate) struct Scripted {
    values: Vec<f32>,
    next: usize,
}

impl Scripted {
    pub(crate) fn new(values: &[f32]) -> Self {
        Scripted {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl Perturbation for Scripted {
    fn sample(&mut self, sigma: f32) -> f32 {
        if sigma == 0.0 || self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// A template at rate 1 with 10px margins, font size 30, line spacing 70, word
/// spacing 1, no perturbation, no forbidden characters, black on white
pub(crate) fn template(width: u32, height: u32) -> Template {
    Template {
        width,
        height,
        margins: Margins::all(Px(10.0)),
        font_size: Px(30.0),
        line_spacing: Px(70.0),
        word_spacing: Px(1.0),
        perturbations: Perturbations::none(),
        forbidden_leading: HashSet::new(),
        forbidden_trailing: HashSet::new(),
        ink: colours::BLACK,
        background: colours::WHITE,
    }
}
