use crate::colour::Colour;
use crate::error::HandwriteError;
use crate::font::Typeface;
use crate::layout::Line;
use crate::perturb::Perturbation;
use crate::settings::Template;
use crate::units::Px;
use tiny_skia::Transform;

/// Perturbed font sizes never drop below this
pub const MIN_FONT_SIZE: Px = Px(1.0);

/// A single character ready to be drawn: where it sits on the line and how the
/// randomness moved it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    /// The perturbed font size
    pub size: Px,
    /// Pen position (x) and baseline (y) before jitter
    pub origin: (Px, Px),
    /// The unperturbed advance the line breaker measured for this character
    pub advance: Px,
    /// Positional jitter, added after rotation
    pub offset: (Px, Px),
    /// Rotation around [`GlyphPlacement::anchor`], in radians
    pub rotation: f32,
    pub colour: Colour,
}

impl GlyphPlacement {
    /// The point the glyph rotates around: the centre of its em box standing on
    /// the baseline
    pub fn anchor(&self) -> (Px, Px) {
        let (x, baseline) = self.origin;
        (x + self.advance / 2.0, baseline - self.size / 2.0)
    }

    /// Canvas transform for the glyph: rotation around the anchor, then the
    /// positional jitter
    pub fn transform(&self) -> Transform {
        let (ax, ay) = self.anchor();
        let (dx, dy) = self.offset;
        Transform::from_rotate_at(self.rotation.to_degrees(), ax.0, ay.0)
            .post_concat(Transform::from_translate(dx.0, dy.0))
    }
}

/// Computes the placement of every character of a positioned line.
///
/// Each character gets its own independent samples, in this order: font size,
/// x offset, y offset, rotation, and the spacing after it. Nothing carries over
/// from one character to the next. Advances are measured at the unperturbed font
/// size so the line keeps the width the line breaker gave it.
pub fn place_line<T, P>(
    line: &Line<'_>,
    template: &Template,
    typeface: &T,
    perturbation: &mut P,
) -> Result<Vec<GlyphPlacement>, HandwriteError>
where
    T: Typeface + ?Sized,
    P: Perturbation + ?Sized,
{
    let sigmas = template.perturbations;
    let mut placements = Vec::with_capacity(line.text.len());
    let mut x = template.margins.left;

    for ch in line.text.chars() {
        let advance = typeface.advance(ch, template.font_size)?;

        let size = (template.font_size + Px(perturbation.sample(sigmas.font_size))).max(MIN_FONT_SIZE);
        let dx = perturbation.sample(sigmas.x);
        let dy = perturbation.sample(sigmas.y);
        let rotation = perturbation.sample(sigmas.theta);

        placements.push(GlyphPlacement {
            ch,
            size,
            origin: (x, line.baseline),
            advance,
            offset: (Px(dx), Px(dy)),
            rotation,
            colour: template.ink,
        });

        x += advance + template.word_spacing + Px(perturbation.sample(sigmas.word_spacing));
    }

    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perturb::Unperturbed;
    use crate::testing::{template, BlockFace, Scripted};

    fn line(text: &str) -> Line<'_> {
        Line {
            text,
            start: 0,
            baseline: Px(80.0),
        }
    }

    #[test]
    fn unperturbed_glyphs_sit_on_a_grid() {
        let t = template(667, 945);
        let glyphs = place_line(&line("abc"), &t, &BlockFace::default(), &mut Unperturbed).unwrap();
        let xs: Vec<Px> = glyphs.iter().map(|g| g.origin.0).collect();
        assert_eq!(xs, [Px(10.0), Px(21.0), Px(32.0)]);
        for glyph in &glyphs {
            assert_eq!(glyph.origin.1, Px(80.0));
            assert_eq!(glyph.size, Px(30.0));
            assert_eq!(glyph.offset, (Px::ZERO, Px::ZERO));
            assert_eq!(glyph.rotation, 0.0);
            assert_eq!(glyph.colour, t.ink);
        }
    }

    #[test]
    fn every_channel_gets_its_own_sample() {
        let mut t = template(667, 945);
        t.perturbations.font_size = 1.0;
        t.perturbations.x = 1.0;
        t.perturbations.y = 1.0;
        t.perturbations.theta = 1.0;
        t.perturbations.word_spacing = 1.0;
        let mut source = Scripted::new(&[2.0, 0.5, -0.5, 0.1, 3.0, -4.0, 1.0, 2.0, -0.2, 0.0]);
        let glyphs = place_line(&line("ab"), &t, &BlockFace::default(), &mut source).unwrap();

        assert_eq!(glyphs[0].size, Px(32.0));
        assert_eq!(glyphs[0].offset, (Px(0.5), Px(-0.5)));
        assert_eq!(glyphs[0].rotation, 0.1);
        // 10 + 10 advance + 1 spacing + 3 jitter
        assert_eq!(glyphs[1].origin.0, Px(24.0));
        assert_eq!(glyphs[1].size, Px(26.0));
        assert_eq!(glyphs[1].offset, (Px(1.0), Px(2.0)));
        assert_eq!(glyphs[1].rotation, -0.2);
    }

    #[test]
    fn font_size_never_collapses() {
        let mut t = template(667, 945);
        t.perturbations.font_size = 10.0;
        let mut source = Scripted::new(&[-100.0]);
        let glyphs = place_line(&line("a"), &t, &BlockFace::default(), &mut source).unwrap();
        assert_eq!(glyphs[0].size, MIN_FONT_SIZE);
    }

    #[test]
    fn empty_line_places_nothing() {
        let t = template(667, 945);
        let glyphs = place_line(&line(""), &t, &BlockFace::default(), &mut Unperturbed).unwrap();
        assert!(glyphs.is_empty());
    }

    #[test]
    fn anchor_is_the_middle_of_the_em_box() {
        let glyph = GlyphPlacement {
            ch: 'a',
            size: Px(30.0),
            origin: (Px(10.0), Px(80.0)),
            advance: Px(20.0),
            offset: (Px::ZERO, Px::ZERO),
            rotation: 0.0,
            colour: crate::colours::BLACK,
        };
        assert_eq!(glyph.anchor(), (Px(20.0), Px(65.0)));
        assert!(glyph.transform().is_identity());

        let shifted = GlyphPlacement {
            offset: (Px(2.0), Px(-3.0)),
            ..glyph
        };
        let t = shifted.transform();
        assert_eq!((t.tx, t.ty), (2.0, -3.0));
    }
}
