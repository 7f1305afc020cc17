//! Render parameters.
//!
//! [`Settings`] is what a caller fills in, in nominal pixels of the unscaled page.
//! [`Template`] is the validated, immutable parameter set of a single render pass,
//! with every layout length multiplied by the supersampling rate.
//!
//! # Example
//!
//! ```
//! use handwrite_gen::{Settings, Template, Perturbations};
//!
//! let settings = Settings::default()
//!     .with_rate(2)
//!     .with_perturbations(Perturbations::none());
//! let template = Template::from_settings(&settings).expect("default geometry is valid");
//! assert_eq!(template.width, 667 * 2);
//! ```

use crate::colour::{colours, Colour};
use crate::error::ConfigurationError;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::rect::Rect;
use crate::units::Px;
use std::collections::HashSet;
use std::path::PathBuf;

/// The supersampling rates a caller is expected to pick from
pub const RATES: [u32; 7] = [1, 2, 4, 8, 16, 32, 64];

/// Where the font comes from. The font is loaded once per render call.
#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    /// A TrueType / OpenType file on disk
    Path(PathBuf),
    /// The raw bytes of a TrueType / OpenType font
    Bytes(Vec<u8>),
}

/// Standard deviations of the random perturbation channels.
///
/// `line_spacing`, `font_size`, `word_spacing`, `x` and `y` are in pixels; `theta`
/// is in radians. A sigma of zero disables its channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbations {
    /// Jitter of the distance between consecutive baselines, sampled once per line
    pub line_spacing: f32,
    /// Jitter of the font size, sampled once per character
    pub font_size: f32,
    /// Jitter of the gap after each character
    pub word_spacing: f32,
    /// Horizontal offset of each glyph
    pub x: f32,
    /// Vertical offset of each glyph
    pub y: f32,
    /// Rotation of each glyph around its anchor
    pub theta: f32,
}

impl Default for Perturbations {
    fn default() -> Self {
        Perturbations {
            line_spacing: 1.0,
            font_size: 1.0,
            word_spacing: 1.0,
            x: 1.0,
            y: 1.0,
            theta: 0.05,
        }
    }
}

impl Perturbations {
    /// Every channel disabled: the output is fully deterministic
    pub fn none() -> Perturbations {
        Perturbations {
            line_spacing: 0.0,
            font_size: 0.0,
            word_spacing: 0.0,
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    fn channels(&self) -> [(&'static str, f32); 6] {
        [
            ("line spacing sigma", self.line_spacing),
            ("font size sigma", self.font_size),
            ("word spacing sigma", self.word_spacing),
            ("x sigma", self.x),
            ("y sigma", self.y),
            ("theta sigma", self.theta),
        ]
    }
}

/// Caller-facing render settings. Lengths are nominal pixels at rate 1; the
/// defaults write 30px characters on a 667x945 sheet at four times supersampling.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub font: Option<FontSource>,
    /// Supersampling rate; layout lengths are multiplied by it
    pub rate: u32,
    pub page_size: PageSize,
    pub font_size: Px,
    /// Distance between consecutive baselines
    pub line_spacing: Px,
    pub margins: Margins,
    /// Gap added after every character
    pub word_spacing: Px,
    pub perturbations: Perturbations,
    /// Also multiply the `x` and `y` glyph jitter by the rate. Off by default, so
    /// a higher rate gives a sharper image of the same shakiness.
    pub scale_stroke_perturbations: bool,
    /// Characters that must not start a wrapped line
    pub forbidden_leading: String,
    /// Characters that must not end a wrapped line
    pub forbidden_trailing: String,
    pub ink: Colour,
    pub background: Colour,
    /// Seed for the perturbation source; `None` draws a fresh one per call
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            font: None,
            rate: 4,
            page_size: pagesize::DEFAULT,
            font_size: Px(30.0),
            line_spacing: Px(70.0),
            margins: Margins::all(Px(10.0)),
            word_spacing: Px(1.0),
            perturbations: Perturbations::default(),
            scale_stroke_perturbations: false,
            forbidden_leading: "，。".to_string(),
            forbidden_trailing: "“（[<".to_string(),
            ink: colours::BLACK,
            background: colours::TRANSPARENT,
            seed: None,
        }
    }
}

impl Settings {
    pub fn with_font(mut self, font: FontSource) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_font_file<P: Into<PathBuf>>(self, path: P) -> Self {
        self.with_font(FontSource::Path(path.into()))
    }

    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_font_size<D: Into<Px>>(mut self, font_size: D) -> Self {
        self.font_size = font_size.into();
        self
    }

    pub fn with_line_spacing<D: Into<Px>>(mut self, line_spacing: D) -> Self {
        self.line_spacing = line_spacing.into();
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_word_spacing<D: Into<Px>>(mut self, word_spacing: D) -> Self {
        self.word_spacing = word_spacing.into();
        self
    }

    pub fn with_perturbations(mut self, perturbations: Perturbations) -> Self {
        self.perturbations = perturbations;
        self
    }

    pub fn with_scaled_stroke_perturbations(mut self, scale: bool) -> Self {
        self.scale_stroke_perturbations = scale;
        self
    }

    pub fn with_forbidden_leading<S: ToString>(mut self, chars: S) -> Self {
        self.forbidden_leading = chars.to_string();
        self
    }

    pub fn with_forbidden_trailing<S: ToString>(mut self, chars: S) -> Self {
        self.forbidden_trailing = chars.to_string();
        self
    }

    pub fn with_ink(mut self, ink: Colour) -> Self {
        self.ink = ink;
        self
    }

    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// The immutable parameter set of one render pass, in pixels of the supersampled
/// canvas. Built from [`Settings`] or filled in directly; either way it is
/// validated before any layout starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    pub margins: Margins,
    pub font_size: Px,
    pub line_spacing: Px,
    pub word_spacing: Px,
    pub perturbations: Perturbations,
    pub forbidden_leading: HashSet<char>,
    pub forbidden_trailing: HashSet<char>,
    pub ink: Colour,
    pub background: Colour,
}

impl Template {
    /// Scale the settings by their rate and validate the result
    pub fn from_settings(settings: &Settings) -> Result<Template, ConfigurationError> {
        let rate = settings.rate;
        if rate == 0 {
            return Err(ConfigurationError::ZeroRate);
        }
        if !RATES.contains(&rate) {
            log::warn!("unusual supersampling rate {rate}, expected one of {RATES:?}");
        }
        let page = settings
            .page_size
            .scaled(rate)
            .ok_or(ConfigurationError::InvalidValue {
                field: "page size",
                value: settings.page_size.width.max(settings.page_size.height) as f32
                    * rate as f32,
            })?;

        let scale = rate as f32;
        let stroke_scale = if settings.scale_stroke_perturbations {
            scale
        } else {
            1.0
        };
        let sigmas = settings.perturbations;
        let perturbations = Perturbations {
            line_spacing: sigmas.line_spacing * scale,
            font_size: sigmas.font_size * scale,
            word_spacing: sigmas.word_spacing * scale,
            x: sigmas.x * stroke_scale,
            y: sigmas.y * stroke_scale,
            // an angle does not grow with pixel density
            theta: sigmas.theta,
        };

        let template = Template {
            width: page.width,
            height: page.height,
            margins: settings.margins.scaled(rate),
            font_size: settings.font_size * scale,
            line_spacing: settings.line_spacing * scale,
            word_spacing: settings.word_spacing * scale,
            perturbations,
            forbidden_leading: settings.forbidden_leading.chars().collect(),
            forbidden_trailing: settings.forbidden_trailing.chars().collect(),
            ink: settings.ink,
            background: settings.background,
        };
        template.validate()?;
        Ok(template)
    }

    /// Check the invariants every render pass relies on
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigurationError::EmptyPage {
                width: self.width,
                height: self.height,
            });
        }

        for (field, value) in [("font size", self.font_size), ("line spacing", self.line_spacing)]
        {
            if !value.is_non_negative() {
                return Err(ConfigurationError::InvalidValue {
                    field,
                    value: value.0,
                });
            }
            if value.0 == 0.0 {
                return Err(ConfigurationError::NotPositive {
                    field,
                    value: value.0,
                });
            }
        }

        let lengths = self
            .margins
            .sides()
            .into_iter()
            .chain([("word spacing", self.word_spacing)]);
        for (field, value) in lengths {
            if !value.is_non_negative() {
                return Err(ConfigurationError::InvalidValue {
                    field,
                    value: value.0,
                });
            }
        }

        for (field, value) in self.perturbations.channels() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigurationError::InvalidValue { field, value });
            }
        }

        let content = self.content_box();
        if content.width() <= Px::ZERO || content.height() <= Px::ZERO {
            return Err(ConfigurationError::NoPrintableArea {
                width: content.width(),
                height: content.height(),
            });
        }

        if self.font_size > self.line_spacing {
            log::warn!(
                "font size {} is larger than the line spacing {}, lines will overlap",
                self.font_size,
                self.line_spacing
            );
        }

        Ok(())
    }

    /// The part of the canvas inside the margins
    pub fn content_box(&self) -> Rect {
        Rect {
            x1: self.margins.left,
            y1: self.margins.top,
            x2: Px::from(self.width) - self.margins.right,
            y2: Px::from(self.height) - self.margins.bottom,
        }
    }

    pub fn printable_width(&self) -> Px {
        self.content_box().width()
    }

    pub fn printable_height(&self) -> Px {
        self.content_box().height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_lengths_scale_with_rate() {
        let template = Template::from_settings(&Settings::default()).unwrap();
        assert_eq!((template.width, template.height), (2668, 3780));
        assert_eq!(template.font_size, Px(120.0));
        assert_eq!(template.line_spacing, Px(280.0));
        assert_eq!(template.word_spacing, Px(4.0));
        assert_eq!(template.margins, Margins::all(Px(40.0)));
        assert_eq!(template.perturbations.line_spacing, 4.0);
        assert_eq!(template.perturbations.font_size, 4.0);
        assert_eq!(template.perturbations.word_spacing, 4.0);
    }

    #[test]
    fn unusual_rates_are_accepted() {
        assert!(RATES.contains(&Settings::default().rate));
        assert!(!RATES.contains(&3));
        let template = Template::from_settings(&Settings::default().with_rate(3)).unwrap();
        assert_eq!(template.width, 667 * 3);
    }

    #[test]
    fn stroke_sigmas_keep_pixel_scale() {
        let template = Template::from_settings(&Settings::default().with_rate(8)).unwrap();
        assert_eq!(template.perturbations.x, 1.0);
        assert_eq!(template.perturbations.y, 1.0);
        assert_eq!(template.perturbations.theta, 0.05);

        let scaled = Settings::default()
            .with_rate(8)
            .with_scaled_stroke_perturbations(true);
        let template = Template::from_settings(&scaled).unwrap();
        assert_eq!(template.perturbations.x, 8.0);
        assert_eq!(template.perturbations.y, 8.0);
        assert_eq!(template.perturbations.theta, 0.05);
    }

    #[test]
    fn forbidden_sets_hold_every_character() {
        let template = Template::from_settings(&Settings::default()).unwrap();
        assert!(template.forbidden_leading.contains(&'，'));
        assert!(template.forbidden_leading.contains(&'。'));
        assert_eq!(template.forbidden_trailing.len(), 4);
        assert!(template.forbidden_trailing.contains(&'（'));
    }

    #[test]
    fn zero_rate_is_rejected() {
        let err = Template::from_settings(&Settings::default().with_rate(0)).unwrap_err();
        assert!(matches!(err, ConfigurationError::ZeroRate));
    }

    #[test]
    fn negative_sigma_is_rejected() {
        let settings = Settings::default().with_perturbations(Perturbations {
            font_size: -1.0,
            ..Perturbations::default()
        });
        let err = Template::from_settings(&settings).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidValue {
                field: "font size sigma",
                ..
            }
        ));
    }

    #[test]
    fn margins_covering_the_page_are_rejected() {
        let settings = Settings::default()
            .with_rate(1)
            .with_margins(Margins::symmetric(Px(10.0), Px(400.0)));
        let err = Template::from_settings(&settings).unwrap_err();
        assert!(matches!(err, ConfigurationError::NoPrintableArea { .. }));
    }

    #[test]
    fn negative_margin_is_rejected() {
        let settings = Settings::default().with_margins(Margins::trbl(
            Px(10.0),
            Px(10.0),
            Px(-1.0),
            Px(10.0),
        ));
        let err = Template::from_settings(&settings).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidValue {
                field: "bottom margin",
                ..
            }
        ));
    }

    #[test]
    fn zero_font_size_is_rejected() {
        let err = Template::from_settings(&Settings::default().with_font_size(0.0)).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NotPositive {
                field: "font size",
                ..
            }
        ));
    }

    #[test]
    fn content_box_is_inside_the_margins() {
        let template = Template::from_settings(&Settings::default().with_rate(1)).unwrap();
        let content = template.content_box();
        assert_eq!(content.x1, Px(10.0));
        assert_eq!(content.y2, Px(935.0));
        assert_eq!(template.printable_width(), Px(647.0));
        assert_eq!(template.printable_height(), Px(925.0));
    }
}
