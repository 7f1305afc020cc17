use crate::canvas::Canvas;
use crate::error::{ConfigurationError, HandwriteError};
use crate::font::{Font, Typeface};
use crate::layout::{paginate, place_line, LineBreaker, Page};
use crate::perturb::{Gaussian, Perturbation};
use crate::settings::{Settings, Template};
use image::RgbaImage;

/// One finished page of handwriting.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Zero-based position of the page in the document
    pub index: usize,
    pub image: RgbaImage,
}

/// Render text with the font and seed named in the settings.
///
/// The font is loaded once for this call and released when it returns. Without a
/// seed in the settings a fresh one is drawn from the operating system.
pub fn handwrite(text: &str, settings: &Settings) -> Result<Vec<RenderedPage>, HandwriteError> {
    let template = Template::from_settings(settings)?;
    let source = settings
        .font
        .as_ref()
        .ok_or(ConfigurationError::MissingFont)?;
    let font = Font::from_source(source)?;

    let mut perturbation = match settings.seed {
        Some(seed) => Gaussian::seeded(seed),
        None => Gaussian::from_entropy(),
    };

    handwrite_with(text, &template, &font, &mut perturbation)
}

/// Render text onto as many pages as it needs.
///
/// The whole text is broken into lines and paginated before the first pixel is
/// drawn, so layout errors never leave a partial page list behind. Pages come
/// back in text order.
pub fn handwrite_with<T, P>(
    text: &str,
    template: &Template,
    typeface: &T,
    perturbation: &mut P,
) -> Result<Vec<RenderedPage>, HandwriteError>
where
    T: Typeface + ?Sized,
    P: Perturbation + ?Sized,
{
    template.validate()?;
    log::debug!(
        "writing {} characters on {}x{} pages, printable area {} x {}",
        text.chars().count(),
        template.width,
        template.height,
        template.printable_width(),
        template.printable_height()
    );

    let lines = LineBreaker::new(text, template, typeface);
    let pages = paginate(lines, template, perturbation)?;
    log::debug!("laid out {} pages", pages.len());

    pages
        .iter()
        .map(|page| render_page(page, template, typeface, perturbation))
        .collect()
}

fn render_page<T, P>(
    page: &Page<'_>,
    template: &Template,
    typeface: &T,
    perturbation: &mut P,
) -> Result<RenderedPage, HandwriteError>
where
    T: Typeface + ?Sized,
    P: Perturbation + ?Sized,
{
    let mut canvas = Canvas::new(template.width, template.height, template.background)?;
    for line in &page.lines {
        for glyph in place_line(line, template, typeface, perturbation)? {
            typeface.draw(&mut canvas, &glyph)?;
        }
    }
    log::trace!("rendered page {} ({} lines)", page.index, page.lines.len());

    Ok(RenderedPage {
        index: page.index,
        image: canvas.into_image()?,
    })
}
