use crate::error::HandwriteError;
use crate::layout::Line;
use crate::perturb::Perturbation;
use crate::settings::Template;
use crate::units::Px;

/// The lines written on one sheet, in text order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'t> {
    /// Zero-based position of the page in the output
    pub index: usize,
    pub lines: Vec<Line<'t>>,
}

impl<'t> Page<'t> {
    fn new(index: usize) -> Self {
        Page {
            index,
            lines: Vec::new(),
        }
    }
}

/// Places lines on pages, top to bottom, assigning each line its baseline.
///
/// The first baseline of every page is `margin_top + line_spacing`; after each
/// line the baseline moves down by `line_spacing` plus one independent sample of
/// the line spacing perturbation. A line whose baseline would fall below
/// `height - margin_bottom` starts a new page instead.
///
/// Empty text gives exactly one page without lines. If the page cannot hold even
/// one line a [`HandwriteError::PaginationDeadlock`] is returned before any line is
/// consumed.
pub fn paginate<'t, I, P>(
    lines: I,
    template: &Template,
    perturbation: &mut P,
) -> Result<Vec<Page<'t>>, HandwriteError>
where
    I: IntoIterator<Item = Result<Line<'t>, HandwriteError>>,
    P: Perturbation + ?Sized,
{
    let content = template.content_box();
    let first_baseline = content.y1 + template.line_spacing;
    let last_baseline = content.y2;
    if first_baseline > last_baseline {
        return Err(HandwriteError::PaginationDeadlock {
            line_height: template.line_spacing,
            printable_height: content.height(),
        });
    }

    let mut pages: Vec<Page<'t>> = Vec::new();
    let mut page = Page::new(0);
    let mut baseline = first_baseline;

    for line in lines {
        let mut line = line?;

        if baseline > last_baseline {
            log::trace!("page {} holds {} lines", page.index, page.lines.len());
            let next = Page::new(page.index + 1);
            pages.push(std::mem::replace(&mut page, next));
            baseline = first_baseline;
        }

        line.baseline = baseline;
        page.lines.push(line);

        let jitter = perturbation.sample(template.perturbations.line_spacing);
        baseline += template.line_spacing + Px(jitter);
    }

    pages.push(page);
    Ok(pages)
}
