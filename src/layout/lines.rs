use crate::error::HandwriteError;
use crate::font::Typeface;
use crate::settings::Template;
use crate::units::Px;
use std::collections::HashMap;

/// A run of the input text that is written on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'t> {
    /// The characters of the line, borrowed from the input text
    pub text: &'t str,
    /// Character (not byte) index of the first character within the input text
    pub start: usize,
    /// Distance from the top of the page to the baseline. Zero until the line has
    /// been placed on a page by [`paginate`](crate::layout::paginate).
    pub baseline: Px,
}

/// Splits text into lines that fit the printable width of a [`Template`].
///
/// Lines are produced lazily, in text order, and the breaker cannot be rewound.
///
/// # Breaking rules
///
/// * Characters are added greedily while `x + advance <= printable width`, where
///   `x` is the sum of the preceding advances plus `word_spacing` after each.
///   Widths are measured at the unperturbed font size so the result is
///   deterministic.
/// * `\n`, `\r` and `\r\n` force a break and are consumed. Consecutive breaks give
///   empty lines; a break at the very end of the text does not.
/// * When a line wraps and the next character is in `forbidden_leading`, it is
///   pulled back onto the current line even though it overflows. A run of such
///   characters is pulled back as a whole.
/// * Otherwise, while the last character of a wrapped line is in
///   `forbidden_trailing` (and not in `forbidden_leading`), it is pushed to the
///   next line. A line made only of such characters keeps its wrap point.
/// * A character wider than the printable width is an
///   [`HandwriteError::UnbreakableLine`], whether it starts a line or is being
///   pulled back onto one.
pub struct LineBreaker<'t, 'a, T: Typeface + ?Sized> {
    text: &'t str,
    /// (byte offset, character) for every character of `text`
    chars: Vec<(usize, char)>,
    cursor: usize,
    line: usize,
    failed: bool,
    template: &'a Template,
    typeface: &'a T,
    advances: HashMap<char, Px>,
}

impl<'t, 'a, T: Typeface + ?Sized> LineBreaker<'t, 'a, T> {
    pub fn new(text: &'t str, template: &'a Template, typeface: &'a T) -> Self {
        LineBreaker {
            text,
            chars: text.char_indices().collect(),
            cursor: 0,
            line: 0,
            failed: false,
            template,
            typeface,
            advances: HashMap::new(),
        }
    }

    fn advance(&mut self, ch: char) -> Result<Px, HandwriteError> {
        if let Some(&advance) = self.advances.get(&ch) {
            return Ok(advance);
        }
        let advance = self.typeface.advance(ch, self.template.font_size)?;
        self.advances.insert(ch, advance);
        Ok(advance)
    }

    fn is_leading(&self, index: usize) -> bool {
        self.template.forbidden_leading.contains(&self.chars[index].1)
    }

    fn is_trailing(&self, index: usize) -> bool {
        self.template.forbidden_trailing.contains(&self.chars[index].1)
    }

    fn is_break(&self, index: usize) -> bool {
        matches!(self.chars[index].1, '\n' | '\r')
    }

    /// Index just past the forced break starting at `index`
    fn skip_break(&self, index: usize) -> usize {
        match self.chars.get(index..index + 2) {
            Some([(_, '\r'), (_, '\n')]) => index + 2,
            _ => index + 1,
        }
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map(|&(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    fn make_line(&mut self, start: usize, end: usize) -> Line<'t> {
        let text: &'t str = self.text;
        let line = Line {
            text: &text[self.byte_offset(start)..self.byte_offset(end)],
            start,
            baseline: Px::ZERO,
        };
        log::trace!("line {}: {:?}", self.line, line.text);
        self.line += 1;
        line
    }

    /// Move the wrap point of an overflowing line `start..end` according to the
    /// forbidden leading and trailing characters
    fn adjust_wrap(&mut self, start: usize, end: usize) -> Result<usize, HandwriteError> {
        let n = self.chars.len();
        let width = self.template.printable_width();
        let mut split = end;

        while split < n && !self.is_break(split) && self.is_leading(split) {
            let ch = self.chars[split].1;
            let advance = self.advance(ch)?;
            if advance > width {
                return Err(HandwriteError::UnbreakableLine {
                    ch,
                    line: self.line,
                    position: split,
                    advance,
                    printable_width: width,
                });
            }
            split += 1;
        }

        if split == end {
            let mut pushed = split;
            while pushed > start && self.is_trailing(pushed - 1) && !self.is_leading(pushed - 1) {
                pushed -= 1;
            }
            // a line made only of forbidden trailing characters keeps its wrap point
            if pushed > start {
                split = pushed;
            }
        }

        Ok(split)
    }

    fn next_line(&mut self) -> Result<Option<Line<'t>>, HandwriteError> {
        let n = self.chars.len();
        if self.cursor >= n {
            return Ok(None);
        }

        let width = self.template.printable_width();
        let start = self.cursor;
        let mut end = start;
        let mut x = Px::ZERO;

        while end < n {
            if self.is_break(end) {
                let line = self.make_line(start, end);
                self.cursor = self.skip_break(end);
                return Ok(Some(line));
            }

            let ch = self.chars[end].1;
            let advance = self.advance(ch)?;
            if x + advance > width {
                if end == start {
                    return Err(HandwriteError::UnbreakableLine {
                        ch,
                        line: self.line,
                        position: end,
                        advance,
                        printable_width: width,
                    });
                }
                break;
            }
            x += advance + self.template.word_spacing;
            end += 1;
        }

        if end == n {
            self.cursor = n;
            return Ok(Some(self.make_line(start, end)));
        }

        let split = self.adjust_wrap(start, end)?;
        let line = self.make_line(start, split);
        // a wrap that lands on a forced break swallows it
        self.cursor = if split < n && self.is_break(split) {
            self.skip_break(split)
        } else {
            split
        };
        Ok(Some(line))
    }
}

impl<'t, T: Typeface + ?Sized> Iterator for LineBreaker<'t, '_, T> {
    type Item = Result<Line<'t>, HandwriteError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let next = self.next_line();
        if next.is_err() {
            self.failed = true;
        }
        next.transpose()
    }
}
