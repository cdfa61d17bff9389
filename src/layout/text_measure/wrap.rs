//! Line wrapping for terminal text boxes.
//!
//! Both wrap modes feed one `RowBuilder`, which hands finished rows to a
//! `RowSink`. Collecting rows and counting them therefore break lines at
//! exactly the same places.
//!
//! - [`WrapMode::Char`] breaks at any grapheme boundary.
//! - [`WrapMode::Word`] breaks at UAX #29 word boundaries and force-breaks
//!   words wider than the box.
//!
//! `\n` is always a hard break.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{grapheme_width, string_width};

/// How overlong lines are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Break at any grapheme boundary.
    Char,
    /// Break at word boundaries, force-breaking overlong words.
    #[default]
    Word,
}

/// Receives rows as the builder finishes them.
trait RowSink {
    fn push_row(&mut self, row: &str);
}

impl RowSink for Vec<String> {
    fn push_row(&mut self, row: &str) {
        self.push(row.to_string());
    }
}

/// Counts rows without keeping them.
#[derive(Default)]
struct RowCount(usize);

impl RowSink for RowCount {
    fn push_row(&mut self, _row: &str) {
        self.0 += 1;
    }
}

/// The row being filled, flushed into `sink` when the next piece overflows.
struct RowBuilder<'s, S> {
    sink: &'s mut S,
    max_width: usize,
    row: String,
    row_width: usize,
}

impl<'s, S: RowSink> RowBuilder<'s, S> {
    fn new(sink: &'s mut S, max_width: usize) -> Self {
        Self {
            sink,
            max_width,
            row: String::new(),
            row_width: 0,
        }
    }

    fn fits(&self, width: usize) -> bool {
        self.row_width + width <= self.max_width
    }

    fn push(&mut self, piece: &str, width: usize) {
        self.row.push_str(piece);
        self.row_width += width;
    }

    /// Flush the current row. Word wrapping drops the whitespace it broke on.
    fn end_row(&mut self, trim: bool) {
        let row = if trim { self.row.trim_end() } else { self.row.as_str() };
        self.sink.push_row(row);
        self.row.clear();
        self.row_width = 0;
    }

    fn push_graphemes(&mut self, segment: &str) {
        for grapheme in segment.graphemes(true) {
            let width = grapheme_width(grapheme);
            if !self.fits(width) && !self.row.is_empty() {
                self.end_row(false);
            }
            self.push(grapheme, width);
        }
    }

    fn push_words(&mut self, line: &str) {
        for segment in line.split_word_bounds() {
            let width = string_width(segment);
            if !self.fits(width) {
                if self.row_width > 0 {
                    self.end_row(true);
                }
                if width > self.max_width {
                    self.push_graphemes(segment);
                    continue;
                }
                // No row starts with the space it wrapped on.
                if segment.chars().all(char::is_whitespace) {
                    continue;
                }
            }
            self.push(segment, width);
        }
    }
}

fn wrap_into<S: RowSink>(text: &str, max_width: usize, mode: WrapMode, sink: &mut S) {
    if text.is_empty() {
        return;
    }
    if max_width == 0 {
        for raw_line in text.split('\n') {
            sink.push_row(raw_line);
        }
        return;
    }

    let mut builder = RowBuilder::new(sink, max_width);
    for raw_line in text.split('\n') {
        match mode {
            WrapMode::Char => builder.push_graphemes(raw_line),
            WrapMode::Word => builder.push_words(raw_line),
        }
        builder.end_row(false);
    }
}

/// Wrapped rows of `text` as they would be drawn. Empty input gives none.
pub fn wrap_lines(text: &str, max_width: usize, mode: WrapMode) -> Vec<String> {
    let mut lines = Vec::new();
    wrap_into(text, max_width, mode, &mut lines);
    lines
}

/// Number of rows [`wrap_lines`] would produce, without allocating them.
pub fn count_rows(text: &str, max_width: usize, mode: WrapMode) -> usize {
    let mut count = RowCount::default();
    wrap_into(text, max_width, mode, &mut count);
    count.0
}

/// Wrap text at grapheme boundaries.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    wrap_lines(text, max_width, WrapMode::Char)
}

/// Wrap text at word boundaries.
pub fn wrap_text_word(text: &str, max_width: usize) -> Vec<String> {
    wrap_lines(text, max_width, WrapMode::Word)
}

/// Rows [`wrap_text`] would produce.
pub fn measure_text_height(text: &str, max_width: usize) -> usize {
    count_rows(text, max_width, WrapMode::Char)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── wrap_text ──

    #[test]
    fn wrap_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn wrap_breaks_mid_word() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
    }

    #[test]
    fn wrap_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_cjk() {
        assert_eq!(wrap_text("你好世界", 5), vec!["你好", "世界"]);
    }

    // ── wrap_text_word ──

    #[test]
    fn word_wrap_simple() {
        assert_eq!(wrap_text_word("hello world", 8), vec!["hello", "world"]);
    }

    #[test]
    fn word_wrap_multiple_words() {
        assert_eq!(
            wrap_text_word("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn word_wrap_force_breaks_long_word() {
        assert_eq!(wrap_text_word("abcdefghij", 5), vec!["abcde", "fghij"]);
    }

    #[test]
    fn word_wrap_punctuation_stays_attached() {
        // "beta," splits into "beta" + "," segments; the comma still fits.
        assert_eq!(wrap_text_word("alpha beta, gamma", 11), vec!["alpha beta,", "gamma"]);
    }

    // ── measure_text_height ──

    #[test]
    fn height_matches_wrap_text() {
        for (text, width) in [("abcdef\nghi", 4), ("你好世界", 5), ("a\n\nb", 10), ("x", 1)] {
            assert_eq!(measure_text_height(text, width), wrap_text(text, width).len());
        }
    }

    #[test]
    fn word_rows_match_word_lines() {
        for (text, width) in [
            ("one two three four", 9),
            ("alpha beta, gamma", 11),
            ("abcdefghij klm", 5),
            ("a\n\nb c", 1),
        ] {
            assert_eq!(
                count_rows(text, width, WrapMode::Word),
                wrap_text_word(text, width).len(),
                "{text:?} at width {width}"
            );
        }
    }

    #[test]
    fn word_wrap_drops_break_whitespace() {
        assert_eq!(wrap_text_word("ab   cd", 3), vec!["ab", "cd"]);
    }

    #[test]
    fn height_empty() {
        assert_eq!(measure_text_height("", 10), 0);
    }

    #[test]
    fn height_zero_width_counts_hard_lines() {
        assert_eq!(measure_text_height("a\nb", 0), 2);
    }
}
