//! Cell width of characters, grapheme clusters and strings.
//!
//! Widths follow Unicode East Asian Width, with emoji sequences counted as
//! a single wide cluster the way terminals draw them.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Cell width of one codepoint: 0 for control and combining marks, 2 for
/// wide characters and pictographic emoji, 1 otherwise.
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // Dingbats and misc symbols (✨ ⚡)
        0x2600..=0x27BF => 2,
        // Pictographs, emoticons, transport
        0x1F300..=0x1F64F | 0x1F680..=0x1F6FF => 2,
        // Supplemental pictographs and extended-A
        0x1F900..=0x1F9FF | 0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Cell width of a grapheme cluster.
///
/// ZWJ sequences, VS16 presentation, skin tones, keycaps and flag pairs are
/// wide. A base character followed by combining marks takes the width of
/// the base.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // Regional indicator pair
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    let emoji_sequence = chars.any(|c| {
        matches!(c as u32, 0x200D | 0xFE0F | 0x20E3 | 0x1F3FB..=0x1F3FF)
    });
    if emoji_sequence {
        return 2;
    }

    first.width().unwrap_or(0)
}

/// Cell width of a string.
pub fn string_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }
    s.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── char_width ──

    #[test]
    fn char_width_ascii_and_control() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width('\t'), 0);
        assert_eq!(char_width('\x7F'), 0);
    }

    #[test]
    fn char_width_wide() {
        assert_eq!(char_width('你'), 2);
        assert_eq!(char_width('한'), 2);
        assert_eq!(char_width('Ａ'), 2);
        assert_eq!(char_width('🚀'), 2);
    }

    #[test]
    fn char_width_combining() {
        assert_eq!(char_width('\u{0301}'), 0);
    }

    // ── grapheme_width ──

    #[test]
    fn grapheme_combining_takes_base_width() {
        assert_eq!(grapheme_width("e\u{0301}"), 1);
    }

    #[test]
    fn grapheme_emoji_sequences() {
        assert_eq!(grapheme_width("👨\u{200D}👩\u{200D}👧"), 2);
        assert_eq!(grapheme_width("👍\u{1F3FD}"), 2);
        assert_eq!(grapheme_width("🇺🇸"), 2);
        assert_eq!(grapheme_width("1\u{FE0F}\u{20E3}"), 2);
    }

    #[test]
    fn grapheme_empty() {
        assert_eq!(grapheme_width(""), 0);
    }

    // ── string_width ──

    #[test]
    fn string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width("a\tb"), 2);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn string_width_mixed() {
        assert_eq!(string_width("hi你好😀"), 2 + 4 + 2);
        assert_eq!(string_width("cafe\u{0301}"), 4);
    }
}
