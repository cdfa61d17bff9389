//! Unicode-aware text measurement for terminal cells.
//!
//! Widths come from `unicode-width` (East Asian Width tables) and grapheme
//! boundaries from `unicode-segmentation` (UAX #29), so measurement and
//! wrapping never split a user-perceived character.

mod width;
mod wrap;

pub use width::{char_width, grapheme_width, string_width};
pub use wrap::{count_rows, measure_text_height, wrap_lines, wrap_text, wrap_text_word, WrapMode};
