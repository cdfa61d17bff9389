//! Terminal text box and its cell-grid oracle.

use super::text_measure::{count_rows, wrap_lines, WrapMode};
use super::{LayoutOracle, TextElement};
use crate::types::LineHeight;

/// A fixed-width box of terminal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBox {
    text: String,
    width: usize,
    wrap: WrapMode,
}

impl CellBox {
    pub fn new(text: impl Into<String>, width: usize, wrap: WrapMode) -> Self {
        Self {
            text: text.into(),
            width,
            wrap,
        }
    }

    /// Box width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    /// Rows the current text occupies.
    pub fn rows(&self) -> usize {
        count_rows(&self.text, self.width, self.wrap)
    }

    /// The wrapped lines as they would be drawn.
    pub fn lines(&self) -> Vec<String> {
        wrap_lines(&self.text, self.width, self.wrap)
    }
}

impl TextElement for CellBox {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// Oracle for [`CellBox`]es sharing one text style.
///
/// Rendered height is rows times the resolved line height, truncated to
/// whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellOracle {
    line_height: LineHeight,
    font_size: f32,
}

impl CellOracle {
    pub fn new(line_height: LineHeight, font_size: f32) -> Self {
        Self {
            line_height,
            font_size,
        }
    }

    /// One pixel per row, useful when heights are counted in rows.
    pub fn rows() -> Self {
        Self::new(LineHeight::Px(1.0), 1.0)
    }
}

impl Default for CellOracle {
    fn default() -> Self {
        Self::rows()
    }
}

impl LayoutOracle<CellBox> for CellOracle {
    fn computed_line_height(&self, _element: &CellBox) -> LineHeight {
        self.line_height
    }

    fn computed_font_size(&self, _element: &CellBox) -> f32 {
        self.font_size
    }

    fn rendered_height(&self, element: &CellBox) -> u32 {
        let line_height = self.line_height.resolve(self.font_size);
        (element.rows() as f32 * line_height) as u32
    }
}
