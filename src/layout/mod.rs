//! Layout seams for clamping.
//!
//! The truncation engine never measures text itself. It mutates a
//! [`TextElement`] and asks a [`LayoutOracle`] how tall the element renders
//! afterwards. Any layout engine can sit behind the oracle; [`CellOracle`]
//! measures terminal text boxes with the cell-width rules in
//! [`text_measure`].
//!
//! # Example
//!
//! ```ignore
//! use spark_clamp::layout::{CellBox, CellOracle, WrapMode};
//! use spark_clamp::{compute_max_height, fit_text, ClampOptions, LineHeight};
//!
//! let mut element = CellBox::new("One. Two, three four", 10, WrapMode::Word);
//! let oracle = CellOracle::new(LineHeight::Px(16.0), 14.0);
//!
//! let budget = compute_max_height(&oracle, &element, 1);
//! fit_text(&oracle, &mut element, budget, &ClampOptions::default());
//! ```

mod cell_box;
pub mod text_measure;

pub use cell_box::{CellBox, CellOracle};
pub use text_measure::WrapMode;

use crate::types::LineHeight;

/// An element exposing one truncatable text value.
pub trait TextElement {
    /// Current text content.
    fn text(&self) -> &str;

    /// Replace the text content. Layout must reflect it immediately.
    fn set_text(&mut self, text: String);
}

/// Computed style and live box measurement for elements of type `E`.
///
/// Every read must reflect the element's current text; the engine assumes
/// no asynchronous reflow between a write and the next measurement.
pub trait LayoutOracle<E: ?Sized> {
    /// Computed line height, `Normal` when the style does not set one.
    fn computed_line_height(&self, element: &E) -> LineHeight;

    /// Computed font size in pixels.
    fn computed_font_size(&self, element: &E) -> f32;

    /// Current rendered height of the element in pixels.
    fn rendered_height(&self, element: &E) -> u32;
}
