//! Line clamping core.
//!
//! - [`compute_max_height`] turns a clamp value into a pixel budget.
//! - [`fit_text`] cuts the element's text, coarse separators first, until
//!   the measured height fits the budget.
//!
//! Both read layout only through a [`LayoutOracle`](crate::layout::LayoutOracle).

mod budget;
mod engine;
mod split;

pub use budget::{compute_max_height, resolve_line_height};
pub use engine::fit_text;
