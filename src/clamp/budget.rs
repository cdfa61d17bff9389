//! Height budget calculation.

use crate::layout::LayoutOracle;

/// Resolved line height of `element` in pixels.
///
/// A `normal` line height is derived as `font_size * 1.2`.
pub fn resolve_line_height<E, O>(oracle: &O, element: &E) -> f32
where
    E: ?Sized,
    O: LayoutOracle<E> + ?Sized,
{
    oracle
        .computed_line_height(element)
        .resolve(oracle.computed_font_size(element))
}

/// Maximum height `element` may render at to show `clamp_lines` lines.
///
/// Returns `line_height * clamp_lines` truncated to whole pixels. Never
/// fails; unusable line heights give a budget of zero.
pub fn compute_max_height<E, O>(oracle: &O, element: &E, clamp_lines: u32) -> u32
where
    E: ?Sized,
    O: LayoutOracle<E> + ?Sized,
{
    let line_height = resolve_line_height(oracle, element);
    let max = f64::from(line_height) * f64::from(clamp_lines);
    if max >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        max as u32
    }
}
