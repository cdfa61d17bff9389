//! Core types for spark-clamp.
//!
//! These are the values that flow between the layout oracle, the height
//! budget calculator and the truncation engine.

use std::fmt;
use std::str::FromStr;

use crate::error::ClampError;

// =============================================================================
// Constants
// =============================================================================

/// Marker appended to truncated text unless configured otherwise.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Split separators, coarsest first. The empty separator cuts between
/// grapheme clusters.
pub const DEFAULT_SEPARATORS: [&str; 4] = [".", ",", " ", ""];

/// Ratio applied to the font size when the computed line height is `normal`.
pub const NORMAL_LINE_HEIGHT_RATIO: f32 = 1.2;

// =============================================================================
// Line Height
// =============================================================================

/// Computed line height of an element.
///
/// Mirrors the two shapes a computed style can report: the generic
/// `normal` keyword, or an explicit length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineHeight {
    /// No explicit line height; derived from the font size.
    #[default]
    Normal,
    /// Explicit line height in pixels.
    Px(f32),
}

impl LineHeight {
    /// Resolve to pixels, falling back to `font_size * 1.2` for `Normal`.
    ///
    /// Negative or non-finite values resolve to `0.0`.
    pub fn resolve(self, font_size: f32) -> f32 {
        let px = match self {
            LineHeight::Normal => font_size * NORMAL_LINE_HEIGHT_RATIO,
            LineHeight::Px(px) => px,
        };
        if px.is_finite() && px > 0.0 { px } else { 0.0 }
    }
}

impl FromStr for LineHeight {
    type Err = ClampError;

    /// Parse a computed-style value: `normal`, `24px` or `24`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("normal") {
            return Ok(LineHeight::Normal);
        }

        let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
        number
            .parse::<f32>()
            .ok()
            .filter(|px| px.is_finite())
            .map(LineHeight::Px)
            .ok_or_else(|| ClampError::InvalidLineHeight(s.to_string()))
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeight::Normal => f.write_str("normal"),
            LineHeight::Px(px) => write!(f, "{px}px"),
        }
    }
}

// =============================================================================
// Fit Report
// =============================================================================

/// How a truncation pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitOutcome {
    /// The element already fit the budget; nothing was written.
    AlreadyFits,
    /// A cut satisfied the budget.
    Converged,
    /// Every separator was exhausted; the remaining text may still overflow.
    Exhausted,
}

/// Summary of one truncation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitReport {
    pub outcome: FitOutcome,
    /// Height budget the pass ran against, in pixels.
    pub budget: u32,
    /// Separator active when the pass converged.
    pub separator: Option<String>,
    /// Number of rendered-height reads, including the entry guard.
    pub measurements: usize,
    /// Number of candidate strings written to the element.
    pub cuts: usize,
}

impl FitReport {
    pub(crate) fn new(budget: u32) -> Self {
        Self {
            outcome: FitOutcome::AlreadyFits,
            budget,
            separator: None,
            measurements: 0,
            cuts: 0,
        }
    }

    /// True when the pass modified the element's text.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.cuts > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── LineHeight::from_str ──

    #[test]
    fn parse_normal() {
        assert_eq!("normal".parse::<LineHeight>().unwrap(), LineHeight::Normal);
        assert_eq!(" Normal ".parse::<LineHeight>().unwrap(), LineHeight::Normal);
    }

    #[test]
    fn parse_pixels() {
        assert_eq!("24px".parse::<LineHeight>().unwrap(), LineHeight::Px(24.0));
        assert_eq!("18.5px".parse::<LineHeight>().unwrap(), LineHeight::Px(18.5));
        assert_eq!("20".parse::<LineHeight>().unwrap(), LineHeight::Px(20.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "1.5em".parse::<LineHeight>().unwrap_err();
        assert_eq!(err, ClampError::InvalidLineHeight("1.5em".to_string()));
        assert!("".parse::<LineHeight>().is_err());
        assert!("px".parse::<LineHeight>().is_err());
        assert!("NaNpx".parse::<LineHeight>().is_err());
    }

    // ── LineHeight::resolve ──

    #[test]
    fn resolve_normal_uses_font_size() {
        assert!((LineHeight::Normal.resolve(10.0) - 12.0).abs() < 1e-4);
    }

    #[test]
    fn resolve_explicit_ignores_font_size() {
        assert_eq!(LineHeight::Px(22.0).resolve(10.0), 22.0);
    }

    #[test]
    fn resolve_clamps_invalid_to_zero() {
        assert_eq!(LineHeight::Px(-4.0).resolve(10.0), 0.0);
        assert_eq!(LineHeight::Px(f32::INFINITY).resolve(10.0), 0.0);
        assert_eq!(LineHeight::Normal.resolve(f32::NAN), 0.0);
    }

    #[test]
    fn display_uses_computed_style_form() {
        assert_eq!(LineHeight::Px(16.0).to_string(), "16px");
        assert_eq!(LineHeight::Normal.to_string(), "normal");
    }
}
