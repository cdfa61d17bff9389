//! Clamp configuration.
//!
//! Options are a plain struct with sensible defaults, configured with
//! struct-update syntax or the `with_*` helpers:
//!
//! ```ignore
//! use spark_clamp::{ClampOptions, RestorePolicy};
//!
//! let options = ClampOptions {
//!     ellipsis: "…".to_string(),
//!     ..Default::default()
//! }
//! .with_restore(RestorePolicy::Unconditional);
//! ```

use std::collections::HashSet;

use crate::error::ClampError;
use crate::types::{DEFAULT_ELLIPSIS, DEFAULT_SEPARATORS};

// =============================================================================
// Restore Policy
// =============================================================================

/// What to do with the chunk removed by the cut that made the text fit.
///
/// The engine always removes one chunk too many and then tries to add it
/// back. Restoring it without measuring reproduces the candidate that was
/// just measured as too tall, so the result may overflow by one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestorePolicy {
    /// Measure the restored text and keep it only if it still fits.
    #[default]
    Verify,
    /// Keep the restored text without measuring it.
    Unconditional,
}

// =============================================================================
// Options
// =============================================================================

/// Options for one clamp target.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampOptions {
    /// Marker appended to truncated text.
    pub ellipsis: String,
    /// Split separators, coarsest first. `""` splits between graphemes.
    pub separators: Vec<String>,
    /// Back-off behaviour after the fitting cut.
    pub restore: RestorePolicy,
}

impl Default for ClampOptions {
    fn default() -> Self {
        Self {
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            restore: RestorePolicy::default(),
        }
    }
}

impl ClampOptions {
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    pub fn with_separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_restore(mut self, restore: RestorePolicy) -> Self {
        self.restore = restore;
        self
    }

    /// Check that the options describe a usable split order and marker.
    pub fn validate(&self) -> Result<(), ClampError> {
        if self.ellipsis.is_empty() {
            return Err(ClampError::EmptyEllipsis);
        }
        if self.separators.is_empty() {
            return Err(ClampError::NoSeparators);
        }

        let mut seen = HashSet::with_capacity(self.separators.len());
        for separator in &self.separators {
            if !seen.insert(separator.as_str()) {
                return Err(ClampError::DuplicateSeparator(separator.clone()));
            }
        }

        Ok(())
    }
}
