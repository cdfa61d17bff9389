//! Clamp controller - the entry point hosts call when inputs change.
//!
//! A [`Clamp`] owns one element, the oracle that measures it, and the
//! untruncated source text. Every call to [`Clamp::on_inputs_changed`]
//! restores the source text, computes a fresh height budget and runs one
//! truncation pass, so a larger clamp value brings back text that an
//! earlier, smaller one removed.
//!
//! # Example
//!
//! ```ignore
//! use spark_clamp::layout::{CellBox, CellOracle, WrapMode};
//! use spark_clamp::{Clamp, ClampOptions};
//!
//! let element = CellBox::new("", 24, WrapMode::Word);
//! let mut clamp = Clamp::new(element, CellOracle::rows(), ClampOptions::default())?;
//!
//! clamp.on_inputs_changed(2, Some("A long description. With clauses, words".into()));
//! clamp.on_inputs_changed(3, None); // re-fit the same content to three lines
//! ```

use tracing::debug;

use crate::clamp::{compute_max_height, fit_text};
use crate::config::ClampOptions;
use crate::error::ClampError;
use crate::layout::{LayoutOracle, TextElement};
use crate::types::FitReport;

/// Keeps one element clamped to a number of lines.
#[derive(Debug)]
pub struct Clamp<E, O> {
    element: E,
    oracle: O,
    options: ClampOptions,
    clamp_lines: Option<u32>,
    source: Option<String>,
}

impl<E, O> Clamp<E, O>
where
    E: TextElement,
    O: LayoutOracle<E>,
{
    /// Create a controller. Fails if `options` do not validate.
    pub fn new(element: E, oracle: O, options: ClampOptions) -> Result<Self, ClampError> {
        options.validate()?;
        Ok(Self {
            element,
            oracle,
            options,
            clamp_lines: None,
            source: None,
        })
    }

    /// Run one fitting pass for the given clamp value.
    ///
    /// `Some(content)` replaces the source text. `None` re-fits the current
    /// source; the first such call takes the element's text as the source.
    pub fn on_inputs_changed(&mut self, clamp_lines: u32, new_content: Option<String>) -> FitReport {
        self.clamp_lines = Some(clamp_lines);
        if let Some(content) = new_content {
            self.source = Some(content);
        }

        let source = self
            .source
            .get_or_insert_with(|| self.element.text().to_string());
        if self.element.text() != source.as_str() {
            self.element.set_text(source.clone());
        }

        let budget = compute_max_height(&self.oracle, &self.element, clamp_lines);
        debug!(clamp_lines, budget, "inputs changed");

        fit_text(&self.oracle, &mut self.element, budget, &self.options)
    }

    /// Re-run the last clamp value against the current source text.
    ///
    /// Before any clamp value has arrived there is nothing to fit against;
    /// the element is left alone and the report says it already fits.
    pub fn refresh(&mut self) -> FitReport {
        match self.clamp_lines {
            Some(clamp_lines) => self.on_inputs_changed(clamp_lines, None),
            None => {
                debug!("refresh before any clamp value, skipping");
                FitReport::new(0)
            }
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Mutable access, e.g. to resize the element before [`Clamp::refresh`].
    ///
    /// Text written here is not picked up as the source; pass new content
    /// through [`Clamp::on_inputs_changed`] instead.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn options(&self) -> &ClampOptions {
        &self.options
    }

    /// Clamp value used by the most recent pass, if any.
    pub fn clamp_lines(&self) -> Option<u32> {
        self.clamp_lines
    }

    /// Untruncated text, once known.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn into_parts(self) -> (E, O) {
        (self.element, self.oracle)
    }
}
