//! Truncation engine.
//!
//! One pass shortens an element's text until its rendered height fits the
//! budget:
//!
//! ```text
//! pop separator → tokenize → cut last chunk → write + marker → measure
//!      ↑                          ↑                              │
//!      └── one chunk left ────────┴──────── still too tall ──────┘
//! ```
//!
//! The cut that first fits removed one chunk too many. For every separator
//! except the grapheme-level one the engine then tries to add that chunk
//! back (see [`RestorePolicy`]) and stops.

use tracing::{debug, trace};

use super::split::{ChunkState, SplitQueue};
use crate::config::{ClampOptions, RestorePolicy};
use crate::layout::{LayoutOracle, TextElement};
use crate::types::{FitOutcome, FitReport};

/// Working state owned by a single pass.
struct PassState<'a> {
    queue: SplitQueue<'a>,
    chunks: Option<ChunkState<'a>>,
}

impl<'a> PassState<'a> {
    fn new(options: &'a ClampOptions) -> Self {
        Self {
            queue: SplitQueue::new(&options.separators),
            chunks: None,
        }
    }
}

/// Shorten `element`'s text until it renders within `budget` pixels.
///
/// Does nothing when the element already fits. Otherwise the text is cut
/// with each configured separator in turn and finished with
/// `options.ellipsis`. When every separator is exhausted the shortest
/// candidate is left in place, even if it still overflows.
pub fn fit_text<E, O>(oracle: &O, element: &mut E, budget: u32, options: &ClampOptions) -> FitReport
where
    E: TextElement + ?Sized,
    O: LayoutOracle<E> + ?Sized,
{
    let mut report = FitReport::new(budget);

    let height = measure(oracle, element, &mut report);
    if height <= budget {
        trace!(height, budget, "text already fits");
        return report;
    }

    debug!(height, budget, "clamping text");
    let mut pass = PassState::new(options);
    let outcome = run_pass(oracle, element, budget, options, &mut pass, &mut report);
    report.outcome = outcome;
    debug!(
        outcome = ?report.outcome,
        separator = ?report.separator,
        measurements = report.measurements,
        cuts = report.cuts,
        "clamp pass finished"
    );

    report
}

fn run_pass<'a, E, O>(
    oracle: &O,
    element: &mut E,
    budget: u32,
    options: &'a ClampOptions,
    pass: &mut PassState<'a>,
    report: &mut FitReport,
) -> FitOutcome
where
    E: TextElement + ?Sized,
    O: LayoutOracle<E> + ?Sized,
{
    let marker = options.ellipsis.as_str();

    loop {
        let mut chunks = match pass.chunks.take() {
            Some(chunks) => chunks,
            None => {
                let Some(separator) = pass.queue.pop_front() else {
                    return FitOutcome::Exhausted;
                };
                let clean = strip_marker(element.text(), marker).to_string();
                let chunks = ChunkState::tokenize(clean, separator);
                trace!(
                    ?separator,
                    chunks = chunks.len(),
                    remaining = pass.queue.len(),
                    "split strategy advanced"
                );
                chunks
            }
        };
        if !chunks.cut() {
            trace!(separator = ?chunks.separator(), "separator exhausted");
            continue;
        }
        let chunks = pass.chunks.insert(chunks);
        write_with_marker(element, chunks.joined(), marker, report);

        let height = measure(oracle, element, report);
        trace!(
            separator = ?chunks.separator(),
            chunks = chunks.len(),
            removed = ?chunks.last_chunk(),
            height,
            "cut"
        );
        if height > budget {
            continue;
        }

        let separator = chunks.separator();
        report.separator = Some(separator.to_string());
        if !separator.is_empty() {
            restore_last_chunk(oracle, element, budget, options, chunks, report);
        }
        return FitOutcome::Converged;
    }
}

/// Add back the chunk removed by the fitting cut, per the restore policy.
fn restore_last_chunk<E, O>(
    oracle: &O,
    element: &mut E,
    budget: u32,
    options: &ClampOptions,
    chunks: &ChunkState<'_>,
    report: &mut FitReport,
) where
    E: TextElement + ?Sized,
    O: LayoutOracle<E> + ?Sized,
{
    let Some(restored) = chunks.restored() else {
        return;
    };
    let marker = options.ellipsis.as_str();
    write_with_marker(element, restored, marker, report);

    if options.restore == RestorePolicy::Unconditional {
        return;
    }

    let height = measure(oracle, element, report);
    if height > budget {
        trace!(height, budget, "restored chunk overflows, keeping cut");
        write_with_marker(element, chunks.joined(), marker, report);
    }
}

fn strip_marker<'t>(text: &'t str, marker: &str) -> &'t str {
    text.strip_suffix(marker).unwrap_or(text)
}

fn write_with_marker<E>(element: &mut E, text: &str, marker: &str, report: &mut FitReport)
where
    E: TextElement + ?Sized,
{
    let mut value = String::with_capacity(text.len() + marker.len());
    value.push_str(text);
    value.push_str(marker);
    element.set_text(value);
    report.cuts += 1;
}

fn measure<E, O>(oracle: &O, element: &E, report: &mut FitReport) -> u32
where
    E: ?Sized,
    O: LayoutOracle<E> + ?Sized,
{
    report.measurements += 1;
    oracle.rendered_height(element)
}
