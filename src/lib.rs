//! # spark-clamp
//!
//! Line clamping for Spark TUI text: shorten a block of text until it fits a
//! number of lines, finishing it with an ellipsis.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! reactive re-clamping.
//!
//! ## Architecture
//!
//! Clamping is a measure-driven loop. The engine never simulates text
//! layout; after every cut it asks a [`LayoutOracle`] how tall the element
//! now renders:
//!
//! ```text
//! clamp value ─→ compute_max_height ─→ budget
//!                                        │
//! element ─→ fit_text ─→ cut ─→ measure ─┴─→ fits? ─→ back off one chunk
//!              ↑                              │
//!              └──────── too tall ────────────┘
//! ```
//!
//! Cuts go from coarse to fine: sentences (`.`), clauses (`,`), words
//! (` `), then grapheme clusters.
//!
//! ## Modules
//!
//! - [`types`] - Line heights, fit reports, defaults
//! - [`config`] - [`ClampOptions`] and [`RestorePolicy`]
//! - [`layout`] - Element and oracle traits, terminal cell boxes
//! - [`clamp`] - Height budget and truncation engine
//! - [`controller`] - [`Clamp`], the `on_inputs_changed` entry point
//! - [`reactive`] - Signal bindings

pub mod clamp;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod reactive;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use clamp::{compute_max_height, fit_text, resolve_line_height};
pub use config::{ClampOptions, RestorePolicy};
pub use controller::Clamp;
pub use error::ClampError;
pub use layout::{CellBox, CellOracle, LayoutOracle, TextElement, WrapMode};
pub use reactive::{bind, ClampBinding};
