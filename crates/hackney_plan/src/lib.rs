//! Plan parsing and metrics for Hackney.
//!
//! This crate provides:
//! - [`Action`] and [`ActionBatch`] - decoded plan vocabulary
//! - [`parse_plan`] - solver output to time-indexed action batches
//! - [`extract_metrics`] - plan length and cost straight off the text
//! - [`render_report`] - the reference-vs-generated comparison table

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod action;
mod metrics;
mod parser;
mod report;

pub use action::{Action, ActionBatch, parse_action};
pub use metrics::{Metrics, extract_metrics};
pub use parser::{Diagnostic, ParseOutcome, UNSAT_MARKER, parse_plan};
pub use report::{InstanceComparison, render_report};
