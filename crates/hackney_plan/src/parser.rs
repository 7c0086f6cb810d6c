//! The plan parser: raw solver output to ordered action batches.
//!
//! Solver output is line-oriented: a preamble (version banner, `Answer:`
//! lines), then `State <n>:` markers each followed by whitespace-separated
//! predicate tokens until the next marker. Parsing is best-effort over
//! malformed fragments: a bad token is skipped with a diagnostic, never
//! fatal.

use hackney_foundation::{ErrorKind, PlanStatus};
use tracing::{debug, warn};

use crate::action::{ActionBatch, parse_action};

/// The literal the solver prints for an unsatisfiable instance. Its presence
/// anywhere in the text takes precedence over any state markers.
pub const UNSAT_MARKER: &str = "UNSATISFIABLE";

/// A recoverable oddity noticed while parsing; replay continues regardless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A token could not be decoded and was skipped.
    MalformedToken {
        /// Time index of the batch the token belonged to.
        time_index: u32,
        /// The offending token text.
        token: String,
        /// Why it could not be decoded.
        reason: String,
    },
    /// A state marker's index was not strictly greater than its
    /// predecessor's. Encounter order is preserved; correct behavior for
    /// such plans is undefined, so the oddity is recorded rather than
    /// silently accepted.
    NonMonotonicState {
        /// The previous marker's index.
        previous: u32,
        /// The offending marker's index.
        found: u32,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedToken {
                time_index,
                token,
                reason,
            } => {
                write!(f, "state {time_index}: skipped token `{token}`: {reason}")
            }
            Self::NonMonotonicState { previous, found } => {
                write!(f, "state marker {found} follows {previous}")
            }
        }
    }
}

/// Everything the parser learned from one piece of solver output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Whether the text held a plan at all.
    pub status: PlanStatus,
    /// Action batches in encounter order.
    pub batches: Vec<ActionBatch>,
    /// Recoverable oddities noticed along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    fn without_plan(status: PlanStatus) -> Self {
        Self {
            status,
            batches: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

/// Parses solver output into time-indexed action batches.
///
/// An `UNSATISFIABLE` marker anywhere yields [`PlanStatus::Unsat`] with no
/// batches; text with no state markers yields [`PlanStatus::NoPlan`]. Lines
/// before the first marker are preamble and contribute nothing. Empty
/// batches are kept; a time step with no actions is still a time step.
#[must_use]
pub fn parse_plan(text: &str) -> ParseOutcome {
    if text.contains(UNSAT_MARKER) {
        return ParseOutcome::without_plan(PlanStatus::Unsat);
    }

    let mut batches: Vec<ActionBatch> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut current: Option<ActionBatch> = None;
    let mut last_index: Option<u32> = None;

    for line in text.lines() {
        if let Some((time_index, trailing)) = parse_state_marker(line) {
            if let Some(batch) = current.take() {
                batches.push(batch);
            }
            if let Some(previous) = last_index {
                if time_index <= previous {
                    warn!(previous, found = time_index, "non-monotonic state marker");
                    diagnostics.push(Diagnostic::NonMonotonicState {
                        previous,
                        found: time_index,
                    });
                }
            }
            last_index = Some(time_index);
            let mut batch = ActionBatch::new(time_index);
            consume_tokens(trailing, &mut batch, &mut diagnostics);
            current = Some(batch);
        } else if let Some(batch) = current.as_mut() {
            consume_tokens(line, batch, &mut diagnostics);
        } else {
            debug!(line, "skipping preamble line");
        }
    }
    if let Some(batch) = current.take() {
        batches.push(batch);
    }

    if batches.is_empty() {
        return ParseOutcome {
            status: PlanStatus::NoPlan,
            batches,
            diagnostics,
        };
    }
    ParseOutcome {
        status: PlanStatus::Ok,
        batches,
        diagnostics,
    }
}

/// Recognizes a `State <int>:` marker, returning the index and whatever
/// trails the colon on the same line.
#[must_use]
pub(crate) fn parse_state_marker(line: &str) -> Option<(u32, &str)> {
    let after = line.trim_start().strip_prefix("State")?;
    if !after.starts_with(char::is_whitespace) {
        return None;
    }
    let after = after.trim_start();
    let colon = after.find(':')?;
    let index = after[..colon].trim_end().parse::<u32>().ok()?;
    Some((index, &after[colon + 1..]))
}

/// Feeds one line's tokens into the open batch, skipping what cannot be
/// decoded.
///
/// Tokens without a parameter list are solver chatter (`SATISFIABLE`,
/// timing lines trailing the last state) and are dropped without comment;
/// only predicate-shaped tokens that fail to decode earn a diagnostic.
fn consume_tokens(line: &str, batch: &mut ActionBatch, diagnostics: &mut Vec<Diagnostic>) {
    for token in line.split_whitespace() {
        if !token.contains('(') {
            debug!(token, "skipping non-predicate token");
            continue;
        }
        match parse_action(token) {
            Ok(Some(action)) => batch.actions.push(action),
            Ok(None) => {}
            Err(error) => {
                let reason = match error.kind {
                    ErrorKind::MalformedActionToken { reason, .. } => reason,
                    other => other.to_string(),
                };
                warn!(
                    time_index = batch.time_index,
                    token,
                    %reason,
                    "skipping malformed token"
                );
                diagnostics.push(Diagnostic::MalformedToken {
                    time_index: batch.time_index,
                    token: token.to_string(),
                    reason,
                });
            }
        }
    }
}
