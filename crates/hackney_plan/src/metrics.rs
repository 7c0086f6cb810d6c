//! Plan metrics: length and cost, scanned straight off solver output.
//!
//! Deliberately independent of the full parser: comparison reporting needs
//! only two scalars and a status, and must not choke on plans the parser
//! would quibble with.

use hackney_foundation::PlanStatus;

use crate::parser::{UNSAT_MARKER, parse_state_marker};

/// The action predicates counted toward plan cost.
const ACTION_VERBS: [&str; 4] = ["move(", "pick(", "drop(", "wait("];

/// Scalar metrics of one plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    /// Maximum state index seen (0 when none).
    pub plan_length: u32,
    /// Global occurrence count of the four action predicates, used as a
    /// raw cost proxy; not scoped per batch.
    pub action_count: usize,
    /// The plan's status.
    pub status: PlanStatus,
}

impl Metrics {
    /// Metrics for a plan file that does not exist. File probing is the
    /// caller's business; text extraction never produces this.
    #[must_use]
    pub const fn missing() -> Self {
        Self {
            plan_length: 0,
            action_count: 0,
            status: PlanStatus::Missing,
        }
    }

    const fn without_plan(status: PlanStatus) -> Self {
        Self {
            plan_length: 0,
            action_count: 0,
            status,
        }
    }
}

/// Extracts `(plan_length, action_count, status)` from raw solver output.
///
/// `UNSATISFIABLE` anywhere takes precedence and zeroes both metrics; text
/// with no `State <n>:` markers reports [`PlanStatus::NoPlan`] with zeros.
#[must_use]
pub fn extract_metrics(text: &str) -> Metrics {
    if text.contains(UNSAT_MARKER) {
        return Metrics::without_plan(PlanStatus::Unsat);
    }

    let mut max_index: Option<u32> = None;
    for line in text.lines() {
        if let Some((index, _)) = parse_state_marker(line) {
            max_index = Some(max_index.map_or(index, |max| max.max(index)));
        }
    }
    let Some(plan_length) = max_index else {
        return Metrics::without_plan(PlanStatus::NoPlan);
    };

    let action_count = ACTION_VERBS
        .iter()
        .map(|verb| text.matches(verb).count())
        .sum();

    Metrics {
        plan_length,
        action_count,
        status: PlanStatus::Ok,
    }
}
