//! Integration tests for metric extraction.

use hackney_foundation::PlanStatus;
use hackney_plan::{Metrics, extract_metrics, parse_plan};

#[test]
fn metrics_and_parser_agree_on_status() {
    for text in [
        "State 0:\nState 1: move(1,r)\n",
        "UNSATISFIABLE\n",
        "Solving...\n",
    ] {
        assert_eq!(extract_metrics(text).status, parse_plan(text).status);
    }
}

#[test]
fn plan_length_tracks_the_maximum_marker() {
    let text = "State 0:\nState 1: wait(1)\nState 2: wait(1)\n";
    assert_eq!(extract_metrics(text).plan_length, 2);
}

#[test]
fn action_count_is_a_global_occurrence_count() {
    // Counted across the whole text, marker lines included, batches
    // irrelevant.
    let text = "State 0:\nState 1: move(1,r) pick(2)\nState 2: move(1,l) drop(2) wait(3)\n";
    let metrics = extract_metrics(text);
    assert_eq!(metrics.plan_length, 2);
    assert_eq!(metrics.action_count, 5);
    assert_eq!(metrics.status, PlanStatus::Ok);
}

#[test]
fn fluent_predicates_do_not_count_as_actions() {
    let text = "State 1: at(1,2,2) passenger_at(a,1,1) move(1,r)\n";
    assert_eq!(extract_metrics(text).action_count, 1);
}

#[test]
fn unsat_beats_markers_and_zeroes_metrics() {
    let text = "State 0:\nState 5: move(1,r)\nUNSATISFIABLE\n";
    let metrics = extract_metrics(text);
    assert_eq!(metrics.status, PlanStatus::Unsat);
    assert_eq!(metrics.plan_length, 0);
    assert_eq!(metrics.action_count, 0);
}

#[test]
fn missing_metrics_are_all_zero() {
    assert_eq!(
        Metrics::missing(),
        Metrics {
            plan_length: 0,
            action_count: 0,
            status: PlanStatus::Missing
        }
    );
}
