//! Integration tests for the comparison report.

use hackney_foundation::PlanStatus;
use hackney_plan::{InstanceComparison, Metrics, extract_metrics, render_report};

fn comparison(instance: &str, reference: &str, generated: &str) -> InstanceComparison {
    InstanceComparison::new(
        instance,
        extract_metrics(reference),
        extract_metrics(generated),
    )
}

#[test]
fn report_built_from_real_plan_text() {
    let reference = "State 0:\nState 1: move(1,r)\nState 2: pick(1)\n";
    let shorter = "State 0:\nState 1: move(1,r) pick(1)\n";
    let report = render_report(&[comparison("dom01", reference, shorter)]);

    assert!(report.contains("dom01"));
    assert!(report.contains("Length"));
    assert!(report.contains("Actions"));
    assert!(report.contains("(-1)"));
    assert!(report.contains("(MATCH)"));
}

#[test]
fn unsat_generated_plan_shows_its_status() {
    let reference = "State 0:\nState 1: move(1,r)\n";
    let report = render_report(&[comparison("dom07", reference, "UNSATISFIABLE\n")]);
    assert!(report.contains("(UNSAT)"));
}

#[test]
fn missing_generated_plan_shows_its_status() {
    let reference = "State 0:\nState 1: move(1,r)\n";
    let row = InstanceComparison::new("dom09", extract_metrics(reference), Metrics::missing());
    let report = render_report(&[row]);
    assert!(report.contains("(MISSING)"));
}

#[test]
fn header_column_order_is_fixed() {
    let report = render_report(&[]);
    let header = report.lines().next().unwrap();
    let columns: Vec<&str> = header.split('|').map(str::trim).collect();
    assert_eq!(
        columns,
        vec!["Instance", "Metric", "Reference", "Yours", "Diff"]
    );
}

#[test]
fn reference_status_does_not_mask_generated_status() {
    // Only the generated side's status replaces the diff column.
    let row = InstanceComparison::new(
        "dom11",
        Metrics {
            plan_length: 0,
            action_count: 0,
            status: PlanStatus::NoPlan,
        },
        extract_metrics("State 0:\nState 1: wait(1)\n"),
    );
    let report = render_report(&[row]);
    assert!(!report.contains("(NO_PLAN)"));
}
