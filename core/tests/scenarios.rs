//! Scenario independence and determinism.

use capacity_core::{input_model::InputModel, report::build_all};

/// Changing Scenario 2's hires must not move Scenario 1 or Scenario 3.
#[test]
fn scenarios_are_independent() {
    let mut model = InputModel::default();
    let before = build_all(&model).unwrap();

    model.set_scenario_hires(1, 4321.0).unwrap();
    let after = build_all(&model).unwrap();

    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_ne!(after[1], before[1]);
    assert_eq!(after[1].total_hires, 4321.0);
}

/// Same inputs, same outputs, every time.
#[test]
fn recompute_is_deterministic() {
    let mut model = InputModel::default();
    model.set_stage_hours(3, 3, 2.7).unwrap();
    model.set_on_cost_percent(0.13).unwrap();

    let a = build_all(&model).unwrap();
    let b = build_all(&model).unwrap();

    let json_a = serde_json::to_string(&a).unwrap();
    let json_b = serde_json::to_string(&b).unwrap();
    assert_eq!(json_a, json_b);
}

/// Reports come back in scenario order with their own hire counts.
#[test]
fn reports_follow_scenario_order() {
    let reports = build_all(&InputModel::default()).unwrap();

    let names: Vec<&str> = reports.iter().map(|r| r.scenario.as_str()).collect();
    assert_eq!(names, ["Scenario 1", "Scenario 2", "Scenario 3"]);

    let hires: Vec<f64> = reports.iter().map(|r| r.total_hires).collect();
    assert_eq!(hires, [800.0, 1000.0, 1200.0]);
}

/// More hires never means less FTE when everything else is fixed.
#[test]
fn fte_grows_with_hires() {
    let reports = build_all(&InputModel::default()).unwrap();

    assert!(reports[0].summary.total_fte < reports[1].summary.total_fte);
    assert!(reports[1].summary.total_fte < reports[2].summary.total_fte);
}
