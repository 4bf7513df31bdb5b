use capacity_core::{
    command::InputCommand,
    error::ModelError,
    input_model::InputModel,
};

#[test]
fn valid_commands_update_the_model() {
    let mut model = InputModel::default();

    let commands = [
        InputCommand::SetScenarioHires { scenario: 2, total_hires: 1500.0 },
        InputCommand::SetFteHoursPerYear { hours: 1700.0 },
        InputCommand::SetAverageSalary { salary: 92_000.0 },
        InputCommand::SetOnCostPercent { percent: 0.25 },
        InputCommand::RenameService { service: 1, name: "Medical".into() },
        InputCommand::SetServiceVolume { service: 1, percent: 30.0 },
        InputCommand::RenameStage { stage: 0, name: "Advertising".into() },
        InputCommand::SetStageHours { service: 5, stage: 14, hours: 3.4 },
    ];
    for cmd in &commands {
        cmd.apply_to(&mut model).unwrap();
    }

    assert_eq!(model.scenarios()[2].total_hires, 1500.0);
    assert_eq!(model.cost().fte_hours_per_year, 1700.0);
    assert_eq!(model.cost().average_salary, 92_000.0);
    assert_eq!(model.cost().on_cost_percent, 0.25);
    assert_eq!(model.services()[1].name, "Medical");
    assert_eq!(model.services()[1].volume_percent, 30.0);
    assert_eq!(model.stages()[0], "Advertising");
    assert_eq!(model.hours().get(5, 14), Some(3.4));
}

/// Out-of-range values are rejected and the model is left untouched.
#[test]
fn out_of_range_values_are_rejected() {
    let rejected = [
        InputCommand::SetScenarioHires { scenario: 0, total_hires: -1.0 },
        InputCommand::SetFteHoursPerYear { hours: -40.0 },
        InputCommand::SetAverageSalary { salary: f64::NAN },
        InputCommand::SetOnCostPercent { percent: 1.2 },
        InputCommand::SetServiceVolume { service: 0, percent: 100.5 },
        InputCommand::SetStageHours { service: 0, stage: 0, hours: -0.1 },
    ];

    for cmd in &rejected {
        let mut model = InputModel::default();
        let err = cmd.apply_to(&mut model).unwrap_err();
        assert!(
            matches!(err, ModelError::OutOfRange { .. } | ModelError::NotFinite { .. }),
            "{}: unexpected error {err}",
            cmd.kind()
        );
        assert_eq!(model, InputModel::default(), "{} mutated the model", cmd.kind());
    }
}

#[test]
fn unknown_indices_are_rejected() {
    let mut model = InputModel::default();

    let err = InputCommand::SetScenarioHires { scenario: 3, total_hires: 10.0 }
        .apply_to(&mut model)
        .unwrap_err();
    assert!(matches!(err, ModelError::UnknownScenario { index: 3 }));

    let err = InputCommand::RenameService { service: 6, name: "x".into() }
        .apply_to(&mut model)
        .unwrap_err();
    assert!(matches!(err, ModelError::UnknownService { index: 6 }));

    let err = InputCommand::SetStageHours { service: 0, stage: 15, hours: 1.0 }
        .apply_to(&mut model)
        .unwrap_err();
    assert!(matches!(err, ModelError::UnknownStage { index: 15 }));

    assert_eq!(model, InputModel::default());
}

/// Boundary values are accepted.
#[test]
fn range_endpoints_are_accepted() {
    let mut model = InputModel::default();
    InputCommand::SetOnCostPercent { percent: 0.0 }.apply_to(&mut model).unwrap();
    InputCommand::SetOnCostPercent { percent: 1.0 }.apply_to(&mut model).unwrap();
    InputCommand::SetServiceVolume { service: 3, percent: 0.0 }.apply_to(&mut model).unwrap();
    InputCommand::SetServiceVolume { service: 3, percent: 100.0 }.apply_to(&mut model).unwrap();
    InputCommand::SetFteHoursPerYear { hours: 0.0 }.apply_to(&mut model).unwrap();
    InputCommand::SetStageHours { service: 2, stage: 2, hours: 0.0 }.apply_to(&mut model).unwrap();
}

#[test]
fn reset_restores_defaults() {
    let mut model = InputModel::default();
    InputCommand::SetAverageSalary { salary: 1.0 }.apply_to(&mut model).unwrap();
    InputCommand::RenameStage { stage: 4, name: "Screening".into() }.apply_to(&mut model).unwrap();

    InputCommand::ResetDefaults.apply_to(&mut model).unwrap();
    assert_eq!(model, InputModel::default());
}

/// Commands arrive from the runner as tagged JSON.
#[test]
fn commands_parse_from_tagged_json() {
    let cmd: InputCommand = serde_json::from_str(
        r#"{"cmd":"set_stage_hours","service":1,"stage":2,"hours":0.3}"#,
    )
    .unwrap();
    assert_eq!(cmd, InputCommand::SetStageHours { service: 1, stage: 2, hours: 0.3 });
    assert_eq!(cmd.kind(), "set_stage_hours");

    let reset: InputCommand = serde_json::from_str(r#"{"cmd":"reset_defaults"}"#).unwrap();
    assert_eq!(reset, InputCommand::ResetDefaults);
}
