use crate::{
    error::ModelResult,
    input_model::InputModel,
    types::{ScenarioIndex, ServiceIndex, StageIndex},
};
use serde::{Deserialize, Serialize};

/// Every edit the presentation surface can make to the input model.
/// Variants are appended, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum InputCommand {
    // ── Scenario volumes ──────────────────────────
    SetScenarioHires {
        scenario:    ScenarioIndex,
        total_hires: f64,
    },

    // ── Cost parameters ───────────────────────────
    SetFteHoursPerYear { hours: f64 },
    SetAverageSalary { salary: f64 },
    SetOnCostPercent { percent: f64 },

    // ── Services and stages ───────────────────────
    RenameService {
        service: ServiceIndex,
        name:    String,
    },
    SetServiceVolume {
        service: ServiceIndex,
        percent: f64,
    },
    RenameStage {
        stage: StageIndex,
        name:  String,
    },
    SetStageHours {
        service: ServiceIndex,
        stage:   StageIndex,
        hours:   f64,
    },

    ResetDefaults,
}

impl InputCommand {
    /// Stable snake_case name, matching the serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            InputCommand::SetScenarioHires { .. }   => "set_scenario_hires",
            InputCommand::SetFteHoursPerYear { .. } => "set_fte_hours_per_year",
            InputCommand::SetAverageSalary { .. }   => "set_average_salary",
            InputCommand::SetOnCostPercent { .. }   => "set_on_cost_percent",
            InputCommand::RenameService { .. }      => "rename_service",
            InputCommand::SetServiceVolume { .. }   => "set_service_volume",
            InputCommand::RenameStage { .. }        => "rename_stage",
            InputCommand::SetStageHours { .. }      => "set_stage_hours",
            InputCommand::ResetDefaults             => "reset_defaults",
        }
    }

    /// Apply to `model`. On error the model is unchanged.
    pub fn apply_to(&self, model: &mut InputModel) -> ModelResult<()> {
        match self {
            InputCommand::SetScenarioHires { scenario, total_hires } => {
                model.set_scenario_hires(*scenario, *total_hires)
            }
            InputCommand::SetFteHoursPerYear { hours } => model.set_fte_hours_per_year(*hours),
            InputCommand::SetAverageSalary { salary } => model.set_average_salary(*salary),
            InputCommand::SetOnCostPercent { percent } => model.set_on_cost_percent(*percent),
            InputCommand::RenameService { service, name } => model.rename_service(*service, name),
            InputCommand::SetServiceVolume { service, percent } => {
                model.set_service_volume(*service, *percent)
            }
            InputCommand::RenameStage { stage, name } => model.rename_stage(*stage, name),
            InputCommand::SetStageHours { service, stage, hours } => {
                model.set_stage_hours(*service, *stage, *hours)
            }
            InputCommand::ResetDefaults => {
                *model = InputModel::default();
                Ok(())
            }
        }
    }
}
