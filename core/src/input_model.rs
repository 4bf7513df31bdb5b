//! The input model — everything the calculator reads.
//!
//! RULE: the calculator never mutates the model.
//! Every setter validates first and writes second, so a rejected
//! edit leaves the model exactly as it was.

use crate::{
    config::{
        ModelConfig, DEFAULT_AVERAGE_SALARY, DEFAULT_FTE_HOURS_PER_YEAR, DEFAULT_ON_COST_PERCENT,
        DEFAULT_SCENARIO_HIRES, DEFAULT_VOLUME_PERCENT,
    },
    error::{ensure_in_range, ensure_len, ModelError, ModelResult},
    hour_matrix::HourMatrix,
    types::{
        ScenarioIndex, ServiceIndex, StageIndex, SCENARIO_COUNT, SERVICE_COUNT, STAGE_COUNT,
    },
};
use serde::{Deserialize, Serialize};

/// Global cost inputs, shared by every scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostParameters {
    pub fte_hours_per_year: f64,
    pub average_salary: f64,
    pub on_cost_percent: f64, // fraction of salary, 0.0–1.0
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            fte_hours_per_year: DEFAULT_FTE_HOURS_PER_YEAR,
            average_salary: DEFAULT_AVERAGE_SALARY,
            on_cost_percent: DEFAULT_ON_COST_PERCENT,
        }
    }
}

impl CostParameters {
    /// `fte_hours_per_year` may be 0; the calculator guards the division.
    pub fn validate(&self) -> ModelResult<()> {
        ensure_in_range("fte_hours_per_year", self.fte_hours_per_year, 0.0, f64::INFINITY)?;
        ensure_in_range("average_salary", self.average_salary, 0.0, f64::INFINITY)?;
        ensure_in_range("on_cost_percent", self.on_cost_percent, 0.0, 1.0)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub volume_percent: f64, // share of hires, 0–100
}

impl Service {
    pub fn volume_fraction(&self) -> f64 {
        self.volume_percent / 100.0
    }
}

/// A named hiring volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub total_hires: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputModel {
    scenarios: [Scenario; SCENARIO_COUNT],
    cost: CostParameters,
    services: [Service; SERVICE_COUNT],
    stages: [String; STAGE_COUNT],
    hours: HourMatrix,
}

impl Default for InputModel {
    fn default() -> Self {
        Self {
            scenarios: std::array::from_fn(|i| Scenario {
                name: format!("Scenario {}", i + 1),
                total_hires: DEFAULT_SCENARIO_HIRES[i],
            }),
            cost: CostParameters::default(),
            services: std::array::from_fn(|i| Service {
                name: format!("Service {}", i + 1),
                volume_percent: DEFAULT_VOLUME_PERCENT,
            }),
            stages: std::array::from_fn(|j| format!("Stage {}", j + 1)),
            hours: HourMatrix::default(),
        }
    }
}

impl InputModel {
    /// Build a validated model from a loaded config.
    /// Shapes must match exactly; every value is range-checked.
    pub fn from_config(config: &ModelConfig) -> ModelResult<Self> {
        ensure_len("scenarios", config.scenarios.len(), SCENARIO_COUNT)?;
        ensure_len("services", config.services.len(), SERVICE_COUNT)?;
        ensure_len("stages", config.stages.len(), STAGE_COUNT)?;

        let mut model = Self::default();
        for (i, scenario) in config.scenarios.iter().enumerate() {
            model.set_scenario_hires(i, scenario.total_hires)?;
            model.scenarios[i].name = scenario.name.clone();
        }
        model.set_cost_parameters(config.cost)?;
        for (i, service) in config.services.iter().enumerate() {
            model.set_service_volume(i, service.volume_percent)?;
            model.rename_service(i, &service.name)?;
        }
        for (j, stage) in config.stages.iter().enumerate() {
            model.rename_stage(j, stage)?;
        }
        model.hours = HourMatrix::from_rows(&config.hours)?;

        let volume_total = model.volume_total();
        if (volume_total - 100.0).abs() > 0.01 {
            log::warn!("config: service volumes sum to {volume_total:.2}%, not 100%");
        }
        Ok(model)
    }

    /// Export the model in config-file shape.
    pub fn to_config(&self) -> ModelConfig {
        ModelConfig {
            scenarios: self.scenarios.to_vec(),
            cost: self.cost,
            services: self.services.to_vec(),
            stages: self.stages.to_vec(),
            hours: self.hours.to_rows(),
        }
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub fn scenarios(&self) -> &[Scenario; SCENARIO_COUNT] {
        &self.scenarios
    }

    pub fn scenario(&self, index: ScenarioIndex) -> ModelResult<&Scenario> {
        self.scenarios
            .get(index)
            .ok_or(ModelError::UnknownScenario { index })
    }

    pub fn cost(&self) -> &CostParameters {
        &self.cost
    }

    pub fn services(&self) -> &[Service; SERVICE_COUNT] {
        &self.services
    }

    pub fn stages(&self) -> &[String; STAGE_COUNT] {
        &self.stages
    }

    pub fn hours(&self) -> &HourMatrix {
        &self.hours
    }

    /// Sum of service volume shares. Not required to equal 100.
    pub fn volume_total(&self) -> f64 {
        self.services.iter().map(|s| s.volume_percent).sum()
    }

    // ── Setters (validate, then write) ─────────────────────────────

    pub fn set_scenario_hires(&mut self, index: ScenarioIndex, total_hires: f64) -> ModelResult<()> {
        if index >= SCENARIO_COUNT {
            return Err(ModelError::UnknownScenario { index });
        }
        ensure_in_range("total_hires", total_hires, 0.0, f64::INFINITY)?;
        self.scenarios[index].total_hires = total_hires;
        Ok(())
    }

    pub fn set_cost_parameters(&mut self, cost: CostParameters) -> ModelResult<()> {
        cost.validate()?;
        self.cost = cost;
        Ok(())
    }

    pub fn set_fte_hours_per_year(&mut self, hours: f64) -> ModelResult<()> {
        self.set_cost_parameters(CostParameters {
            fte_hours_per_year: hours,
            ..self.cost
        })
    }

    pub fn set_average_salary(&mut self, salary: f64) -> ModelResult<()> {
        self.set_cost_parameters(CostParameters {
            average_salary: salary,
            ..self.cost
        })
    }

    pub fn set_on_cost_percent(&mut self, percent: f64) -> ModelResult<()> {
        self.set_cost_parameters(CostParameters {
            on_cost_percent: percent,
            ..self.cost
        })
    }

    pub fn rename_service(&mut self, index: ServiceIndex, name: &str) -> ModelResult<()> {
        let service = self
            .services
            .get_mut(index)
            .ok_or(ModelError::UnknownService { index })?;
        service.name = name.to_string();
        Ok(())
    }

    pub fn set_service_volume(&mut self, index: ServiceIndex, percent: f64) -> ModelResult<()> {
        if index >= SERVICE_COUNT {
            return Err(ModelError::UnknownService { index });
        }
        ensure_in_range("volume_percent", percent, 0.0, 100.0)?;
        self.services[index].volume_percent = percent;
        Ok(())
    }

    pub fn rename_stage(&mut self, index: StageIndex, name: &str) -> ModelResult<()> {
        let stage = self
            .stages
            .get_mut(index)
            .ok_or(ModelError::UnknownStage { index })?;
        *stage = name.to_string();
        Ok(())
    }

    pub fn set_stage_hours(
        &mut self,
        service: ServiceIndex,
        stage: StageIndex,
        hours: f64,
    ) -> ModelResult<()> {
        self.hours.set(service, stage, hours)
    }
}
