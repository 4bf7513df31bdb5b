use crate::input_model::{CostParameters, InputModel, Scenario, Service};
use crate::types::{SCENARIO_COUNT, SERVICE_COUNT};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCENARIO_HIRES: [f64; SCENARIO_COUNT] = [800.0, 1000.0, 1200.0];
pub const DEFAULT_FTE_HOURS_PER_YEAR: f64 = 1600.0;
pub const DEFAULT_AVERAGE_SALARY: f64 = 100_000.0;
pub const DEFAULT_ON_COST_PERCENT: f64 = 0.2;
pub const DEFAULT_VOLUME_PERCENT: f64 = 100.0 / SERVICE_COUNT as f64;

/// On-disk model inputs.
///
/// Every field is optional; anything missing falls back to the
/// built-in defaults. Shapes are loose here and checked by
/// `InputModel::from_config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub scenarios: Vec<Scenario>,
    pub cost: CostParameters,
    pub services: Vec<Service>,
    pub stages: Vec<String>,
    pub hours: Vec<Vec<f64>>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        InputModel::default().to_config()
    }
}

impl ModelConfig {
    /// Load from a JSON file.
    /// In tests, use ModelConfig::default() or from_json_str().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json_str(&content)?;
        log::info!("config: loaded model inputs from {path}");
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Parse and validate in one step.
    pub fn into_model(self) -> crate::error::ModelResult<InputModel> {
        InputModel::from_config(&self)
    }
}
