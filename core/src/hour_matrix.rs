//! Hours per stage per service.
//!
//! RULE: the matrix is always SERVICE_COUNT × STAGE_COUNT.
//! Ragged input is rejected at construction, never padded.

use crate::{
    error::{ensure_in_range, ensure_len, ModelError, ModelResult},
    types::{ServiceIndex, StageIndex, SERVICE_COUNT, STAGE_COUNT},
};
use serde::{Deserialize, Serialize};

/// Hours a single hire spends in each stage, by default.
pub const DEFAULT_STAGE_HOURS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourMatrix {
    cells: [[f64; STAGE_COUNT]; SERVICE_COUNT],
}

impl Default for HourMatrix {
    fn default() -> Self {
        Self::filled(DEFAULT_STAGE_HOURS)
    }
}

impl HourMatrix {
    /// Every cell set to `hours`. Negative fill values are clamped to 0.
    pub fn filled(hours: f64) -> Self {
        Self {
            cells: [[hours.max(0.0); STAGE_COUNT]; SERVICE_COUNT],
        }
    }

    /// Build from loosely-shaped rows (config files, IPC payloads).
    pub fn from_rows(rows: &[Vec<f64>]) -> ModelResult<Self> {
        ensure_len("hours", rows.len(), SERVICE_COUNT)?;

        let mut matrix = Self::filled(0.0);
        for (service, row) in rows.iter().enumerate() {
            ensure_len(&format!("hours[{service}]"), row.len(), STAGE_COUNT)?;
            for (stage, &hours) in row.iter().enumerate() {
                matrix.set(service, stage, hours)?;
            }
        }
        Ok(matrix)
    }

    pub fn get(&self, service: ServiceIndex, stage: StageIndex) -> Option<f64> {
        self.cells.get(service).and_then(|row| row.get(stage)).copied()
    }

    /// Set one cell. Validates indices and `hours >= 0` before writing.
    pub fn set(&mut self, service: ServiceIndex, stage: StageIndex, hours: f64) -> ModelResult<()> {
        if service >= SERVICE_COUNT {
            return Err(ModelError::UnknownService { index: service });
        }
        if stage >= STAGE_COUNT {
            return Err(ModelError::UnknownStage { index: stage });
        }
        ensure_in_range(
            &format!("hours[{service}][{stage}]"),
            hours,
            0.0,
            f64::INFINITY,
        )?;
        self.cells[service][stage] = hours;
        Ok(())
    }

    pub fn row(&self, service: ServiceIndex) -> Option<&[f64; STAGE_COUNT]> {
        self.cells.get(service)
    }

    /// Plain sum of a service's stage hours. Zero cells are included.
    pub fn stage_total(&self, service: ServiceIndex) -> f64 {
        self.row(service)
            .map(|row| row.iter().sum())
            .unwrap_or(0.0)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64; STAGE_COUNT]> {
        self.cells.iter()
    }

    /// Loose-shaped copy, the inverse of `from_rows`.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }
}
