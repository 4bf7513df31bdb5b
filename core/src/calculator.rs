//! Capacity calculator — FTE headcount and cost per service.
//!
//! This module is PURE. It reads the input model and returns fresh
//! records; nothing is cached between calls and nothing is mutated.
//!
//! Invoked once per scenario. Scenarios share services, hours and
//! cost parameters but differ in total hires, and never see each
//! other's results.

use crate::{
    hour_matrix::HourMatrix,
    input_model::{CostParameters, Scenario, Service},
    types::SERVICE_COUNT,
};
use serde::{Deserialize, Serialize};

/// Derived figures for one service under one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub scenario: String,
    pub service: String,
    // Volume
    pub volume_fraction: f64,
    pub weighted_hires: f64,
    // Effort
    pub total_hours: f64,
    pub fte_required: f64,
    // Cost
    pub salary_cost: f64,
    pub on_costs: f64,
    pub total_cost: f64,
}

/// Scenario-wide totals for the one-line summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub scenario: String,
    pub total_fte: f64,
    pub total_cost: f64,
}

/// One record per service, in service order.
pub fn compute(
    scenario: &Scenario,
    services: &[Service; SERVICE_COUNT],
    hours: &HourMatrix,
    cost: &CostParameters,
) -> Vec<ResultRecord> {
    services
        .iter()
        .enumerate()
        .map(|(i, service)| {
            // ── Volume ─────────────────────────────────────────
            let volume_fraction = service.volume_fraction();
            let weighted_hires = scenario.total_hires * volume_fraction;

            // ── Effort ─────────────────────────────────────────
            // Stage names play no part; hours are summed unweighted.
            let total_stage_hours = hours.stage_total(i);
            let total_hours = weighted_hires * total_stage_hours;

            let fte_required = if cost.fte_hours_per_year != 0.0 {
                total_hours / cost.fte_hours_per_year
            } else {
                0.0
            };

            // ── Cost ───────────────────────────────────────────
            let salary_cost = fte_required * cost.average_salary;
            let on_costs = salary_cost * cost.on_cost_percent;
            let total_cost = salary_cost + on_costs;

            ResultRecord {
                scenario: scenario.name.clone(),
                service: service.name.clone(),
                volume_fraction,
                weighted_hires,
                total_hours,
                fte_required,
                salary_cost,
                on_costs,
                total_cost,
            }
        })
        .collect()
}

/// Sum FTE and total cost across a scenario's records.
pub fn summarize(scenario: &str, records: &[ResultRecord]) -> ScenarioSummary {
    ScenarioSummary {
        scenario: scenario.to_string(),
        total_fte: records.iter().map(|r| r.fte_required).sum(),
        total_cost: records.iter().map(|r| r.total_cost).sum(),
    }
}
