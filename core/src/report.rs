//! Scenario reports — one result tab per scenario.
//!
//! A report bundles the calculator's records with the scenario
//! summary, and renders the table, the FTE bar chart and the caption.

use crate::{
    calculator::{self, ResultRecord, ScenarioSummary},
    error::ModelResult,
    format::{
        format_currency, format_decimal, format_fte, format_percent, render_bar_chart,
        render_text_table,
    },
    input_model::InputModel,
    types::{ScenarioIndex, SCENARIO_COUNT},
};
use serde::{Deserialize, Serialize};

pub const TABLE_COLUMNS: [&str; 9] = [
    "Scenario",
    "Service",
    "% Volume",
    "Weighted Hires",
    "Total Hours",
    "FTE Required",
    "Salary Cost",
    "On-Costs",
    "Total Cost",
];

pub const CHART_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub total_hires: f64,
    pub records: Vec<ResultRecord>,
    pub summary: ScenarioSummary,
}

impl ScenarioReport {
    pub fn build(model: &InputModel, index: ScenarioIndex) -> ModelResult<Self> {
        let scenario = model.scenario(index)?;
        let records = calculator::compute(scenario, model.services(), model.hours(), model.cost());
        let summary = calculator::summarize(&scenario.name, &records);

        log::debug!(
            "report: {} hires={} total_fte={:.2} total_cost={:.0}",
            scenario.name,
            scenario.total_hires,
            summary.total_fte,
            summary.total_cost
        );

        Ok(Self {
            scenario: scenario.name.clone(),
            total_hires: scenario.total_hires,
            records,
            summary,
        })
    }

    /// Formatted cells, one row per service, in TABLE_COLUMNS order.
    pub fn table_rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|r| {
                vec![
                    r.scenario.clone(),
                    r.service.clone(),
                    format_percent(r.volume_fraction),
                    format_decimal(r.weighted_hires),
                    format_decimal(r.total_hours),
                    format_fte(r.fte_required),
                    format_currency(r.salary_cost),
                    format_currency(r.on_costs),
                    format_currency(r.total_cost),
                ]
            })
            .collect()
    }

    pub fn render_table(&self) -> String {
        render_text_table(&TABLE_COLUMNS, &self.table_rows())
    }

    /// FTE Required per service.
    pub fn render_chart(&self, width: usize) -> String {
        let bars: Vec<(String, f64)> = self
            .records
            .iter()
            .map(|r| (r.service.clone(), r.fte_required))
            .collect();
        render_bar_chart(&bars, width)
    }

    pub fn caption(&self) -> String {
        format!(
            "Total FTE: {} | Total Cost: {}",
            format_fte(self.summary.total_fte),
            format_currency(self.summary.total_cost)
        )
    }

    /// Heading, table, chart and caption.
    pub fn render(&self) -> String {
        format!(
            "=== {} ({} hires) ===\n{}\n\n{}\n\n{}",
            self.scenario,
            self.total_hires,
            self.render_table(),
            self.render_chart(CHART_WIDTH),
            self.caption()
        )
    }
}

/// Reports for every scenario, in scenario order.
pub fn build_all(model: &InputModel) -> ModelResult<Vec<ScenarioReport>> {
    (0..SCENARIO_COUNT)
        .map(|index| ScenarioReport::build(model, index))
        .collect()
}
