//! Recruitment capacity model: FTE headcount and cost per service
//! across three hiring-volume scenarios.

pub mod calculator;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod hour_matrix;
pub mod input_model;
pub mod report;
pub mod session;
pub mod types;
