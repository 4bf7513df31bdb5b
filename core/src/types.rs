//! Shared primitive types used across the capacity model.

/// Number of services in the model. Rows of the hour matrix.
pub const SERVICE_COUNT: usize = 6;

/// Number of recruitment stages. Columns of the hour matrix.
pub const STAGE_COUNT: usize = 15;

/// Number of hiring-volume scenarios evaluated side by side.
pub const SCENARIO_COUNT: usize = 3;

/// Position of a service in the service list. Identity is positional.
pub type ServiceIndex = usize;

/// Position of a stage in the stage list.
pub type StageIndex = usize;

/// Position of a scenario (0 = "Scenario 1").
pub type ScenarioIndex = usize;

/// The canonical session identifier.
pub type SessionId = String;
