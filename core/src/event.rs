//! Session event log.
//!
//! Every command outcome and every recompute is recorded, in order.
//! The log lives in memory for the session's lifetime only.

use crate::types::SessionId;
use serde::{Deserialize, Serialize};

/// Monotonic count of applied commands within a session.
pub type Revision = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelEvent {
    SessionStarted {
        session_id: SessionId,
    },
    CommandApplied {
        revision: Revision,
        command:  String,
    },
    CommandRejected {
        revision: Revision,
        command:  String,
        reason:   String,
    },
    ScenariosRecomputed {
        revision:   Revision,
        total_fte:  Vec<f64>,
        total_cost: Vec<f64>,
    },
}

impl ModelEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ModelEvent::SessionStarted { .. }      => "session_started",
            ModelEvent::CommandApplied { .. }      => "command_applied",
            ModelEvent::CommandRejected { .. }     => "command_rejected",
            ModelEvent::ScenariosRecomputed { .. } => "scenarios_recomputed",
        }
    }
}
