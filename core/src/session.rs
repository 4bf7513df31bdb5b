//! A calculator session — one user's inputs and their results.
//!
//! RULES:
//!   - A session owns its input model. Nothing is shared across sessions.
//!   - Inputs change only through `apply()`, which validates first.
//!   - Results are never cached: `recompute()` always runs the
//!     calculator for every scenario from the current inputs.

use crate::{
    command::InputCommand,
    error::ModelResult,
    event::{ModelEvent, Revision},
    input_model::InputModel,
    report::{self, ScenarioReport},
    types::SessionId,
};

pub struct Session {
    pub session_id: SessionId,
    model:          InputModel,
    revision:       Revision,
    events:         Vec<ModelEvent>,
    last_recompute: Option<Revision>,
}

impl Session {
    /// New session with a random v4 id.
    pub fn new(model: InputModel) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), model)
    }

    pub fn with_id(session_id: SessionId, model: InputModel) -> Self {
        log::info!("session {session_id}: started");
        Self {
            events: vec![ModelEvent::SessionStarted {
                session_id: session_id.clone(),
            }],
            session_id,
            model,
            revision: 0,
            last_recompute: None,
        }
    }

    pub fn model(&self) -> &InputModel {
        &self.model
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn events(&self) -> &[ModelEvent] {
        &self.events
    }

    /// Validate and apply one edit. Rejected edits are logged and
    /// recorded, and leave the inputs untouched.
    pub fn apply(&mut self, command: &InputCommand) -> ModelResult<()> {
        match command.apply_to(&mut self.model) {
            Ok(()) => {
                self.revision += 1;
                log::info!(
                    "session {}: rev={} applied {}",
                    self.session_id,
                    self.revision,
                    command.kind()
                );
                self.events.push(ModelEvent::CommandApplied {
                    revision: self.revision,
                    command:  command.kind().to_string(),
                });
                Ok(())
            }
            Err(e) => {
                log::warn!(
                    "session {}: rejected {}: {e}",
                    self.session_id,
                    command.kind()
                );
                self.events.push(ModelEvent::CommandRejected {
                    revision: self.revision,
                    command:  command.kind().to_string(),
                    reason:   e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Apply edits in order, stopping at the first rejection.
    pub fn apply_all<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a InputCommand>,
    ) -> ModelResult<()> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    /// Run the calculator for every scenario against the current inputs.
    /// Only the first recompute at each revision is recorded.
    pub fn recompute(&mut self) -> ModelResult<Vec<ScenarioReport>> {
        let reports = report::build_all(&self.model)?;
        if self.last_recompute == Some(self.revision) {
            return Ok(reports);
        }
        self.last_recompute = Some(self.revision);

        log::info!(
            "session {}: rev={} recomputed {} scenarios",
            self.session_id,
            self.revision,
            reports.len()
        );
        self.events.push(ModelEvent::ScenariosRecomputed {
            revision:   self.revision,
            total_fte:  reports.iter().map(|r| r.summary.total_fte).collect(),
            total_cost: reports.iter().map(|r| r.summary.total_cost).collect(),
        });
        Ok(reports)
    }
}
