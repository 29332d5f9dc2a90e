use crate::{Error, Result};
use tracing::{debug, info, warn};

/// States of a single ask call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskState {
    Idle,
    Validating,
    Rejected,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskEvent {
    Submit,
    EmptyInput,
    InputAccepted,
    AnswerReceived,
    RequestFailed,
}

pub struct AskStateMachine {
    state: AskState,
}

impl Default for AskStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl AskStateMachine {
    pub fn new() -> Self {
        Self {
            state: AskState::Idle,
        }
    }

    pub fn current_state(&self) -> AskState {
        self.state
    }

    pub fn transition(&mut self, event: AskEvent) -> Result<AskState> {
        let old_state = self.state;

        let new_state = match (old_state, event) {
            (AskState::Idle, AskEvent::Submit) => AskState::Validating,
            (AskState::Validating, AskEvent::EmptyInput) => AskState::Rejected,
            (AskState::Validating, AskEvent::InputAccepted) => AskState::Loading,
            (AskState::Loading, AskEvent::AnswerReceived) => AskState::Succeeded,
            (AskState::Loading, AskEvent::RequestFailed) => AskState::Failed,
            _ => {
                warn!(
                    "Invalid ask transition from {:?} with event {:?}",
                    old_state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", old_state),
                    requested: format!("{:?}", event),
                });
            }
        };

        if self.is_terminal_state(new_state) {
            info!(
                "Ask state transition: {:?} -> {:?} (event: {:?})",
                old_state, new_state, event
            );
        } else {
            debug!(
                "Ask state transition: {:?} -> {:?} (event: {:?})",
                old_state, new_state, event
            );
        }

        self.state = new_state;
        Ok(new_state)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal_state(self.state)
    }

    fn is_terminal_state(&self, state: AskState) -> bool {
        matches!(
            state,
            AskState::Rejected | AskState::Succeeded | AskState::Failed
        )
    }
}
