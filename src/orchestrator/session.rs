//! # Session
//!
//! One demonstration run, modeled as a small state machine:
//!
//! ```text
//! Start ──confirm──▶ Confirmed ──collect──▶ Collected ──generate──▶ Generated
//!   │                    │
//!   └──▶ Cancelled       └──▶ Aborted
//! ```
//!
//! `Cancelled` and `Aborted` are normal endings, not errors. Calling an operation from
//! any state other than the one it expects returns [`OrchestratorError::Session`].
//!
//! The session owns the conversation log and the pattern registry. Generation always
//! uses the configured pattern; placeholders in the registry cannot be generated.

use crate::collector::RequirementsCollector;
use crate::config::OrchestratorConfig;
use crate::error::{OrchestratorError, Result};
use crate::model::{ConversationLog, GeneratedSolution, RequirementSet};
use crate::patterns::PatternRegistry;
use crate::prompt::Prompter;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Start,
    Confirmed,
    Cancelled,
    Collected(RequirementSet),
    Aborted,
    Generated(GeneratedSolution),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Start => "start",
            SessionState::Confirmed => "confirmed",
            SessionState::Cancelled => "cancelled",
            SessionState::Collected(_) => "collected",
            SessionState::Aborted => "aborted",
            SessionState::Generated(_) => "generated",
        }
    }

    /// True for the states no operation can leave.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            SessionState::Cancelled | SessionState::Aborted | SessionState::Generated(_)
        )
    }
}

/// Only a literal `y`, ignoring case and surrounding whitespace, confirms.
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}

pub struct Session {
    config: OrchestratorConfig,
    registry: PatternRegistry,
    log: ConversationLog,
    state: SessionState,
}

impl Session {
    pub fn new(config: OrchestratorConfig) -> Self {
        Self::with_registry(config, PatternRegistry::builtin())
    }

    pub fn with_registry(config: OrchestratorConfig, registry: PatternRegistry) -> Self {
        Self {
            config,
            registry,
            log: ConversationLog::new(),
            state: SessionState::Start,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// `Start -> Confirmed | Cancelled`
    pub fn confirm(&mut self, answer: &str) -> Result<&SessionState> {
        self.expect("confirm", |s| matches!(s, SessionState::Start))?;
        let next = if is_confirmation(answer) {
            SessionState::Confirmed
        } else {
            SessionState::Cancelled
        };
        Ok(self.transition(next))
    }

    /// `Confirmed -> Collected | Aborted`
    pub fn collect<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<&SessionState> {
        self.expect("collect", |s| matches!(s, SessionState::Confirmed))?;
        let next = match RequirementsCollector::collect(prompter, &mut self.log)? {
            Some(requirements) => SessionState::Collected(requirements),
            None => SessionState::Aborted,
        };
        Ok(self.transition(next))
    }

    /// `Collected -> Generated`
    pub fn generate(&mut self) -> Result<&SessionState> {
        let requirements = match &self.state {
            SessionState::Collected(requirements) => requirements,
            other => return Err(invalid("generate", other)),
        };

        let generator = self.registry.generator(self.config.pattern)?;
        let solution = generator.generate(requirements, &self.config.output_root)?;
        Ok(self.transition(SessionState::Generated(solution)))
    }

    fn expect(&self, operation: &str, allowed: impl Fn(&SessionState) -> bool) -> Result<()> {
        if allowed(&self.state) {
            Ok(())
        } else {
            Err(invalid(operation, &self.state))
        }
    }

    fn transition(&mut self, next: SessionState) -> &SessionState {
        debug!(from = self.state.name(), to = next.name(), "session transition");
        self.state = next;
        &self.state
    }
}

fn invalid(operation: &str, state: &SessionState) -> OrchestratorError {
    OrchestratorError::Session(format!(
        "cannot {} from the {} state",
        operation,
        state.name()
    ))
}
