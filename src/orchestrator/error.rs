use crate::model::PatternId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Pattern not available in this edition: {0}")]
    PatternUnavailable(PatternId),

    #[error("Session error: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;
