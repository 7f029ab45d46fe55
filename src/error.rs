use std::path::PathBuf;

use thiserror::Error;

use crate::states::quiz_state::Phase;

/// Errors raised by catalog lookups and session operations.
///
/// None of these are fatal. A session that returns one is left exactly as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question index {index} out of range (catalog has {count} questions)")]
    OutOfRange { index: usize, count: usize },

    #[error("unknown profile label: {0}")]
    UnknownProfile(String),

    #[error("label {label} is not an option of question {index}")]
    InvalidSelection { label: String, index: usize },

    #[error("{operation} is not allowed while the session is {phase}")]
    InvalidStateTransition {
        operation: &'static str,
        phase: Phase,
    },
}

impl QuizError {
    /// Stable snake_case tag used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            QuizError::OutOfRange { .. } => "out_of_range",
            QuizError::UnknownProfile(_) => "unknown_profile",
            QuizError::InvalidSelection { .. } => "invalid_selection",
            QuizError::InvalidStateTransition { .. } => "invalid_state_transition",
        }
    }
}

/// Errors raised while loading or validating catalog content.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

pub type QuizResult<T> = Result<T, QuizError>;
