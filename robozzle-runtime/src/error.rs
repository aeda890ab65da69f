//! Runtime error types

use robozzle_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("Return with an empty call stack")]
    EmptyCallStack,

    #[error("Invalid executor config: {0}")]
    InvalidConfig(String),
}

impl RuntimeError {
    /// Check if this error comes from stepping an executor that had already
    /// terminated
    pub fn is_precondition_violation(&self) -> bool {
        match self {
            RuntimeError::Spec(err) => err.is_precondition_violation(),
            RuntimeError::EmptyCallStack => true,
            RuntimeError::InvalidConfig(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
