//! Codec errors

use robozzle_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Unexpected character {found:?} at offset {offset}")]
    UnexpectedCharacter { offset: usize, found: char },

    #[error("Truncated command at offset {offset}")]
    TruncatedCommand { offset: usize },

    #[error("Too many commands in function {function} at offset {offset} (maximum: 10)")]
    TooManyCommands { function: usize, offset: usize },

    #[error("Too many functions at offset {offset} (maximum: 5)")]
    TooManyFunctions { offset: usize },

    #[error("Program text contains no functions")]
    NoFunctions,

    #[error("Program error: {0}")]
    Spec(#[from] SpecError),
}

impl CodecError {
    /// Byte offset in the source text, when the error has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            CodecError::UnexpectedCharacter { offset, .. }
            | CodecError::TruncatedCommand { offset }
            | CodecError::TooManyCommands { offset, .. }
            | CodecError::TooManyFunctions { offset } => Some(*offset),
            CodecError::NoFunctions | CodecError::Spec(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::UnexpectedCharacter { offset: 4, found: 'x' };
        assert_eq!(err.to_string(), "Unexpected character 'x' at offset 4");

        let err = CodecError::TooManyCommands { function: 1, offset: 30 };
        assert_eq!(
            err.to_string(),
            "Too many commands in function 1 at offset 30 (maximum: 10)"
        );
    }

    #[test]
    fn test_offset() {
        assert_eq!(CodecError::TruncatedCommand { offset: 7 }.offset(), Some(7));
        assert_eq!(CodecError::NoFunctions.offset(), None);
        assert_eq!(CodecError::from(SpecError::InvalidFunctionCount(0)).offset(), None);
    }
}
