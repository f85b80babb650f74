use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ScanError {
    #[error("[line {line}] Error: Unexpected character: {character}")]
    #[diagnostic(code(loxlex::unexpected_character))]
    UnexpectedCharacter { character: String, line: usize },

    #[error("Error: {message}")]
    Other { message: String },
}

impl ScanError {
    pub fn unexpected_character(character: impl Into<String>, line: usize) -> Self {
        Self::UnexpectedCharacter {
            character: character.into(),
            line,
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Line the error is attributed to, when it is tied to a location.
    pub fn line(&self) -> Option<usize> {
        match self {
            ScanError::UnexpectedCharacter { line, .. } => Some(*line),
            ScanError::Other { .. } => None,
        }
    }
}
