use std::fmt;
use thiserror::Error;

/// Why a selected file was rejected before any features were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Declared media type is not `audio/*`.
    NotAudio,
    /// Decoding succeeded but produced zero frames.
    EmptyAudio,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NotAudio => write!(f, "file is not audio"),
            InvalidInput::EmptyAudio => write!(f, "audio contains no samples"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInputKind(InvalidInput),

    #[error("decode failed: {0}")]
    DecodeFailure(String),

    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),
}

impl AnalysisError {
    /// Text shown inline in the inspector when analysis fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInputKind(InvalidInput::NotAudio) => {
                "Please upload a valid audio file."
            }
            AnalysisError::InvalidInputKind(InvalidInput::EmptyAudio) => {
                "The audio file contains no samples."
            }
            AnalysisError::DecodeFailure(_) | AnalysisError::Read(_) => {
                "Failed to analyze audio file."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
