//! Error types for the transcription engine

use std::fmt;

/// Errors that can occur during transcription
#[derive(Debug, Clone)]
pub enum TranscriptionError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),

    /// Processing error during transcription
    ProcessingError(String),

    /// Numerical error (non-finite frequency, overflow, etc.)
    NumericalError(String),
}

impl fmt::Display for TranscriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptionError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            TranscriptionError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            TranscriptionError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            TranscriptionError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for TranscriptionError {}
