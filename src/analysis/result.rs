//! Transcription result types
//!
//! Plain immutable value types carrying exactly what a renderer needs:
//! pitch name, octave, frequency, and quantized duration. Deliberately
//! decoupled from any particular notation library's object model.

use serde::{Deserialize, Serialize};

pub use crate::features::scale::Pitch;

/// A transcribed note or rest with its quantized duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NoteEvent {
    /// A pitched note
    Note {
        /// The consolidated pitch
        pitch: Pitch,
        /// Duration in quarter-note units
        quarter_length: f64,
    },
    /// A rest
    Rest {
        /// Duration in quarter-note units
        quarter_length: f64,
    },
}

impl NoteEvent {
    /// Duration in quarter-note units
    pub fn quarter_length(&self) -> f64 {
        match self {
            NoteEvent::Note { quarter_length, .. } => *quarter_length,
            NoteEvent::Rest { quarter_length } => *quarter_length,
        }
    }

    /// The pitch, if this is a note
    pub fn pitch(&self) -> Option<&Pitch> {
        match self {
            NoteEvent::Note { pitch, .. } => Some(pitch),
            NoteEvent::Rest { .. } => None,
        }
    }

    /// True for rest events
    pub fn is_rest(&self) -> bool {
        matches!(self, NoteEvent::Rest { .. })
    }
}

/// One monophonic part: the transcription of a single input file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Part {
    /// Ordered note/rest events
    pub events: Vec<NoteEvent>,
}

impl Part {
    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the part holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total duration in quarter-note units
    pub fn total_quarter_length(&self) -> f64 {
        self.events.iter().map(|e| e.quarter_length()).sum()
    }
}

/// A file that failed to transcribe within a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartFailure {
    /// Index of the failed input in the batch
    pub index: usize,
    /// Human-readable failure description
    pub reason: String,
}

/// Score-level metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreMetadata {
    /// Score title, typically the first input's label
    pub title: Option<String>,
    /// Composer/attribution string
    pub composer: Option<String>,
    /// Inputs that failed to transcribe; their parts are empty placeholders
    pub failures: Vec<PartFailure>,
}

/// A multi-part score: one part per input file, in input order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Parts in input order
    pub parts: Vec<Part>,
    /// Score-level metadata
    pub metadata: ScoreMetadata,
}
