//! Scales, pitches, and log-frequency thresholds
//!
//! A [`Scale`] is an ordered set of pitch classes spanning one octave,
//! inclusive of the wrapped tonic. Its thresholds partition an octave of
//! fractional log2-frequency space into regions, each mapped to the nearest
//! scale pitch by the normalizer.

pub mod consolidate;
pub mod normalizer;
pub mod smoothing;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pitch class names in semitone order, sharps convention
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Equal-tempered frequency of a MIDI note number (A4 = 69 = 440 Hz)
pub fn midi_to_frequency(midi: i32) -> f64 {
    440.0 * 2f64.powf((midi - 69) as f64 / 12.0)
}

/// One degree of a scale: a named pitch at a concrete octave and frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleDegree {
    /// Pitch class name (e.g. "C", "F#")
    pub name: String,
    /// Octave number (middle C is C4)
    pub octave: i32,
    /// Equal-tempered frequency in Hz
    pub frequency: f64,
}

/// An ordered sequence of scale degrees covering one octave
///
/// The last degree repeats the tonic one octave up, matching the convention
/// the threshold wrap-around relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    degrees: Vec<ScaleDegree>,
}

impl Scale {
    /// Twelve-tone chromatic scale rooted on C4
    pub fn chromatic() -> Self {
        Self::from_intervals(60, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])
    }

    /// Major scale rooted on C4
    pub fn major() -> Self {
        Self::from_intervals(60, &[0, 2, 4, 5, 7, 9, 11, 12])
    }

    /// Build a scale from a tonic MIDI note and semitone intervals
    ///
    /// Intervals are offsets from the tonic and should span exactly one
    /// octave, ending at 12 so the wrapped tonic is included.
    pub fn from_intervals(tonic_midi: u8, intervals: &[u8]) -> Self {
        let degrees = intervals
            .iter()
            .map(|&interval| {
                let midi = tonic_midi as i32 + interval as i32;
                ScaleDegree {
                    name: NOTE_NAMES[(midi % 12) as usize].to_string(),
                    octave: midi / 12 - 1,
                    frequency: midi_to_frequency(midi),
                }
            })
            .collect();
        Self { degrees }
    }

    /// The ordered degrees of this scale
    pub fn degrees(&self) -> &[ScaleDegree] {
        &self.degrees
    }

    /// Log2-space decision thresholds between consecutive degrees
    ///
    /// Each degree's fractional log2-frequency is taken; the last is wrapped
    /// by adding 1.0 octave, and thresholds are the midpoints between
    /// consecutive remainders. Yields one threshold fewer than degrees.
    pub fn thresholds(&self) -> Vec<f64> {
        let mut remainders: Vec<f64> = self
            .degrees
            .iter()
            .map(|d| d.frequency.log2().fract())
            .collect();
        if let Some(last) = remainders.last_mut() {
            *last += 1.0;
        }

        remainders
            .windows(2)
            .map(|pair| (pair[0] + pair[1]) / 2.0)
            .collect()
    }
}

/// A concrete musical pitch: class name, octave, and canonical frequency
///
/// The frequency is always the canonical equal-tempered frequency of the
/// named pitch at its octave, never the raw input frequency it was derived
/// from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    /// Pitch class name (e.g. "A")
    pub name: String,
    /// Octave number (middle C is C4)
    pub octave: i32,
    /// Canonical frequency in Hz
    pub frequency: f64,
}

impl Pitch {
    /// Place a scale degree at a given octave
    pub fn from_degree(degree: &ScaleDegree, octave: i32) -> Self {
        Self {
            name: degree.name.clone(),
            octave,
            frequency: degree.frequency * 2f64.powi(octave - degree.octave),
        }
    }

    /// Move the pitch to a new octave, rescaling the frequency to match
    pub fn set_octave(&mut self, octave: i32) {
        self.frequency *= 2f64.powi(octave - self.octave);
        self.octave = octave;
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}
