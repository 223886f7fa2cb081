//! Run-length note/rest segmentation
//!
//! A state machine over the consolidated pitch sequence. Frames sharing one
//! frequency accumulate into `good`; a run of at least [`MIN_NOTE_FRAMES`]
//! confirms a note. Frames that never stabilize accumulate into `bad`, and a
//! gap of at least [`MIN_REST_FRAMES`] between confirmed notes is emitted as
//! a rest; shorter gaps are absorbed as onset noise.
//!
//! The first frame's frequency is forced to the rest sentinel so scanning
//! always starts from a rest-like state. One frame is consumed unexamined at
//! every run boundary; this is pinned reference behavior (see the
//! characterization tests) and effective run lengths are shorter than the
//! raw input runs by one or two frames.

use crate::features::pitch::REST_FREQUENCY;
use crate::features::scale::Pitch;

/// Consecutive identical-frequency frames required to confirm a note
pub const MIN_NOTE_FRAMES: usize = 6;

/// Unstable frames required between confirmed notes to emit a rest
pub const MIN_REST_FRAMES: usize = 15;

/// A segmented event: a confirmed pitch or a gap
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A confirmed note with its consolidated pitch
    Note(Pitch),
    /// A gap long enough to count as a rest
    Rest,
}

impl Segment {
    /// True for rest segments
    pub fn is_rest(&self) -> bool {
        matches!(self, Segment::Rest)
    }
}

/// Segment a pitch sequence into note/rest events with frame run lengths
///
/// Returns parallel vectors: one [`Segment`] per event and its length in
/// frames. An empty input yields empty outputs.
pub fn join_consecutive_identical_pitches(mut pitches: Vec<Pitch>) -> (Vec<Segment>, Vec<usize>) {
    if pitches.is_empty() {
        return (Vec::new(), Vec::new());
    }

    pitches[0].frequency = REST_FREQUENCY;

    let mut segments = Vec::new();
    let mut durations = Vec::new();

    let mut j = 0;
    let mut good = 0usize;
    let mut bad = 0usize;
    let mut valid_note = false;

    while j < pitches.len() {
        let frequency = pitches[j].frequency;

        while j < pitches.len() && pitches[j].frequency == frequency {
            good += 1;

            if good >= MIN_NOTE_FRAMES {
                valid_note = true;

                if bad >= MIN_REST_FRAMES {
                    durations.push(bad);
                    segments.push(Segment::Rest);
                }
                bad = 0;
            }
            j += 1;
        }

        if valid_note {
            durations.push(good);
            segments.push(Segment::Note(pitches[j - 1].clone()));
        } else {
            bad += good;
        }
        good = 0;
        valid_note = false;
        j += 1;
    }

    log::debug!(
        "Segmented {} frames into {} events ({} rests)",
        pitches.len(),
        segments.len(),
        segments.iter().filter(|s| s.is_rest()).count()
    );

    (segments, durations)
}
