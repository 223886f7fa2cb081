//! Result assembly and progress reporting

pub mod progress;
pub mod result;

use crate::features::duration::{quantize_duration, quarter_length_estimate};
use crate::features::segment::Segment;
use result::{NoteEvent, Part};

/// Assemble segments and run lengths into a part with quantized durations
///
/// Estimates the quarter-note length from the run-length distribution, then
/// quantizes each event's duration. With `remove_leading_rests`, rest events
/// before the first note are dropped, so the part never begins with a rest.
/// Empty inputs yield an empty part.
pub fn assemble_part(
    segments: &[Segment],
    durations: &[usize],
    remove_leading_rests: bool,
    reference_quarter_length: f64,
) -> Part {
    debug_assert_eq!(segments.len(), durations.len());

    if segments.is_empty() {
        return Part::default();
    }

    let quarter_length = quarter_length_estimate(durations, reference_quarter_length);

    let mut events = Vec::with_capacity(segments.len());
    let mut trimming = remove_leading_rests;

    for (segment, &frames) in segments.iter().zip(durations) {
        let quantized = quantize_duration(frames as f64 / quarter_length);

        match segment {
            Segment::Rest if trimming => continue,
            Segment::Rest => events.push(NoteEvent::Rest {
                quarter_length: quantized,
            }),
            Segment::Note(pitch) => {
                events.push(NoteEvent::Note {
                    pitch: pitch.clone(),
                    quarter_length: quantized,
                });
                trimming = false;
            }
        }
    }

    Part { events }
}
