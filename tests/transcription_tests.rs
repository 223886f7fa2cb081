//! End-to-end tests for the transcription pipeline

use pitchscribe::{
    transcribe_file, transcribe_files, NoteEvent, SampleBuffer, TranscriptionConfig,
};

/// Synthesize a mono sine tone buffer
fn sine_buffer(frequency: f64, sample_rate: u32, num_samples: usize) -> SampleBuffer {
    let samples = (0..num_samples)
        .map(|i| {
            let phase = 2.0 * std::f64::consts::PI * frequency * i as f64 / sample_rate as f64;
            (phase.sin() * 0.5 * i16::MAX as f64) as i16
        })
        .collect();
    SampleBuffer::new(samples, sample_rate)
}

/// A tone followed by a different tone, back to back
fn two_tone_buffer(f1: f64, f2: f64, sample_rate: u32, samples_each: usize) -> SampleBuffer {
    let mut samples: Vec<i16> = (0..samples_each)
        .map(|i| {
            let phase = 2.0 * std::f64::consts::PI * f1 * i as f64 / sample_rate as f64;
            (phase.sin() * 0.5 * i16::MAX as f64) as i16
        })
        .collect();
    samples.extend((0..samples_each).map(|i| {
        let phase = 2.0 * std::f64::consts::PI * f2 * i as f64 / sample_rate as f64;
        (phase.sin() * 0.5 * i16::MAX as f64) as i16
    }));
    SampleBuffer::new(samples, sample_rate)
}

#[test]
fn test_pure_tone_yields_single_matching_note() {
    // Half a second of A4
    let buffer = sine_buffer(440.0, 44100, 22016);
    let config = TranscriptionConfig::default();

    let part = transcribe_file(&buffer, &config).expect("transcription should succeed");

    assert_eq!(part.len(), 1, "events: {:?}", part.events);
    match &part.events[0] {
        NoteEvent::Note { pitch, .. } => {
            assert_eq!(pitch.name, "A");
            assert_eq!(pitch.octave, 4);
            assert!((pitch.frequency - 440.0).abs() < 1e-9);
        }
        other => panic!("Expected a note, got {:?}", other),
    }
}

#[test]
fn test_two_tones_yield_two_notes() {
    // Quarter second each of A4 then E4
    let buffer = two_tone_buffer(440.0, 329.63, 44100, 11008);
    let config = TranscriptionConfig::default();

    let part = transcribe_file(&buffer, &config).expect("transcription should succeed");

    let names: Vec<&str> = part
        .events
        .iter()
        .filter_map(|e| e.pitch())
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "E"], "events: {:?}", part.events);
}

#[test]
fn test_part_never_starts_with_rest() {
    let config = TranscriptionConfig::default();
    assert!(config.remove_leading_rests);

    // Several differently shaped inputs; none may start with a rest
    let inputs = vec![
        sine_buffer(440.0, 44100, 22016),
        two_tone_buffer(261.63, 440.0, 44100, 11008),
        sine_buffer(329.63, 22050, 11008),
    ];

    for buffer in &inputs {
        let part = transcribe_file(buffer, &config).unwrap();
        if let Some(first) = part.events.first() {
            assert!(!first.is_rest(), "part starts with a rest: {:?}", first);
        }
    }
}

#[test]
fn test_empty_buffer_yields_empty_part() {
    let buffer = SampleBuffer::new(vec![], 44100);
    let part = transcribe_file(&buffer, &TranscriptionConfig::default()).unwrap();
    assert!(part.is_empty());
}

#[test]
fn test_buffer_shorter_than_one_block_yields_empty_part() {
    let buffer = SampleBuffer::new(vec![100i16; 100], 44100);
    let part = transcribe_file(&buffer, &TranscriptionConfig::default()).unwrap();
    assert!(part.is_empty());
}

#[test]
fn test_too_few_blocks_for_smoothing_is_an_error() {
    // Three blocks with a 7-wide smoothing window
    let buffer = sine_buffer(440.0, 44100, 256 * 3);
    let result = transcribe_file(&buffer, &TranscriptionConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_batch_of_identical_buffers_yields_identical_parts() {
    let buffer = sine_buffer(440.0, 44100, 22016);
    let buffers = vec![buffer.clone(), buffer.clone(), buffer];
    let config = TranscriptionConfig::default();

    let score = transcribe_files(&buffers, &config).expect("batch should succeed");

    assert_eq!(score.parts.len(), 3);
    assert!(score.metadata.failures.is_empty());
    assert_eq!(score.parts[0], score.parts[1]);
    assert_eq!(score.parts[1], score.parts[2]);
}

#[test]
fn test_batch_preserves_input_order() {
    let a = sine_buffer(440.0, 44100, 22016);
    let c = sine_buffer(261.63, 44100, 22016);
    let score = transcribe_files(&[a, c], &TranscriptionConfig::default()).unwrap();

    assert_eq!(score.parts.len(), 2);
    let first = score.parts[0].events[0].pitch().unwrap();
    let second = score.parts[1].events[0].pitch().unwrap();
    assert_eq!(first.name, "A");
    assert_eq!(second.name, "C");
}

#[test]
fn test_batch_records_per_file_failure_without_aborting() {
    let good = sine_buffer(440.0, 44100, 22016);
    // Too short for the smoothing window: fails, but only for its own slot
    let bad = sine_buffer(440.0, 44100, 256 * 3);
    let score = transcribe_files(&[good, bad], &TranscriptionConfig::default()).unwrap();

    assert_eq!(score.parts.len(), 2);
    assert!(!score.parts[0].is_empty());
    assert!(score.parts[1].is_empty());
    assert_eq!(score.metadata.failures.len(), 1);
    assert_eq!(score.metadata.failures[0].index, 1);
}

#[test]
fn test_invalid_config_fails_the_whole_batch() {
    let buffer = sine_buffer(440.0, 44100, 22016);
    let config = TranscriptionConfig {
        block_size: 0,
        ..Default::default()
    };
    assert!(transcribe_files(&[buffer], &config).is_err());
}

#[test]
fn test_durations_are_quantized_ladder_values() {
    let buffer = two_tone_buffer(440.0, 523.25, 44100, 22016);
    let part = transcribe_file(&buffer, &TranscriptionConfig::default()).unwrap();

    const LADDER: [f64; 6] = [0.25, 0.5, 1.0, 1.5, 2.0, 4.0];
    for event in &part.events {
        assert!(
            LADDER.contains(&event.quarter_length()),
            "unquantized duration: {:?}",
            event
        );
    }
}

#[test]
fn test_transcription_is_deterministic() {
    let buffer = two_tone_buffer(440.0, 329.63, 44100, 22016);
    let config = TranscriptionConfig::default();
    let first = transcribe_file(&buffer, &config).unwrap();
    let second = transcribe_file(&buffer, &config).unwrap();
    assert_eq!(first, second);
}
