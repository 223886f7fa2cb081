//! Example: transcribe WAV files into a score and print it
//!
//! Usage: `cargo run --example transcribe_wav -- input1.wav [input2.wav ...]`

use pitchscribe::{decode_wav_file, NoteEvent, TranscriptionConfig, TranscriptionJob};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: transcribe_wav INPUT.wav [INPUT.wav ...]");
        std::process::exit(1);
    }

    let buffers = paths
        .iter()
        .map(decode_wav_file)
        .collect::<Result<Vec<_>, _>>()?;

    let config = TranscriptionConfig::default();
    let mut job = TranscriptionJob::new(&buffers, &config)?.with_title(paths[0].clone());

    for progress in job.by_ref() {
        println!("{:3}% {:?}", progress.percent, progress.stage);
    }

    let score = job.into_score().expect("job ran to completion");

    for failure in &score.metadata.failures {
        eprintln!("warning: {} failed: {}", paths[failure.index], failure.reason);
    }

    for (part, path) in score.parts.iter().zip(&paths) {
        println!("\n{} ({} events):", path, part.len());
        for event in &part.events {
            match event {
                NoteEvent::Note {
                    pitch,
                    quarter_length,
                } => println!("  {:<4} {:.2} ql", pitch.to_string(), quarter_length),
                NoteEvent::Rest { quarter_length } => {
                    println!("  rest {:.2} ql", quarter_length)
                }
            }
        }
    }

    Ok(())
}
