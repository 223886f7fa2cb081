//! Criterion benchmarks for the transcription pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pitchscribe::{transcribe_file, SampleBuffer, TranscriptionConfig};

fn sine_buffer(frequency: f64, sample_rate: u32, num_samples: usize) -> SampleBuffer {
    let samples = (0..num_samples)
        .map(|i| {
            let phase = 2.0 * std::f64::consts::PI * frequency * i as f64 / sample_rate as f64;
            (phase.sin() * 0.5 * i16::MAX as f64) as i16
        })
        .collect();
    SampleBuffer::new(samples, sample_rate)
}

fn bench_transcribe_file(c: &mut Criterion) {
    let config = TranscriptionConfig::default();

    // Two seconds of A4 at 44.1 kHz
    let buffer = sine_buffer(440.0, 44100, 88200);
    c.bench_function("transcribe_2s_tone", |b| {
        b.iter(|| transcribe_file(black_box(&buffer), black_box(&config)).unwrap())
    });

    // Ten seconds, closer to a real take
    let long_buffer = sine_buffer(261.63, 44100, 441000);
    c.bench_function("transcribe_10s_tone", |b| {
        b.iter(|| transcribe_file(black_box(&long_buffer), black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_transcribe_file);
criterion_main!(benches);
