//! Pull-based progress reporting with cooperative cancellation
//!
//! A [`TranscriptionJob`] runs one pipeline stage per [`Iterator::next`]
//! call and yields a progress percentage after each: once per file after its
//! extraction completes, once after score assembly, and once after the score
//! is finalized. The caller drives the sequence; stopping pulling stops the
//! work, and a [`CancellationToken`] is checked only between yields. A stage
//! already in flight always runs to completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::analysis::result::{Part, PartFailure, Score, ScoreMetadata};
use crate::config::TranscriptionConfig;
use crate::error::TranscriptionError;
use crate::io::sample_buffer::SampleBuffer;
use crate::transcribe_file;

/// Attribution string written into assembled score metadata
const COMPOSER: &str = "pitchscribe";

/// Shared flag for cancelling a job between stages
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a fresh, uncancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; takes effect at the next suspension point
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// True once cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// The pipeline stage a progress value was emitted after
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressStage {
    /// The file at this input index has been transcribed
    PartTranscribed(usize),
    /// All parts have been collected into a score
    ScoreAssembled,
    /// The score is finalized and available via
    /// [`TranscriptionJob::into_score`]
    Finalized,
}

/// A progress update emitted at a suspension point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Completed fraction of the job, 0..=100
    pub percent: u8,
    /// Stage that just completed
    pub stage: ProgressStage,
}

/// A multi-file transcription driven one stage at a time
///
/// Created with the input buffers and a validated configuration; each
/// `next()` transcribes one file (or performs assembly/finalization) and
/// yields the resulting [`Progress`]. Per-file failures do not abort the
/// job: the failed slot becomes an empty part and the failure is recorded in
/// the score metadata.
pub struct TranscriptionJob<'a> {
    buffers: &'a [SampleBuffer],
    config: &'a TranscriptionConfig,
    token: CancellationToken,
    title: Option<String>,
    parts: Vec<Part>,
    failures: Vec<PartFailure>,
    step: usize,
    score: Option<Score>,
}

impl<'a> TranscriptionJob<'a> {
    /// Create a job over the given buffers
    ///
    /// # Errors
    ///
    /// Returns `TranscriptionError::InvalidInput` if the configuration is
    /// invalid; validation happens once, up front.
    pub fn new(
        buffers: &'a [SampleBuffer],
        config: &'a TranscriptionConfig,
    ) -> Result<Self, TranscriptionError> {
        config.validate()?;
        Ok(Self {
            buffers,
            config,
            token: CancellationToken::new(),
            title: None,
            parts: Vec::with_capacity(buffers.len()),
            failures: Vec::new(),
            step: 0,
            score: None,
        })
    }

    /// Set the score title (typically the first input's label)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// A token that cancels this job at its next suspension point
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Total number of progress steps: one per file plus assembly and
    /// finalization
    pub fn max_progress(&self) -> usize {
        self.buffers.len() + 2
    }

    /// The finalized score, if the job ran to completion
    pub fn into_score(self) -> Option<Score> {
        self.score
    }

    fn percent(&self, step: usize) -> u8 {
        (step * 100 / self.max_progress()) as u8
    }
}

impl Iterator for TranscriptionJob<'_> {
    type Item = Progress;

    fn next(&mut self) -> Option<Progress> {
        if self.token.is_cancelled() {
            log::debug!("Transcription job cancelled at step {}", self.step);
            return None;
        }

        let n_files = self.buffers.len();

        if self.step < n_files {
            let index = self.step;
            match transcribe_file(&self.buffers[index], self.config) {
                Ok(part) => self.parts.push(part),
                Err(e) => {
                    log::warn!("Input {} failed to transcribe: {}", index, e);
                    self.parts.push(Part::default());
                    self.failures.push(PartFailure {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
            self.step += 1;
            Some(Progress {
                percent: self.percent(self.step),
                stage: ProgressStage::PartTranscribed(index),
            })
        } else if self.step == n_files {
            self.score = Some(Score {
                parts: std::mem::take(&mut self.parts),
                metadata: ScoreMetadata {
                    title: self.title.clone(),
                    composer: Some(COMPOSER.to_string()),
                    failures: std::mem::take(&mut self.failures),
                },
            });
            self.step += 1;
            Some(Progress {
                percent: self.percent(self.step),
                stage: ProgressStage::ScoreAssembled,
            })
        } else if self.step == n_files + 1 {
            self.step += 1;
            Some(Progress {
                percent: self.percent(self.step),
                stage: ProgressStage::Finalized,
            })
        } else {
            None
        }
    }
}
