//! Stream accumulator: folds a fragment stream into the transcript.
//!
//! Each send operation runs one instance of the state machine
//! `Idle -> Sending -> Streaming -> {Completed | Failed}`. The placeholder
//! entry is inserted before the first fragment is awaited; fragments are
//! folded strictly in delivery order; a failure at any point removes the
//! in-progress entry entirely. There is no cancellation primitive --
//! concurrent sends are prevented by the caller, not by this machine.

use futures_util::StreamExt;
use uuid::Uuid;

use clara_types::error::SendError;
use clara_types::llm::StreamEvent;

use crate::llm::EventStream;

use super::transcript::Transcript;

/// Phase of a single send operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPhase {
    Idle,
    /// Placeholder inserted, no fragment received yet.
    Sending,
    /// At least one fragment has been folded.
    Streaming,
    Completed,
    Failed,
}

/// One observable step of the fold, returned from [`StreamAccumulator::step`].
#[derive(Debug)]
pub enum FoldStep {
    /// A fragment was appended to the in-progress entry.
    Delta(String),
    /// The stream ended normally; the entry is finalized with `text`.
    Completed { entry_id: Uuid, text: String },
    /// The stream failed; the in-progress entry was removed.
    Failed { error: SendError },
}

/// Folds an [`EventStream`] into a [`Transcript`], one fragment per step.
///
/// The caller drives the fold by awaiting [`step`] until it returns `None`,
/// interleaving its own rendering between steps. `Completed` and `Failed`
/// are terminal; a new send starts a fresh accumulator.
///
/// [`step`]: StreamAccumulator::step
pub struct StreamAccumulator {
    stream: EventStream,
    entry_id: Uuid,
    phase: SendPhase,
    collected: String,
}

impl StreamAccumulator {
    /// Insert the in-progress placeholder and take ownership of the stream.
    ///
    /// The transcript snapshot containing the empty placeholder is
    /// published before this returns, ahead of any fragment.
    pub fn begin(transcript: &mut Transcript, stream: EventStream) -> Self {
        let entry_id = transcript.begin_assistant();
        Self {
            stream,
            entry_id,
            phase: SendPhase::Sending,
            collected: String::new(),
        }
    }

    pub fn phase(&self) -> SendPhase {
        self.phase
    }

    /// Id of the in-progress entry this accumulator owns.
    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    /// Await the next fragment and fold it into the transcript.
    ///
    /// Returns `None` once the operation has reached a terminal phase.
    /// Stream closure without an explicit done marker counts as normal
    /// completion.
    pub async fn step(&mut self, transcript: &mut Transcript) -> Option<FoldStep> {
        if matches!(self.phase, SendPhase::Completed | SendPhase::Failed) {
            return None;
        }

        match self.stream.next().await {
            Some(Ok(StreamEvent::TextDelta { text })) => {
                self.phase = SendPhase::Streaming;
                transcript.append_in_progress(&text);
                self.collected.push_str(&text);
                Some(FoldStep::Delta(text))
            }
            Some(Ok(StreamEvent::Done)) | None => {
                self.phase = SendPhase::Completed;
                transcript.finalize_in_progress();
                Some(FoldStep::Completed {
                    entry_id: self.entry_id,
                    text: std::mem::take(&mut self.collected),
                })
            }
            Some(Err(err)) => {
                self.phase = SendPhase::Failed;
                transcript.remove_in_progress();
                tracing::warn!(error = %err, "reply stream failed; discarding partial entry");
                Some(FoldStep::Failed { error: err.into() })
            }
        }
    }

    /// Drive the fold to its terminal phase without observing the steps.
    ///
    /// Returns the full reply text on normal completion.
    pub async fn run(mut self, transcript: &mut Transcript) -> Result<String, SendError> {
        loop {
            match self.step(transcript).await {
                Some(FoldStep::Delta(_)) => continue,
                Some(FoldStep::Completed { text, .. }) => return Ok(text),
                Some(FoldStep::Failed { error }) => return Err(error),
                None => unreachable!("step returns a terminal FoldStep before None"),
            }
        }
    }
}
