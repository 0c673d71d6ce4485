//! Ordered transcript of conversation entries.
//!
//! The transcript is the render-facing output of the chat core: an ordered
//! list of entries, republished as a full snapshot after every mutation so
//! a presentation layer can re-render on each change. Publishing uses a
//! `tokio::sync::watch` channel; a snapshot sent with no subscribers is
//! simply dropped.

use tokio::sync::watch;
use uuid::Uuid;

use clara_types::transcript::TranscriptEntry;

/// Ordered, append-only list of transcript entries.
///
/// Invariant: at most one in-progress assistant entry exists at a time.
/// The in-progress entry is the only entry ever mutated in place, and the
/// only one ever removed (when its stream fails before finalizing).
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    in_progress: Option<Uuid>,
    publisher: watch::Sender<Vec<TranscriptEntry>>,
}

impl Transcript {
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(Vec::new());
        Self {
            entries: Vec::new(),
            in_progress: None,
            publisher,
        }
    }

    /// Subscribe to transcript snapshots. The receiver observes the state
    /// as of the latest mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<TranscriptEntry>> {
        self.publisher.subscribe()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Id of the in-progress assistant entry, if a stream is being folded.
    pub fn in_progress_id(&self) -> Option<Uuid> {
        self.in_progress
    }

    /// Append a finalized user entry.
    pub fn push_user(&mut self, text: impl Into<String>) -> Uuid {
        let entry = TranscriptEntry::user(text);
        let id = entry.id;
        self.entries.push(entry);
        self.publish();
        id
    }

    /// Append a finalized assistant entry (greetings, notices).
    pub fn push_assistant(&mut self, text: impl Into<String>) -> Uuid {
        let entry = TranscriptEntry::assistant(text);
        let id = entry.id;
        self.entries.push(entry);
        self.publish();
        id
    }

    /// Insert the empty in-progress assistant entry.
    ///
    /// Published immediately so the presentation layer observes the
    /// placeholder before any fragment arrives.
    pub fn begin_assistant(&mut self) -> Uuid {
        debug_assert!(self.in_progress.is_none(), "only one in-progress entry");
        let entry = TranscriptEntry::assistant_placeholder();
        let id = entry.id;
        self.entries.push(entry);
        self.in_progress = Some(id);
        self.publish();
        id
    }

    /// Append fragment text to the in-progress entry, in delivery order.
    pub fn append_in_progress(&mut self, delta: &str) {
        let Some(id) = self.in_progress else { return };
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.text.push_str(delta);
            self.publish();
        }
    }

    /// Finalize the in-progress entry with whatever text accumulated.
    pub fn finalize_in_progress(&mut self) {
        self.in_progress = None;
    }

    /// Remove the in-progress entry entirely, partial text included.
    pub fn remove_in_progress(&mut self) {
        let Some(id) = self.in_progress.take() else {
            return;
        };
        self.entries.retain(|e| e.id != id);
        self.publish();
    }

    fn publish(&self) {
        self.publisher.send_replace(self.entries.clone());
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
