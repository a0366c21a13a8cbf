//! Per-submission slot state and update routing
//!
//! Holds what a rendering surface needs: four index-addressed slots that
//! each move `loading -> loaded` or `loading -> error` exactly once, plus a
//! single top-level error for validation and setup failures. Every update
//! is tagged with the submission id it belongs to; updates from a
//! superseded submission are discarded instead of overwriting newer slots.

use parking_lot::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{AppError, Result, SlotError};
use crate::orchestrator::{Orchestrator, SLOT_COUNT};

/// Rendering status of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Loading,
    Loaded,
    Error,
}

/// State of one slot as exposed to a rendering surface
#[derive(Debug, Clone)]
pub struct SlotState {
    /// Data URL of the finished image, when loaded
    pub image: Option<String>,
    pub status: SlotStatus,
    pub error: Option<String>,
}

impl SlotState {
    fn loading() -> Self {
        Self {
            image: None,
            status: SlotStatus::Loading,
            error: None,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    submission: Option<Uuid>,
    slots: Vec<SlotState>,
    error: Option<String>,
    loading: bool,
}

/// Shared session state driving one submission at a time.
///
/// A new submission replaces the previous one's slots atomically; in-flight
/// calls from the replaced submission are not cancelled, their late results
/// are simply dropped on arrival.
#[derive(Default)]
pub struct SessionState {
    inner: RwLock<Inner>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the prompt and run one full submission against the
    /// orchestrator, routing per-slot results into this state.
    pub async fn submit(&self, orchestrator: &Orchestrator, prompt: &str) -> Result<()> {
        let base_prompt = prompt.trim();
        if base_prompt.is_empty() {
            let err = AppError::EmptyPrompt;
            self.inner.write().error = Some(err.to_string());
            return Err(err);
        }

        let submission = self.begin_submission();
        info!(%submission, "Starting submission");

        let result = orchestrator
            .generate_all(
                base_prompt,
                |payload, index| self.record_success(submission, index, payload.data_url()),
                |error, index| self.record_failure(submission, index, &error),
            )
            .await;

        match result {
            Ok(()) => {
                self.finish(submission);
                Ok(())
            }
            Err(e) => {
                self.fail_submission(submission, e.to_string());
                Err(e)
            }
        }
    }

    /// Start a new submission: all four slots reset to `Loading` in one
    /// write, before any network call is issued.
    pub fn begin_submission(&self) -> Uuid {
        let submission = Uuid::new_v4();
        let mut inner = self.inner.write();
        inner.submission = Some(submission);
        inner.slots = (0..SLOT_COUNT).map(|_| SlotState::loading()).collect();
        inner.error = None;
        inner.loading = true;
        submission
    }

    /// Record a finished image for one slot of the given submission
    pub fn record_success(&self, submission: Uuid, index: usize, image: String) {
        let mut inner = self.inner.write();
        if inner.submission != Some(submission) {
            debug!(%submission, slot = index, "Dropping stale slot result");
            return;
        }
        if let Some(slot) = inner.slots.get_mut(index) {
            if slot.status != SlotStatus::Loading {
                return;
            }
            slot.image = Some(image);
            slot.status = SlotStatus::Loaded;
            slot.error = None;
            info!(slot = index, "Image ready");
        }
    }

    /// Record a classified failure for one slot of the given submission
    pub fn record_failure(&self, submission: Uuid, index: usize, error: &SlotError) {
        let mut inner = self.inner.write();
        if inner.submission != Some(submission) {
            debug!(%submission, slot = index, "Dropping stale slot failure");
            return;
        }
        if let Some(slot) = inner.slots.get_mut(index) {
            if slot.status != SlotStatus::Loading {
                return;
            }
            slot.image = None;
            slot.status = SlotStatus::Error;
            slot.error = Some(error.to_string());
            warn!(slot = index, error = %error, "Slot failed");
        }
    }

    /// A setup failure clears all slot state rather than leaving slots stuck
    /// in `Loading`.
    fn fail_submission(&self, submission: Uuid, message: String) {
        let mut inner = self.inner.write();
        if inner.submission != Some(submission) {
            return;
        }
        inner.slots.clear();
        inner.error = Some(message);
        inner.loading = false;
    }

    fn finish(&self, submission: Uuid) {
        let mut inner = self.inner.write();
        if inner.submission == Some(submission) {
            inner.loading = false;
        }
    }

    /// Snapshot of the current slots
    pub fn slots(&self) -> Vec<SlotState> {
        self.inner.read().slots.clone()
    }

    /// Current top-level error, if any
    pub fn error(&self) -> Option<String> {
        self.inner.read().error.clone()
    }

    /// Whether a submission is still in flight
    pub fn is_loading(&self) -> bool {
        self.inner.read().loading
    }
}
