//! Shared test doubles for orchestrator and session tests

use async_trait::async_trait;
use prompt_tapestry::{AppError, ImageGenerator, ImagePayload, SlotError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted outcome for one slot, keyed by the variant index parsed from
/// the prompt suffix.
#[derive(Clone)]
#[allow(dead_code)]
pub enum SlotScript {
    Succeed,
    SucceedAfter(Duration),
    Fail(SlotError),
}

/// Test double that settles each slot according to its script, counting
/// every attempted call.
pub struct ScriptedGenerator {
    scripts: Vec<SlotScript>,
    calls: AtomicUsize,
    fail_preflight: bool,
}

#[allow(dead_code)]
impl ScriptedGenerator {
    pub fn new(scripts: Vec<SlotScript>) -> Self {
        Self {
            scripts,
            calls: AtomicUsize::new(0),
            fail_preflight: false,
        }
    }

    /// A generator whose pre-flight check fails, as with a missing credential
    pub fn failing_preflight() -> Self {
        Self {
            scripts: Vec::new(),
            calls: AtomicUsize::new(0),
            fail_preflight: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payload_for(index: usize) -> ImagePayload {
        ImagePayload::from_bytes(format!("image-{}", index).as_bytes())
    }
}

/// Recover the slot index from a derived prompt variant suffix
pub fn variant_index(prompt: &str) -> usize {
    prompt
        .rsplit("variation ")
        .next()
        .and_then(|n| n.trim().parse::<usize>().ok())
        .map(|n| n - 1)
        .unwrap_or(0)
}

#[async_trait]
impl ImageGenerator for ScriptedGenerator {
    fn preflight(&self) -> prompt_tapestry::Result<()> {
        if self.fail_preflight {
            return Err(AppError::MissingApiKey);
        }
        Ok(())
    }

    async fn generate(&self, prompt_variant: &str) -> Result<ImagePayload, SlotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let index = variant_index(prompt_variant);

        match self
            .scripts
            .get(index)
            .cloned()
            .unwrap_or(SlotScript::Succeed)
        {
            SlotScript::Succeed => Ok(Self::payload_for(index)),
            SlotScript::SucceedAfter(delay) => {
                tokio::time::sleep(delay).await;
                Ok(Self::payload_for(index))
            }
            SlotScript::Fail(error) => Err(error),
        }
    }
}
