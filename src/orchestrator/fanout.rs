//! Fan-out orchestrator: one prompt in, four independent slot results out

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::client::{ImageGenerator, ImagePayload};
use crate::error::{Result, SlotError};

/// Number of concurrent generation attempts per submission
pub const SLOT_COUNT: usize = 4;

/// Derive the prompt variant for one slot. The suffix keeps the four
/// parallel calls from producing near-identical output.
pub fn prompt_variant(base_prompt: &str, index: usize) -> String {
    format!("{} - variation {}", base_prompt, index + 1)
}

/// All four prompt variants in index order
pub fn prompt_variants(base_prompt: &str) -> Vec<String> {
    (0..SLOT_COUNT)
        .map(|index| prompt_variant(base_prompt, index))
        .collect()
}

/// Coordinates exactly four concurrent generation calls and reports each
/// slot's outcome independently of the others.
pub struct Orchestrator {
    generator: Arc<dyn ImageGenerator>,
}

impl Orchestrator {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self { generator }
    }

    /// Run one submission: launch all four generation calls concurrently and
    /// invoke the matching callback exactly once per slot as each settles.
    ///
    /// The caller is responsible for validating `base_prompt` beforehand.
    /// Slot failures never surface through the return value; they are
    /// delivered to `on_slot_failed` and the other slots proceed untouched.
    /// Returns only after every slot has settled. The sole error return is a
    /// pre-flight failure, which fires before any call is issued and before
    /// any callback.
    pub async fn generate_all<S, F>(
        &self,
        base_prompt: &str,
        on_slot_succeeded: S,
        on_slot_failed: F,
    ) -> Result<()>
    where
        S: Fn(ImagePayload, usize),
        F: Fn(SlotError, usize),
    {
        self.generator.preflight()?;

        // All four futures are built before any is awaited, so the calls
        // overlap in flight rather than serializing.
        let attempts = prompt_variants(base_prompt)
            .into_iter()
            .enumerate()
            .map(|(index, variant)| {
                let generator = self.generator.clone();
                let on_slot_succeeded = &on_slot_succeeded;
                let on_slot_failed = &on_slot_failed;
                async move {
                    match generator.generate(&variant).await {
                        Ok(payload) => {
                            debug!(slot = index, "Slot settled with image");
                            on_slot_succeeded(payload, index);
                        }
                        Err(error) => {
                            warn!(slot = index, error = %error, "Slot settled with failure");
                            on_slot_failed(error, index);
                        }
                    }
                }
            })
            .collect::<Vec<_>>();

        // Settle-all join: a failed slot never short-circuits the rest.
        join_all(attempts).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_suffixes_are_index_dependent() {
        let variants = prompt_variants("a cat");
        assert_eq!(variants.len(), SLOT_COUNT);
        for (index, variant) in variants.iter().enumerate() {
            assert_eq!(*variant, format!("a cat - variation {}", index + 1));
        }
    }

    #[test]
    fn test_variant_is_deterministic() {
        assert_eq!(prompt_variant("a cat", 0), prompt_variant("a cat", 0));
        assert_eq!(prompt_variant("a cat", 3), "a cat - variation 4");
    }
}
