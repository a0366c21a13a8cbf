//! Common traits and types for image generation clients

use async_trait::async_trait;

use crate::error::{Result, SlotError};
use crate::response::base64;

/// One generated image, held as base64-encoded PNG bytes.
///
/// The data URL form is the interchange format with any display surface;
/// the raw bytes are available for writing to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    b64: String,
}

impl ImagePayload {
    pub fn from_base64(b64: String) -> Self {
        Self { b64 }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            b64: base64::encode(data),
        }
    }

    /// Base64-encoded image bytes without any prefix
    pub fn base64(&self) -> &str {
        &self.b64
    }

    /// Directly renderable `data:image/png;base64,...` representation
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.b64)
    }

    /// Decode back to raw image bytes
    pub fn bytes(&self) -> Result<Vec<u8>> {
        base64::decode(&self.b64)
    }
}

/// Trait for image generation clients.
///
/// Implementations perform exactly one outbound call per `generate`
/// invocation and classify any failure into the closed [`SlotError`] set.
/// No retries; retry policy, if any, belongs to a caller.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Check that the client is able to issue requests at all. Failing here
    /// aborts a whole batch before any network call is made.
    fn preflight(&self) -> Result<()> {
        Ok(())
    }

    /// Generate one image for one prompt variant.
    async fn generate(&self, prompt_variant: &str) -> std::result::Result<ImagePayload, SlotError>;
}
