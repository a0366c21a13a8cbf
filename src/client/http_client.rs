//! HTTP generation client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::client::traits::{ImageGenerator, ImagePayload};
use crate::config::ApiConfig;
use crate::error::{AppError, Result, SlotError};

/// HTTP-based image generation client.
///
/// Wraps a single remote image-generation endpoint; each `generate` call is
/// one POST, no retries. Construction fails fast when the credential is
/// absent so a misconfigured process never issues a request.
pub struct HttpGenerationClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

/// Request body for the generation endpoint
#[derive(Debug, Serialize)]
struct ApiGenerateRequest<'a> {
    prompt: &'a str,
    number_of_images: u32,
    output_format: &'a str,
    aspect_ratio: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

/// Response from the generation endpoint
#[derive(Debug, Deserialize)]
struct ApiGenerateResponse {
    #[serde(default)]
    images: Vec<ApiImageData>,
}

#[derive(Debug, Deserialize)]
struct ApiImageData {
    #[serde(default, alias = "image_bytes")]
    b64_json: Option<String>,
}

impl HttpGenerationClient {
    /// Create a new client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Setup(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/v1/images/generations", self.base_url)
    }
}

#[async_trait]
impl ImageGenerator for HttpGenerationClient {
    fn preflight(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::MissingApiKey);
        }
        Ok(())
    }

    async fn generate(&self, prompt_variant: &str) -> std::result::Result<ImagePayload, SlotError> {
        let request = ApiGenerateRequest {
            prompt: prompt_variant,
            number_of_images: 1,
            output_format: "png",
            aspect_ratio: "1:1",
            model: Some(&self.model),
        };

        debug!(url = %self.generate_url(), "Sending generate request");

        let response = match self
            .client
            .post(self.generate_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Generate request failed in transport");
                return Err(SlotError::from_transport(&e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Generate request rejected");
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(SlotError::AuthFailure);
            }
            if status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::GATEWAY_TIMEOUT {
                return Err(SlotError::Timeout);
            }
            return Err(SlotError::from_message(&body));
        }

        let api_response: ApiGenerateResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Failed to parse generate response");
                return Err(SlotError::Generic);
            }
        };

        // Zero image records is a failure, not a success with no results.
        let image = api_response
            .images
            .into_iter()
            .find_map(|img| img.b64_json)
            .ok_or(SlotError::EmptyResult)?;

        Ok(ImagePayload::from_base64(image))
    }
}
