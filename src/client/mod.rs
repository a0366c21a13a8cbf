//! Generation client module - one remote call per invocation

pub mod http_client;
pub mod traits;

pub use http_client::HttpGenerationClient;
pub use traits::{ImageGenerator, ImagePayload};
