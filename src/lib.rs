//! Prompt Tapestry
//!
//! A fan-out client for generative image APIs: one prompt goes in, four
//! independently generated variations come back, each reported as it
//! settles so a caller can render partial results without waiting for the
//! slowest slot.

pub mod client;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod prompt;
pub mod response;
pub mod session;

pub use client::{HttpGenerationClient, ImageGenerator, ImagePayload};
pub use error::{AppError, Result, SlotError};
pub use orchestrator::{Orchestrator, SLOT_COUNT};
pub use session::{SessionState, SlotState, SlotStatus};
