//! Fan-out orchestration module - four concurrent slots per submission

pub mod fanout;

pub use fanout::{prompt_variant, prompt_variants, Orchestrator, SLOT_COUNT};
