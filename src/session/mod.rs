//! Submission session module - presentation-facing slot state

pub mod state;

pub use state::{SessionState, SlotState, SlotStatus};
