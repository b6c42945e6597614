//! The resume review state machine.

pub mod state_machine;

pub use state_machine::{ResumeStateMachine, UpdateResumeStatus};
