//! Cascade engine
//!
//! Two-phase pattern:
//! 1. Plan - decide skip or merge from the event and chain (pure, testable)
//! 2. Execute - perform the merge and report (effectful)

mod execute;
mod plan;

pub use execute::{CascadeReport, ExecuteOptions, announce_skip, execute_cascade};
pub use plan::{CascadeDecision, SkipReason, check_event, plan_cascade};
