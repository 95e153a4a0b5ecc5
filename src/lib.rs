//! cascade-merge: cascade merges along an ordered chain of branches
//!
//! On a push to a branch in the chain, one merge is issued between the next
//! two branches. The merge's own push re-triggers the workflow, which carries
//! the cascade forward one hop at a time.

pub mod cascade;
pub mod config;
pub mod error;
pub mod platform;
pub mod progress;
pub mod types;
pub mod workflow;

pub use error::{Error, Result};
