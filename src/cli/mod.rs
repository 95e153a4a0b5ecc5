//! CLI layer for the cascade-merge binary

mod cascade;
mod context;
mod style;

pub use cascade::{CascadeArgs, run_cascade};

use anstream::{eprintln, println};
use async_trait::async_trait;
use cascade_merge::progress::ProgressCallback;
use cascade_merge::workflow::error_command;
use style::Stylize;

/// Prints diagnostic lines to stdout
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}

/// Mark the step failed
///
/// The `::error::` command goes to stdout unstyled so the runner can parse it;
/// a styled copy goes to stderr for terminal use.
pub fn report_failure(message: &str) {
    println!("{}", error_command(message));
    eprintln!("{} {}", "error:".error(), message);
}
