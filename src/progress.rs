//! Progress reporting for the cascade step

use async_trait::async_trait;

/// Receives the step's diagnostic lines
///
/// The binary prints them to stdout; tests record or discard them.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called with one human-readable line
    async fn on_message(&self, message: &str);
}

/// Progress callback that discards everything
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_message(&self, _message: &str) {}
}
