//! Command context built once at process entry
//!
//! Holds the event being handled. Nothing downstream reads the environment;
//! the context is passed in explicitly.

use cascade_merge::config::{ActionInputs, parse_repository};
use cascade_merge::error::{Error, Result};
use cascade_merge::platform::{GitHubService, MergeService};
use cascade_merge::types::EventContext;

/// Shared context for the cascade command
pub struct CommandContext {
    /// The triggering event
    pub event: EventContext,
    /// Repository as given (`owner/repo`); parsed only when a merge is issued
    repository: Option<String>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(event_name: &str, git_ref: &str, repository: Option<&str>) -> Self {
        Self {
            event: EventContext {
                event_name: event_name.to_string(),
                git_ref: git_ref.to_string(),
            },
            repository: repository
                .filter(|r| !r.trim().is_empty())
                .map(String::from),
        }
    }

    /// Create the merge service for this repository
    pub fn merge_service(&self, inputs: &ActionInputs) -> Result<Box<dyn MergeService>> {
        let raw = self.repository.as_deref().ok_or_else(|| {
            Error::InvalidRepository("GITHUB_REPOSITORY is not set".to_string())
        })?;
        let repo = parse_repository(raw)?;

        Ok(Box::new(GitHubService::new(
            &inputs.token,
            repo,
            inputs.api_url.clone(),
        )?))
    }
}
