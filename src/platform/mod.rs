//! Repository host services
//!
//! The cascade only needs one operation from the host: merge one branch into
//! another.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{MergeOutcome, MergeRequest, RepoId};
use async_trait::async_trait;

/// Service trait for branch merges
///
/// Abstracts the host API so the cascade step can be exercised against a mock.
#[async_trait]
pub trait MergeService: Send + Sync {
    /// Merge `request.source` into `request.target`
    ///
    /// Returns `MergeOutcome::UpToDate` when there is nothing to merge.
    async fn merge_branches(&self, request: &MergeRequest) -> Result<MergeOutcome>;

    /// Repository this service operates on
    fn repository(&self) -> &RepoId;
}
