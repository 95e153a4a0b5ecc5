//! Cascade execution - effectful operations
//!
//! Takes a `CascadeDecision` from the planner and performs the single merge
//! call. A failed merge is returned as a report value, never as an error.

use crate::cascade::plan::{CascadeDecision, SkipReason};
use crate::platform::MergeService;
use crate::progress::ProgressCallback;
use crate::types::{MergeOutcome, MergeRequest};
use tracing::{error, info};

/// Options for executing a cascade decision
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Announce the merge without calling the API
    pub dry_run: bool,
}

/// Result of one invocation of the cascade step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeReport {
    /// Nothing to do
    Skipped(SkipReason),
    /// Merge announced but not performed
    DryRun {
        /// The merge that would have been issued
        request: MergeRequest,
    },
    /// The host accepted the merge
    Merged {
        /// The merge that was issued
        request: MergeRequest,
        /// What the host did
        outcome: MergeOutcome,
    },
    /// The host rejected the merge
    Failed {
        /// The merge that was issued
        request: MergeRequest,
        /// Underlying error text
        reason: String,
    },
}

impl CascadeReport {
    /// Whether the process should exit successfully
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    /// Operator-facing failure message, naming both branches
    pub fn failure_message(&self) -> Option<String> {
        match self {
            Self::Failed { request, .. } => Some(format!("Unable to merge {request}")),
            _ => None,
        }
    }
}

/// Report a no-op and build its report
pub async fn announce_skip(reason: &SkipReason, progress: &dyn ProgressCallback) -> CascadeReport {
    if let SkipReason::EndOfChain { remaining, .. } = reason {
        progress.on_message(&format_subchain(remaining)).await;
    }
    info!(%reason, "skipping cascade");
    progress.on_message(&reason.to_string()).await;
    CascadeReport::Skipped(reason.clone())
}

/// Execute a cascade decision (EFFECTFUL)
///
/// # Arguments
/// * `decision` - Output of `plan_cascade`
/// * `platform` - Host service for the merge call
/// * `progress` - Receives diagnostic lines
/// * `options` - Execution options
pub async fn execute_cascade(
    decision: &CascadeDecision,
    platform: &dyn MergeService,
    progress: &dyn ProgressCallback,
    options: ExecuteOptions,
) -> CascadeReport {
    let (active_subchain, request) = match decision {
        CascadeDecision::Skip(reason) => return announce_skip(reason, progress).await,
        CascadeDecision::Merge {
            active_subchain,
            request,
        } => (active_subchain, request),
    };

    progress.on_message(&format_subchain(active_subchain)).await;
    progress.on_message(&format!("Merging {request}")).await;

    if options.dry_run {
        progress.on_message("Dry run: merge not performed").await;
        return CascadeReport::DryRun {
            request: request.clone(),
        };
    }

    match platform.merge_branches(request).await {
        Ok(outcome) => {
            info!(repository = %platform.repository(), %request, %outcome, "merge complete");
            if outcome == MergeOutcome::UpToDate {
                progress
                    .on_message(&format!("{} already contains {}", request.target, request.source))
                    .await;
            }
            CascadeReport::Merged {
                request: request.clone(),
                outcome,
            }
        }
        Err(e) => {
            error!(repository = %platform.repository(), %request, error = %e, "merge failed");
            progress.on_message(&e.to_string()).await;
            CascadeReport::Failed {
                request: request.clone(),
                reason: e.to_string(),
            }
        }
    }
}

fn format_subchain(branches: &[String]) -> String {
    format!("Active branches: {branches:?}")
}
