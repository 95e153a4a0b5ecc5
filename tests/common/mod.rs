//! Shared test helpers

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{MockMergeService, RecordingProgress};

use cascade_merge::config::parse_branch_list;
use cascade_merge::types::{BranchChain, EventContext, RepoId};

/// Repository used throughout the tests
pub fn acme_repo() -> RepoId {
    RepoId {
        owner: "acme".to_string(),
        repo: "widgets".to_string(),
    }
}

/// A push to `branch`
pub fn push_to(branch: &str) -> EventContext {
    EventContext {
        event_name: "push".to_string(),
        git_ref: format!("refs/heads/{branch}"),
    }
}

/// A non-push event on `branch`
pub fn event_on(event_name: &str, branch: &str) -> EventContext {
    EventContext {
        event_name: event_name.to_string(),
        ..push_to(branch)
    }
}

/// Chain from branch names in order
pub fn make_chain(branches: &[&str]) -> BranchChain {
    parse_branch_list(&branches.join("\n"))
}
