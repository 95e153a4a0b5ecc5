//! Core types for cascade-merge

/// Prefix GitHub puts in front of branch names in push refs
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Event name that allows the cascade to proceed
pub const PUSH_EVENT: &str = "push";

/// Repository identity (`owner/repo`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// The triggering event, read once at process entry
#[derive(Debug, Clone)]
pub struct EventContext {
    /// Event name (e.g. "push", "`pull_request`")
    pub event_name: String,
    /// Fully qualified ref (e.g. "refs/heads/dev")
    pub git_ref: String,
}

impl EventContext {
    /// Whether this event may start a cascade
    pub fn is_push(&self) -> bool {
        self.event_name == PUSH_EVENT
    }

    /// Branch that received the push
    ///
    /// Refs outside `refs/heads/` are returned unchanged, so tags never match
    /// a configured branch name.
    pub fn trigger_branch(&self) -> &str {
        self.git_ref
            .strip_prefix(BRANCH_REF_PREFIX)
            .unwrap_or(&self.git_ref)
    }
}

/// Operator-configured ordered list of branches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchChain {
    branches: Vec<String>,
}

impl BranchChain {
    /// Build a chain from already-normalized branch names
    pub fn new(branches: Vec<String>) -> Self {
        Self { branches }
    }

    /// Branch names in cascade order
    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    /// Position of the first occurrence of `branch`
    pub fn position(&self, branch: &str) -> Option<usize> {
        self.branches.iter().position(|b| b == branch)
    }

    /// Branches after the first occurrence of `branch`
    ///
    /// `None` when `branch` is not in the chain.
    pub fn active_subchain(&self, branch: &str) -> Option<&[String]> {
        self.position(branch).map(|i| &self.branches[i + 1..])
    }
}

/// One (source, target) pair submitted for merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Branch merged from (the API's `head`)
    pub source: String,
    /// Branch merged into (the API's `base`)
    pub target: String,
}

impl std::fmt::Display for MergeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in to {}", self.source, self.target)
    }
}

/// Result of a successful merge call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A merge commit was created
    Merged {
        /// SHA of the merge commit
        sha: String,
    },
    /// Target already contains source; nothing was merged
    UpToDate,
}

impl std::fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merged { sha } => write!(f, "merged ({sha})"),
            Self::UpToDate => write!(f, "already up to date"),
        }
    }
}
