//! Cascade planning - pure functions deciding the next hop
//!
//! No I/O happens here. The event context and branch chain are passed in and
//! the result says either why nothing happens or which merge to issue.

use crate::types::{BranchChain, EventContext, MergeRequest};

/// Why an invocation does nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The event was not a push
    NotPush {
        /// Name of the event that triggered the run
        event_name: String,
    },
    /// The pushed branch is not part of the chain
    NotInChain {
        /// Branch that received the push
        branch: String,
    },
    /// Fewer than two branches follow the pushed branch
    EndOfChain {
        /// Branch that received the push
        branch: String,
        /// Branches remaining after it (zero or one)
        remaining: Vec<String>,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPush { event_name } => {
                write!(f, "Triggered on non-push event ({event_name}). Exiting.")
            }
            Self::NotInChain { branch } => {
                write!(f, "{branch} does not trigger an automatic merge for this action")
            }
            Self::EndOfChain { branch, remaining } => match remaining.as_slice() {
                [] => write!(f, "{branch} is the last branch in the chain; nothing to merge"),
                [only] => write!(
                    f,
                    "Only {only} follows {branch} in the chain; nothing to merge"
                ),
                _ => write!(f, "{branch} is near the end of the chain; nothing to merge"),
            },
        }
    }
}

/// Outcome of planning one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeDecision {
    /// Nothing to do
    Skip(SkipReason),
    /// Issue exactly one merge
    Merge {
        /// Branches after the pushed branch, in chain order
        active_subchain: Vec<String>,
        /// First remaining branch into the second
        request: MergeRequest,
    },
}

impl CascadeDecision {
    /// The merge to issue, if any
    pub const fn request(&self) -> Option<&MergeRequest> {
        match self {
            Self::Merge { request, .. } => Some(request),
            Self::Skip(_) => None,
        }
    }
}

/// Check the event precondition
///
/// Runs before any input is read, so a non-push run never fails on missing
/// inputs.
pub fn check_event(context: &EventContext) -> Option<SkipReason> {
    (!context.is_push()).then(|| SkipReason::NotPush {
        event_name: context.event_name.clone(),
    })
}

/// Decide the next hop for a push to `context.git_ref` (PURE)
///
/// The merge goes from the first branch after the pushed one into the branch
/// after that. The next hop runs when that merge's own push re-triggers the
/// workflow.
pub fn plan_cascade(context: &EventContext, chain: &BranchChain) -> CascadeDecision {
    if let Some(reason) = check_event(context) {
        return CascadeDecision::Skip(reason);
    }

    let branch = context.trigger_branch();
    let Some(active) = chain.active_subchain(branch) else {
        return CascadeDecision::Skip(SkipReason::NotInChain {
            branch: branch.to_string(),
        });
    };

    match active {
        [source, target, ..] => CascadeDecision::Merge {
            active_subchain: active.to_vec(),
            request: MergeRequest {
                source: source.clone(),
                target: target.clone(),
            },
        },
        _ => CascadeDecision::Skip(SkipReason::EndOfChain {
            branch: branch.to_string(),
            remaining: active.to_vec(),
        }),
    }
}
