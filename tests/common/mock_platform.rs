//! Mock merge service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use cascade_merge::error::{Error, Result};
use cascade_merge::platform::MergeService;
use cascade_merge::progress::ProgressCallback;
use cascade_merge::types::{MergeOutcome, MergeRequest, RepoId};
use std::collections::HashMap;
use std::sync::Mutex;

/// Simple mock merge service for testing
///
/// Features:
/// - Call tracking for verification
/// - Configurable outcome per (source, target) pair
/// - Error injection for failure path testing
pub struct MockMergeService {
    repo: RepoId,
    merge_responses: Mutex<HashMap<(String, String), MergeOutcome>>,
    merge_calls: Mutex<Vec<MergeRequest>>,
    error_on_merge: Mutex<Option<(u16, String)>>,
}

impl MockMergeService {
    /// Create a new mock for the given repository
    pub fn with_repo(repo: RepoId) -> Self {
        Self {
            repo,
            merge_responses: Mutex::new(HashMap::new()),
            merge_calls: Mutex::new(Vec::new()),
            error_on_merge: Mutex::new(None),
        }
    }

    /// Make `merge_branches` return an HTTP error
    pub fn fail_merge(&self, status: u16, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some((status, msg.to_string()));
    }

    /// Set the outcome for merging `source` into `target`
    pub fn set_merge_response(&self, source: &str, target: &str, outcome: MergeOutcome) {
        self.merge_responses
            .lock()
            .unwrap()
            .insert((source.to_string(), target.to_string()), outcome);
    }

    /// Get all `merge_branches` calls
    pub fn get_merge_calls(&self) -> Vec<MergeRequest> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Assert that `merge_branches` was called once with `source` into `target`
    pub fn assert_merged_once(&self, source: &str, target: &str) {
        let calls = self.get_merge_calls();
        assert_eq!(
            calls,
            vec![MergeRequest {
                source: source.to_string(),
                target: target.to_string(),
            }],
            "Expected a single merge_branches({source} -> {target}) but got: {calls:?}"
        );
    }

    /// Assert that `merge_branches` was never called
    pub fn assert_no_merge(&self) {
        let calls = self.get_merge_calls();
        assert!(
            calls.is_empty(),
            "Expected no merge_branches calls but got: {calls:?}"
        );
    }
}

#[async_trait]
impl MergeService for MockMergeService {
    async fn merge_branches(&self, request: &MergeRequest) -> Result<MergeOutcome> {
        self.merge_calls.lock().unwrap().push(request.clone());

        if let Some((status, message)) = self.error_on_merge.lock().unwrap().clone() {
            return Err(Error::Http {
                url: format!(
                    "https://api.github.com/repos/{}/{}/merges",
                    self.repo.owner, self.repo.repo
                ),
                status,
                message,
            });
        }

        let key = (request.source.clone(), request.target.clone());
        Ok(self
            .merge_responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| MergeOutcome::Merged {
                sha: format!("merged_{}_into_{}", request.source, request.target),
            }))
    }

    fn repository(&self) -> &RepoId {
        &self.repo
    }
}

/// Progress callback that records every line
#[derive(Default)]
pub struct RecordingProgress {
    messages: Mutex<Vec<String>>,
}

impl RecordingProgress {
    /// Lines received so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
