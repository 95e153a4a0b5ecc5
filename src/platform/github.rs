//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::MergeService;
use crate::types::{MergeOutcome, MergeRequest, RepoId};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

#[derive(Serialize)]
struct MergeBody<'a> {
    base: &'a str,
    head: &'a str,
}

#[derive(Deserialize)]
struct MergeCommit {
    sha: String,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

/// GitHub service using the REST merges endpoint
pub struct GitHubService {
    http_client: Client,
    repo: RepoId,
    token: String,
    api_url: Url,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, repo: RepoId, api_url: Url) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("cascade-merge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            repo,
            token: token.to_string(),
            api_url,
        })
    }

    /// URL of `POST /repos/{owner}/{repo}/merges`
    pub fn merges_url(&self) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("API URL cannot be a base: {}", self.api_url)))?
            .pop_if_empty()
            .extend([
                "repos",
                self.repo.owner.as_str(),
                self.repo.repo.as_str(),
                "merges",
            ]);
        Ok(url)
    }
}

#[async_trait]
impl MergeService for GitHubService {
    async fn merge_branches(&self, request: &MergeRequest) -> Result<MergeOutcome> {
        let url = self.merges_url()?;
        debug!(%url, source = %request.source, target = %request.target, "merging branches");

        let response = self
            .http_client
            .post(url.clone())
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&MergeBody {
                base: &request.target,
                head: &request.source,
            })
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        match status {
            StatusCode::CREATED => {
                let commit: MergeCommit =
                    response.json().await.map_err(|source| Error::Network {
                        url: url.to_string(),
                        source,
                    })?;
                debug!(sha = %commit.sha, "merge commit created");
                Ok(MergeOutcome::Merged { sha: commit.sha })
            }
            StatusCode::NO_CONTENT => {
                debug!("nothing to merge");
                Ok(MergeOutcome::UpToDate)
            }
            _ => {
                // GitHub error bodies carry a `message`; fall back to the reason phrase
                let message = response
                    .json::<ApiError>()
                    .await
                    .map(|e| e.message)
                    .unwrap_or_else(|_| {
                        status
                            .canonical_reason()
                            .unwrap_or("unexpected status")
                            .to_string()
                    });
                debug!(status = status.as_u16(), %message, "merge rejected");
                Err(Error::Http {
                    url: url.to_string(),
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    fn repository(&self) -> &RepoId {
        &self.repo
    }
}
