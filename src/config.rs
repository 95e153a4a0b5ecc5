//! Action inputs
//!
//! Raw values arrive from flags or `INPUT_*` environment variables and are
//! validated here, after the event has been confirmed to be a push.

use crate::error::{Error, Result};
use crate::types::{BranchChain, RepoId};
use url::Url;

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Validated inputs for one invocation
#[derive(Debug, Clone)]
pub struct ActionInputs {
    /// Credential for the repository host
    pub token: String,
    /// Ordered branch chain
    pub branches: BranchChain,
    /// Base URL of the REST API
    pub api_url: Url,
    /// Announce the merge without calling the API
    pub dry_run: bool,
}

impl ActionInputs {
    /// Validate raw inputs, failing on the first missing one
    ///
    /// `token` is checked before `branches`.
    pub fn from_raw(
        token: Option<&str>,
        branches: Option<&str>,
        api_url: &str,
        dry_run: bool,
    ) -> Result<Self> {
        let token = required_input("token", token)?;
        let branches = parse_branch_list(&required_input("branches", branches)?);
        let api_url = parse_api_url(api_url)?;

        Ok(Self {
            token,
            branches,
            api_url,
            dry_run,
        })
    }
}

/// Read a required input; blank counts as absent
pub fn required_input(name: &str, value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::MissingInput(name.to_string())),
    }
}

/// Split a newline-separated list into a chain, trimming each line
///
/// Blank lines are dropped so a trailing newline in a YAML block scalar does
/// not add an empty branch to the end of the chain.
pub fn parse_branch_list(raw: &str) -> BranchChain {
    BranchChain::new(
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
    )
}

/// Parse `owner/repo`
pub fn parse_repository(raw: &str) -> Result<RepoId> {
    match raw.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok(RepoId {
                owner: owner.to_string(),
                repo: repo.to_string(),
            })
        }
        _ => Err(Error::InvalidRepository(format!(
            "expected 'owner/repo', got '{raw}'"
        ))),
    }
}

/// Parse and validate the REST API base URL
///
/// A blank value means the public API.
pub fn parse_api_url(raw: &str) -> Result<Url> {
    let raw = match raw.trim() {
        "" => DEFAULT_API_URL,
        trimmed => trimmed,
    };
    let url = Url::parse(raw).map_err(|e| Error::Config(format!("invalid API URL '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        _ => Err(Error::Config(format!(
            "API URL must be an http(s) base URL, got '{raw}'"
        ))),
    }
}
