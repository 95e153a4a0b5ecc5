//! Cascade command - merge the next hop of the branch chain

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use anstream::println;
use cascade_merge::cascade::{
    CascadeDecision, CascadeReport, ExecuteOptions, announce_skip, check_event, execute_cascade,
    plan_cascade,
};
use cascade_merge::config::ActionInputs;
use cascade_merge::error::Result;
use cascade_merge::workflow::add_mask_command;
use tracing::debug;

/// Raw values for the cascade command, before validation
#[derive(Debug, Clone, Default)]
pub struct CascadeArgs {
    /// Credential for the repository host
    pub token: Option<String>,
    /// Newline-separated branch list
    pub branches: Option<String>,
    /// Name of the triggering event
    pub event_name: String,
    /// Ref that received the push
    pub git_ref: String,
    /// Repository as owner/repo
    pub repository: Option<String>,
    /// Base URL of the REST API
    pub api_url: String,
    /// Announce the merge without calling the API
    pub dry_run: bool,
    /// Emit `::add-mask::` for the token
    pub mask_secrets: bool,
}

/// Run the cascade command
///
/// Checks run in order: event, inputs, chain membership, repository. The
/// first that fails decides the outcome.
pub async fn run_cascade(args: CascadeArgs) -> Result<CascadeReport> {
    let progress = CliProgress;
    let ctx = CommandContext::new(&args.event_name, &args.git_ref, args.repository.as_deref());
    debug!(event = %ctx.event.event_name, git_ref = %ctx.event.git_ref, "handling event");

    if let Some(reason) = check_event(&ctx.event) {
        return Ok(announce_skip(&reason, &progress).await);
    }

    let inputs = ActionInputs::from_raw(
        args.token.as_deref(),
        args.branches.as_deref(),
        &args.api_url,
        args.dry_run,
    )?;
    if args.mask_secrets {
        println!("{}", add_mask_command(&inputs.token));
    }
    debug!(branches = ?inputs.branches.branches(), "parsed branch chain");

    let decision = plan_cascade(&ctx.event, &inputs.branches);
    if let CascadeDecision::Skip(reason) = &decision {
        return Ok(announce_skip(reason, &progress).await);
    }

    let service = ctx.merge_service(&inputs)?;
    let options = ExecuteOptions {
        dry_run: inputs.dry_run,
    };
    Ok(execute_cascade(&decision, service.as_ref(), &progress, options).await)
}
