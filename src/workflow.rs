//! GitHub Actions workflow commands
//!
//! The runner parses these from stdout. See
//! <https://docs.github.com/actions/reference/workflow-commands-for-github-actions>.

/// Escape a command's data section
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// `::error::` command; the runner marks the step failed with this message
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// `::add-mask::` command; hides `secret` in all later log output
pub fn add_mask_command(secret: &str) -> String {
    format!("::add-mask::{}", escape_data(secret))
}
