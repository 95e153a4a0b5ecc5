//! Terminal styling helpers
//!
//! Colors are dropped when the stream is not a terminal, which is the case on
//! CI runners.

use owo_colors::{OwoColorize, Stream};

/// Semantic styles for user-facing output
pub trait Stylize {
    /// Red, bold: failures
    fn error(&self) -> String;
}

impl<T: std::fmt::Display> Stylize for T {
    fn error(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.red().bold().to_string())
            .to_string()
    }
}
