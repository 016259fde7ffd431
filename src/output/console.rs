//! Console narration
//!
//! Progress and status lines go to stdout; warnings and errors go to
//! stderr. Verbose details also go to stderr so stdout stays a clean log.

use crate::output::Verbosity;
use colored::Colorize;
use std::fmt::Display;

/// Console reporter honoring the configured verbosity
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    verbosity: Verbosity,
}

impl Console {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Console that prints only warnings and errors
    pub fn quiet() -> Self {
        Self::new(Verbosity::Quiet)
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Progress or status line on stdout
    pub fn info(&self, message: impl Display) {
        if self.verbosity != Verbosity::Quiet {
            println!("{}", message);
        }
    }

    /// Highlighted success line on stdout
    pub fn success(&self, message: impl Display) {
        if self.verbosity != Verbosity::Quiet {
            println!("{}", message.to_string().green());
        }
    }

    /// Extra diagnostics on stderr, verbose mode only
    pub fn detail(&self, message: impl Display) {
        if self.verbosity == Verbosity::Verbose {
            eprintln!("{}", message.to_string().dimmed());
        }
    }

    /// Warning on stderr
    pub fn warn(&self, message: impl Display) {
        eprintln!("{} {}", "Warning:".yellow().bold(), message);
    }

    /// Error on stderr
    pub fn error(&self, message: impl Display) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_default_is_normal() {
        assert_eq!(Console::default().verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_console_quiet() {
        let console = Console::quiet();
        assert_eq!(console.verbosity(), Verbosity::Quiet);
        console.info("hidden");
        console.success("hidden");
        console.detail("hidden");
    }
}
