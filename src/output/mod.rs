//! Output for run results
//!
//! This module provides:
//! - Console narration for humans
//! - Automation output files for subsequent workflow steps

mod automation;
mod console;

pub use automation::{update_pairs, AutomationOutputs};
pub use console::Console;

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

impl Verbosity {
    /// Determine verbosity from CLI flags
    pub fn from_cli(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_cli() {
        assert_eq!(Verbosity::from_cli(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_cli(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_cli(false, true), Verbosity::Quiet);
    }
}
