//! Utility functions for CLI commands.

use crate::Cli;
use phonik_g2p::Language;

/// Parses the global language flag.
pub fn get_language(cli: &Cli) -> anyhow::Result<Language> {
    Ok(cli.lang.parse::<Language>()?)
}

/// Prints a message when verbose mode is on.
pub fn print_verbose(cli: &Cli, msg: &str) {
    if cli.verbose {
        eprintln!("{msg}");
    }
}
