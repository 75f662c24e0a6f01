//! phonik CLI - phonemization and synthesis-event tooling.

use clap::{Parser, Subcommand};

mod commands;

use commands::{EventsCommand, PhonemizeCommand, TokenizeCommand};

/// phonik CLI.
///
/// This tool exposes the phonik library from the command line:
///   - Text phonemization (G2P engines, dialect mapping)
///   - Synthesis event tracing and phoneme collection
///   - Phoneme tokenization against a model vocabulary
#[derive(Parser)]
#[command(name = "phonik")]
#[command(about = "Phonemization and synthesis-event CLI")]
#[command(version)]
pub struct Cli {
    /// Language dialect (en-us, en-gb)
    #[arg(short = 'l', long, global = true, default_value = "en-us")]
    pub lang: String,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert text to phonemes
    Phonemize(PhonemizeCommand),
    /// Run the synthesis engine and collect phoneme events
    Events(EventsCommand),
    /// Map phonemes to model token ids
    Tokenize(TokenizeCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    match &cli.command {
        Commands::Phonemize(cmd) => cmd.run(&cli),
        Commands::Events(cmd) => cmd.run(&cli).await,
        Commands::Tokenize(cmd) => cmd.run(&cli),
    }
}
