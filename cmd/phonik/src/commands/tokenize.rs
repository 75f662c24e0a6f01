//! Phoneme tokenization command.

use clap::Args;
use phonik_g2p::Vocab;
use std::fs::File;

use super::print_verbose;
use crate::Cli;

/// Map phonemes to model token ids.
#[derive(Args)]
pub struct TokenizeCommand {
    /// Model config JSON with a vocab section (built-in table when omitted)
    #[arg(long)]
    config: Option<String>,

    /// Phoneme string to tokenize
    #[arg(required = true)]
    phonemes: Vec<String>,
}

impl TokenizeCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let vocab = match &self.config {
            Some(path) => Vocab::from_reader(File::open(path)?)?,
            None => Vocab::default(),
        };
        print_verbose(cli, &format!("vocab size: {}", vocab.len()));

        let tokens = vocab.tokenize(&self.phonemes.join(" "));

        if cli.json {
            println!("{}", serde_json::json!({ "tokens": tokens }));
        } else {
            let ids: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
            println!("{}", ids.join(" "));
        }
        Ok(())
    }
}
