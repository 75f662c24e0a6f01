//! Text phonemization command.

use clap::Args;
use phonik_g2p::{compact, create_phonemizer, G2PEngine};

use super::{get_language, print_verbose};
use crate::Cli;

/// Convert text to phonemes.
#[derive(Args)]
pub struct PhonemizeCommand {
    /// G2P engine (lexicon, rule)
    #[arg(long, default_value = "lexicon")]
    engine: String,

    /// Print the engine-native notation without mapping
    #[arg(long)]
    raw: bool,

    /// Text to phonemize
    #[arg(required = true)]
    text: Vec<String>,
}

impl PhonemizeCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let language = get_language(cli)?;
        let engine: G2PEngine = self.engine.parse()?;
        print_verbose(cli, &format!("language: {language}, engine: {engine:?}"));

        let g2p = create_phonemizer(engine, language)?;
        let text = self.text.join(" ");
        let native = g2p.phonemize(&text)?;
        let phonemes = if self.raw {
            native
        } else {
            compact(&native, language)
        };

        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "language": language,
                    "phonemes": phonemes,
                })
            );
        } else {
            println!("{phonemes}");
        }
        Ok(())
    }
}
