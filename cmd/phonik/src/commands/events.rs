//! Synthesis event tracing command.

use clap::Args;
use phonik_synth::{
    Engine, EngineConfig, PhonemeCollector, PhonemeEventMode, SynthError, SynthEvent, SynthStream,
};

use super::{get_language, print_verbose};
use crate::Cli;

/// Run the synthesis engine and collect phoneme events.
///
/// With no text arguments, text is streamed from stdin.
#[derive(Args)]
pub struct EventsCommand {
    /// Phoneme event mode (off, mnemonic, ipa)
    #[arg(long, default_value = "ipa")]
    mode: String,

    /// Print every event record
    #[arg(long)]
    trace: bool,

    /// Collector capacity in bytes
    #[arg(long, default_value_t = 256)]
    capacity: usize,

    /// Text to synthesize (stdin when omitted)
    text: Vec<String>,
}

impl EventsCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let language = get_language(cli)?;
        let mode: PhonemeEventMode = self.mode.parse()?;

        let mut config = EngineConfig::new(language);
        config.phoneme_events = mode;
        let mut engine = Engine::new(config)?;

        let collector = PhonemeCollector::new(self.capacity);
        engine.set_callback(collector.callback());

        let events = if self.text.is_empty() {
            print_verbose(cli, "reading text from stdin");
            stream_events(engine).await?
        } else {
            engine.synthesize(&self.text.join(" "))?.events
        };

        if self.trace {
            for event in &events {
                if cli.json {
                    println!("{}", serde_json::to_string(event)?);
                } else {
                    println!("{event:?}");
                }
            }
        }

        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "language": language,
                    "mode": mode,
                    "phonemes": collector.contents(),
                })
            );
        } else {
            println!("{}", collector.contents());
        }
        Ok(())
    }
}

async fn stream_events(engine: Engine) -> anyhow::Result<Vec<SynthEvent>> {
    let mut stream = engine.synthesize_stream(Box::new(tokio::io::stdin()));
    let mut events = Vec::new();
    loop {
        match stream.next().await {
            Ok(chunk) => events.extend(chunk.events),
            Err(SynthError::Done) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(events)
}
