//! Reference synthesis engine.
//!
//! The engine drives a G2P phonemizer over clause-segmented text and
//! reports progress to the registered callback as sentinel-terminated
//! event batches. Audio is synthetic silence sized from the phone
//! count; there is no vocoder.

use crate::{
    dispatch, split_clauses, CallbackResult, Clause, EventKind, PhonemeEventMode, SynthCallback,
    SynthError, SynthEvent, DEFAULT_MAX_CLAUSE_CHARS,
};
use phonik_g2p::{create_phonemizer, G2PEngine, Language, Phone, Phonemizer};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Nominal duration of a single phone in the synthetic audio.
const PHONE_DURATION: Duration = Duration::from_millis(80);

fn default_pause() -> Duration {
    Duration::from_millis(200)
}

fn default_max_clause_chars() -> usize {
    DEFAULT_MAX_CLAUSE_CHARS
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dialect to synthesize.
    pub language: Language,
    /// G2P engine to phonemize with.
    #[serde(default)]
    pub engine: G2PEngine,
    /// Which phoneme events to emit.
    #[serde(default)]
    pub phoneme_events: PhonemeEventMode,
    /// Long-pause duration at clause ends.
    #[serde(default = "default_pause")]
    pub pause: Duration,
    /// Forced clause split limit.
    #[serde(default = "default_max_clause_chars")]
    pub max_clause_chars: usize,
}

impl EngineConfig {
    /// Creates a config with defaults for the given dialect.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            engine: G2PEngine::default(),
            phoneme_events: PhonemeEventMode::default(),
            pause: default_pause(),
            max_clause_chars: default_max_clause_chars(),
        }
    }
}

/// One delivered batch: audio samples plus its event records.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthChunk {
    pub samples: Vec<i16>,
    pub events: Vec<SynthEvent>,
}

/// Everything a synthesize call produced.
#[derive(Debug, Clone, Default)]
pub struct SynthOutput {
    pub samples: Vec<i16>,
    pub events: Vec<SynthEvent>,
}

/// Reference synthesis engine.
pub struct Engine {
    language: Language,
    phonemizer: Box<dyn Phonemizer>,
    callback: Option<SynthCallback>,
    mode: PhonemeEventMode,
    pause: Duration,
    max_clause_chars: usize,
}

impl Engine {
    /// Output sample rate of the synthetic audio.
    pub const SAMPLE_RATE: u32 = 22_050;

    /// Builds an engine from the config.
    pub fn new(config: EngineConfig) -> Result<Self, SynthError> {
        let phonemizer = create_phonemizer(config.engine, config.language)?;
        Ok(Self {
            language: config.language,
            phonemizer,
            callback: None,
            mode: config.phoneme_events,
            pause: config.pause,
            max_clause_chars: config.max_clause_chars,
        })
    }

    /// The engine's dialect.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The active phoneme event mode.
    pub fn phoneme_events(&self) -> PhonemeEventMode {
        self.mode
    }

    pub(crate) fn max_clause_chars(&self) -> usize {
        self.max_clause_chars
    }

    /// Switches the phoneme event mode.
    pub fn set_phoneme_events(&mut self, mode: PhonemeEventMode) {
        self.mode = mode;
    }

    /// Registers the synthesis callback.
    pub fn set_callback(&mut self, callback: SynthCallback) {
        self.callback = Some(callback);
    }

    /// Synthesizes text, delivering batches to the callback.
    ///
    /// Each clause produces one batch; a final batch carries the
    /// [`EventKind::End`] event. An [`CallbackResult::Abort`] from the
    /// callback stops synthesis before the next batch; the partial
    /// output is still returned.
    pub fn synthesize(&mut self, text: &str) -> Result<SynthOutput, SynthError> {
        let clauses = split_clauses(text, self.max_clause_chars);
        debug!(clauses = clauses.len(), mode = ?self.mode, "synthesizing");

        let mut out = SynthOutput::default();
        let mut audio_pos = Duration::ZERO;
        for clause in &clauses {
            let Some(chunk) = self.clause_chunk(clause, 0, &mut audio_pos)? else {
                continue;
            };
            let result = self.deliver(&chunk);
            out.samples.extend_from_slice(&chunk.samples);
            out.events.extend(chunk.events);
            if result == CallbackResult::Abort {
                debug!("synthesis aborted by callback");
                return Ok(out);
            }
        }

        let end = self.end_chunk(text.len(), audio_pos);
        self.deliver(&end);
        out.events.extend(end.events);
        Ok(out)
    }

    /// Builds the batch for one clause, or None for a clause with no
    /// phonemizable words.
    pub(crate) fn clause_chunk(
        &mut self,
        clause: &Clause,
        base: usize,
        audio_pos: &mut Duration,
    ) -> Result<Option<SynthChunk>, SynthError> {
        let words = words_with_offsets(&clause.text);
        if words.is_empty() {
            return Ok(None);
        }

        let clause_pos = base + clause.offset;
        let mut events = vec![SynthEvent::new(EventKind::Sentence, clause_pos, *audio_pos)];
        let mut samples = Vec::new();

        for (off, word) in words {
            let pos = clause_pos + off;
            events.push(SynthEvent::new(
                EventKind::Word {
                    length: word.chars().count(),
                },
                pos,
                *audio_pos,
            ));
            for phone in self.phonemizer.phonemize_word(word)? {
                self.push_phoneme(&mut events, &phone, pos, *audio_pos);
                emit_silence(&mut samples, PHONE_DURATION, audio_pos);
            }
        }

        // Clause-final pauses: one long, one short
        let end_pos = clause_pos + clause.text.len();
        for (phone, duration) in [
            (Phone::pause_long(), self.pause),
            (Phone::pause_short(), self.pause / 2),
        ] {
            self.push_phoneme(&mut events, &phone, end_pos, *audio_pos);
            emit_silence(&mut samples, duration, audio_pos);
        }

        events.push(SynthEvent::terminator());
        Ok(Some(SynthChunk { samples, events }))
    }

    /// The final batch carrying the end-of-synthesis event.
    pub(crate) fn end_chunk(&self, text_len: usize, audio_pos: Duration) -> SynthChunk {
        SynthChunk {
            samples: Vec::new(),
            events: vec![
                SynthEvent::new(EventKind::End, text_len, audio_pos),
                SynthEvent::terminator(),
            ],
        }
    }

    /// Delivers a batch to the callback, if one is registered.
    pub(crate) fn deliver(&mut self, chunk: &SynthChunk) -> CallbackResult {
        match &mut self.callback {
            Some(cb) => dispatch(cb.as_mut(), &chunk.samples, &chunk.events),
            None => CallbackResult::Continue,
        }
    }

    fn push_phoneme(
        &self,
        events: &mut Vec<SynthEvent>,
        phone: &Phone,
        text_position: usize,
        audio_position: Duration,
    ) {
        let id = match self.mode {
            PhonemeEventMode::Off => return,
            PhonemeEventMode::Mnemonic => phone.mnemonic.clone(),
            PhonemeEventMode::Ipa => phone.ipa.clone(),
        };
        events.push(SynthEvent::new(
            EventKind::Phoneme { id },
            text_position,
            audio_position,
        ));
    }
}

/// Appends silence for `duration` and advances the audio clock.
fn emit_silence(samples: &mut Vec<i16>, duration: Duration, audio_pos: &mut Duration) {
    let count = (Engine::SAMPLE_RATE as f64 * duration.as_secs_f64()) as usize;
    samples.resize(samples.len() + count, 0);
    *audio_pos += duration;
}

/// Words of a clause with their byte offsets.
fn words_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        let in_word = c.is_alphanumeric() || c == '\'';
        match (start, in_word) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                push_word(text, s, i, &mut words);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        push_word(text, s, text.len(), &mut words);
    }
    words
}

fn push_word<'a>(text: &'a str, start: usize, end: usize, words: &mut Vec<(usize, &'a str)>) {
    let raw = &text[start..end];
    let word = raw.trim_matches('\'');
    if !word.is_empty() {
        let lead = raw.len() - raw.trim_start_matches('\'').len();
        words.push((start + lead, word));
    }
}
