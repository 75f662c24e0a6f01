//! Synthesis event records.
//!
//! The engine reports progress to its callback as batches of event
//! records. Every batch is terminated by a [`EventKind::ListEnd`]
//! sentinel; records after the sentinel are not part of the batch.

use crate::SynthError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// What an event record describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Batch sentinel. Never describes synthesis progress.
    ListEnd,
    /// Start of a word of `length` characters.
    Word { length: usize },
    /// Start of a sentence or clause.
    Sentence,
    /// A named SSML-style mark was reached.
    Mark { name: String },
    /// A phoneme is being produced. `id` is the rendering of the
    /// phoneme in the active event mode.
    Phoneme { id: String },
    /// Synthesis finished.
    End,
}

/// A single synthesis event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthEvent {
    pub kind: EventKind,
    /// Byte position in the source text.
    pub text_position: usize,
    /// Position in the generated audio.
    pub audio_position: Duration,
}

impl SynthEvent {
    /// Creates an event record.
    pub fn new(kind: EventKind, text_position: usize, audio_position: Duration) -> Self {
        Self {
            kind,
            text_position,
            audio_position,
        }
    }

    /// The batch sentinel record.
    pub fn terminator() -> Self {
        Self::new(EventKind::ListEnd, 0, Duration::ZERO)
    }

    /// True for the batch sentinel.
    pub fn is_terminator(&self) -> bool {
        self.kind == EventKind::ListEnd
    }

    /// True for phoneme events.
    pub fn is_phoneme(&self) -> bool {
        matches!(self.kind, EventKind::Phoneme { .. })
    }

    /// The phoneme identifier, for phoneme events.
    pub fn phoneme_id(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Phoneme { id } => Some(id),
            _ => None,
        }
    }
}

/// Controls which phoneme events the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeEventMode {
    /// No phoneme events.
    #[default]
    Off,
    /// Phoneme ids are ASCII mnemonics (`'E`, `_:`).
    Mnemonic,
    /// Phoneme ids are IPA (`ˈɛ`); pauses render as empty ids.
    Ipa,
}

impl FromStr for PhonemeEventMode {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(PhonemeEventMode::Off),
            "mnemonic" => Ok(PhonemeEventMode::Mnemonic),
            "ipa" => Ok(PhonemeEventMode::Ipa),
            _ => Err(SynthError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator() {
        let t = SynthEvent::terminator();
        assert!(t.is_terminator());
        assert!(!t.is_phoneme());
    }

    #[test]
    fn test_phoneme_id() {
        let e = SynthEvent::new(
            EventKind::Phoneme {
                id: "ˈɛ".to_string(),
            },
            0,
            Duration::ZERO,
        );
        assert!(e.is_phoneme());
        assert_eq!(e.phoneme_id(), Some("ˈɛ"));

        let w = SynthEvent::new(EventKind::Word { length: 4 }, 0, Duration::ZERO);
        assert_eq!(w.phoneme_id(), None);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(
            "ipa".parse::<PhonemeEventMode>().unwrap(),
            PhonemeEventMode::Ipa
        );
        assert_eq!(
            "Mnemonic".parse::<PhonemeEventMode>().unwrap(),
            PhonemeEventMode::Mnemonic
        );
        assert!("loud".parse::<PhonemeEventMode>().is_err());
    }

    #[test]
    fn test_event_serde() {
        let e = SynthEvent::new(
            EventKind::Phoneme {
                id: "t".to_string(),
            },
            3,
            Duration::from_millis(80),
        );
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"phoneme\""));
        let back: SynthEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
