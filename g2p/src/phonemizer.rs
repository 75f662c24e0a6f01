//! Phonemizer trait and engine factory.

use crate::{Language, LexiconPhonemizer, Phone, RulePhonemizer};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error type for G2P operations.
#[derive(Debug, thiserror::Error)]
pub enum G2PError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("unknown engine: {0}")]
    UnknownEngine(String),
    #[error("phonemize failed: {0}")]
    PhonemizeFailed(String),
    #[error("invalid vocab config: {0}")]
    Config(String),
}

/// Interface for a grapheme-to-phoneme engine.
///
/// An engine is constructed for a single language dialect and converts
/// written words into phone sequences.
pub trait Phonemizer: Send + Sync {
    /// The dialect this engine was built for.
    fn language(&self) -> Language;

    /// Converts a single word into its phone sequence.
    fn phonemize_word(&self, word: &str) -> Result<Vec<Phone>, G2PError>;

    /// Converts text into a space-separated IPA phoneme string.
    ///
    /// Words are split on non-alphanumeric characters; the output is
    /// the engine-native notation (see [`crate::compact`] for the
    /// model alphabet).
    fn phonemize(&self, text: &str) -> Result<String, G2PError> {
        let mut out = String::new();
        for word in split_words(text) {
            for phone in self.phonemize_word(word)? {
                if phone.ipa.is_empty() {
                    continue;
                }
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&phone.ipa);
            }
        }
        Ok(out)
    }
}

/// Available G2P engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum G2PEngine {
    /// Dictionary lookup with letter-name fallback.
    #[default]
    Lexicon,
    /// Deterministic letter rules; always succeeds.
    Rule,
}

impl FromStr for G2PEngine {
    type Err = G2PError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lexicon" => Ok(G2PEngine::Lexicon),
            "rule" => Ok(G2PEngine::Rule),
            _ => Err(G2PError::UnknownEngine(s.to_string())),
        }
    }
}

/// Creates a phonemizer for the given engine and dialect.
pub fn create_phonemizer(
    engine: G2PEngine,
    language: Language,
) -> Result<Box<dyn Phonemizer>, G2PError> {
    match engine {
        G2PEngine::Lexicon => Ok(Box::new(LexiconPhonemizer::new(language))),
        G2PEngine::Rule => Ok(Box::new(RulePhonemizer::new(language))),
    }
}

/// Splits text into phonemizable words.
pub(crate) fn split_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("Hello, world!"), vec!["Hello", "world"]);
        assert_eq!(split_words("it's fine"), vec!["it's", "fine"]);
        assert_eq!(split_words("  "), Vec::<&str>::new());
    }

    #[test]
    fn test_engine_parse() {
        assert_eq!("lexicon".parse::<G2PEngine>().unwrap(), G2PEngine::Lexicon);
        assert_eq!("Rule".parse::<G2PEngine>().unwrap(), G2PEngine::Rule);
        assert!(matches!(
            "neural".parse::<G2PEngine>(),
            Err(G2PError::UnknownEngine(_))
        ));
    }

    #[test]
    fn test_factory() {
        for engine in [G2PEngine::Lexicon, G2PEngine::Rule] {
            let g2p = create_phonemizer(engine, Language::EnGb).unwrap();
            assert_eq!(g2p.language(), Language::EnGb);
        }
    }

    #[test]
    fn test_error_display() {
        let err = G2PError::UnsupportedLanguage("fr-fr".to_string());
        assert!(err.to_string().contains("fr-fr"));

        let err = G2PError::PhonemizeFailed("bad".to_string());
        assert!(err.to_string().contains("bad"));
    }
}
