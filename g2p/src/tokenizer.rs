//! Phoneme vocabulary and tokenization.
//!
//! TTS models consume token ids, one per phoneme symbol. The
//! vocabulary comes from the model's config JSON or from the built-in
//! default table covering the compact alphabet.

use crate::G2PError;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use tracing::warn;

/// Symbols of the built-in vocabulary, in id order starting at 0.
/// `$` is the pad token.
const DEFAULT_SYMBOLS: &str = concat!(
    "$;:,.!?¡¿—…\"«»“” ",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "ɑɐɒæəɚɛɜɔʌʊɪʃʒʤʧŋθðɹᵊ",
    "ˈˌː",
);

/// The `vocab` section of a model config file.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabConfig {
    /// Phoneme symbol to token id.
    pub vocab: HashMap<String, i64>,
}

/// Maps phoneme symbols to model token ids.
#[derive(Debug, Clone)]
pub struct Vocab {
    map: HashMap<char, i64>,
}

impl Default for Vocab {
    fn default() -> Self {
        let map = DEFAULT_SYMBOLS
            .chars()
            .enumerate()
            .map(|(id, sym)| (sym, id as i64))
            .collect();
        Self { map }
    }
}

impl Vocab {
    /// Builds a vocabulary from a parsed model config.
    ///
    /// Entries whose key is not a single symbol are skipped with a
    /// warning; tokenization is per symbol.
    pub fn from_config(config: VocabConfig) -> Self {
        let mut map = HashMap::with_capacity(config.vocab.len());
        for (key, id) in config.vocab {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(sym), None) => {
                    map.insert(sym, id);
                }
                _ => warn!(key = %key, "vocab: skipping non-single-symbol entry"),
            }
        }
        Self { map }
    }

    /// Loads a vocabulary from model config JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, G2PError> {
        let config: VocabConfig =
            serde_json::from_reader(reader).map_err(|e| G2PError::Config(e.to_string()))?;
        Ok(Self::from_config(config))
    }

    /// Returns the token id for a symbol.
    pub fn get(&self, symbol: char) -> Option<i64> {
        self.map.get(&symbol).copied()
    }

    /// Number of symbols in the vocabulary.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Tokenizes a phoneme string, skipping unknown symbols.
    pub fn tokenize(&self, phonemes: &str) -> Vec<i64> {
        phonemes.chars().filter_map(|c| self.get(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocab() {
        let vocab = Vocab::default();
        assert_eq!(vocab.get('$'), Some(0));
        assert!(vocab.get('t').is_some());
        assert!(vocab.get('ˈ').is_some());
        assert!(vocab.get('ɛ').is_some());
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_tokenize_order() {
        let vocab = Vocab::default();
        let tokens = vocab.tokenize("tɛst");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], tokens[3]);
    }

    #[test]
    fn test_tokenize_skips_unknown() {
        let vocab = Vocab::default();
        // Unmapped symbols disappear, spaces are mapped
        let with_unknown = vocab.tokenize("t\u{1F600}t");
        assert_eq!(with_unknown.len(), 2);
    }

    #[test]
    fn test_from_reader() {
        let json = r#"{"vocab": {"a": 43, "b": 44, "ab": 99}}"#;
        let vocab = Vocab::from_reader(json.as_bytes()).unwrap();
        assert_eq!(vocab.get('a'), Some(43));
        assert_eq!(vocab.get('b'), Some(44));
        // multi-symbol entry was skipped
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_from_reader_invalid() {
        let err = Vocab::from_reader("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, G2PError::Config(_)));
    }

    #[test]
    fn test_tokenize_compact_output() {
        let vocab = Vocab::default();
        // Every symbol the mapper can emit for "hello" is in the table
        let tokens = vocab.tokenize("həlˈO");
        assert_eq!(tokens.len(), 5);
    }
}
