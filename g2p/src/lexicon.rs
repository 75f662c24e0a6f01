//! Dictionary-based G2P engine.

use crate::{phones, G2PError, Language, Phone, Phonemizer};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Base lexicon (US pronunciations), word to mnemonic string.
static LEXICON: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("a", "@"),
        ("an", "@ n"),
        ("and", "'{ n d"),
        ("are", "'A: r"),
        ("day", "d 'eI"),
        ("five", "f 'aI v"),
        ("four", "f 'O: r"),
        ("go", "g 'oU"),
        ("hello", "h @ l 'oU"),
        ("house", "h 'aU s"),
        ("in", "'I n"),
        ("is", "'I z"),
        ("it", "'I t"),
        ("no", "n 'oU"),
        ("of", "'V v"),
        ("one", "w 'V n"),
        ("sound", "s 'aU n d"),
        ("speech", "s p 'i: tS"),
        ("test", "t 'E s t"),
        ("testing", "t 'E s t I N"),
        ("tests", "t 'E s t s"),
        ("that", "D '{ t"),
        ("the", "D @"),
        ("this", "D 'I s"),
        ("three", "T r 'i:"),
        ("time", "t 'aI m"),
        ("to", "t 'u:"),
        ("tomato", "t @ m 'eI t oU"),
        ("two", "t 'u:"),
        ("voice", "v 'OI s"),
        ("word", "w '3: d"),
        ("world", "w '3: l d"),
        ("yes", "j 'E s"),
    ])
});

/// GB pronunciations that differ from the base lexicon.
static LEXICON_GB: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("go", "g '@U"),
        ("hello", "h @ l '@U"),
        ("no", "n '@U"),
        ("tomato", "t @ m 'A: t @U"),
    ])
});

/// Letter names for spelling out-of-vocabulary words.
static LETTER_NAMES: &[(&str, &str)] = &[
    ("a", "'eI"),
    ("b", "b 'i:"),
    ("c", "s 'i:"),
    ("d", "d 'i:"),
    ("e", "'i:"),
    ("f", "'E f"),
    ("g", "dZ 'i:"),
    ("h", "'eI tS"),
    ("i", "'aI"),
    ("j", "dZ 'eI"),
    ("k", "k 'eI"),
    ("l", "'E l"),
    ("m", "'E m"),
    ("n", "'E n"),
    ("o", "'oU"),
    ("p", "p 'i:"),
    ("q", "k j 'u:"),
    ("r", "'A: r"),
    ("s", "'E s"),
    ("t", "t 'i:"),
    ("u", "j 'u:"),
    ("v", "v 'i:"),
    ("w", "d 'V b @ l j u:"),
    ("x", "'E k s"),
    ("y", "w 'aI"),
    ("z", "z 'i:"),
    ("0", "z 'I r oU"),
    ("1", "w 'V n"),
    ("2", "t 'u:"),
    ("3", "T r 'i:"),
    ("4", "f 'O: r"),
    ("5", "f 'aI v"),
    ("6", "s 'I k s"),
    ("7", "s 'E v @ n"),
    ("8", "'eI t"),
    ("9", "n 'aI n"),
];

/// GB letter names that differ.
static LETTER_NAMES_GB: &[(&str, &str)] = &[("o", "'@U"), ("z", "z 'E d"), ("0", "z 'I r @U")];

/// Dictionary G2P engine with letter-name fallback.
///
/// Words missing from the built-in lexicon are spelled out letter by
/// letter, so the engine is total over alphanumeric input.
pub struct LexiconPhonemizer {
    language: Language,
}

impl LexiconPhonemizer {
    /// Creates a lexicon engine for the given dialect.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn lookup(&self, word: &str) -> Option<&'static str> {
        if self.language == Language::EnGb {
            if let Some(m) = LEXICON_GB.get(word) {
                return Some(m);
            }
        }
        LEXICON.get(word).copied()
    }

    fn letter_name(&self, letter: &str) -> Option<&'static str> {
        if self.language == Language::EnGb {
            if let Some((_, m)) = LETTER_NAMES_GB.iter().find(|(l, _)| *l == letter) {
                return Some(m);
            }
        }
        LETTER_NAMES
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, m)| *m)
    }

    /// Spells a word letter by letter.
    fn spell(&self, word: &str) -> Result<Vec<Phone>, G2PError> {
        let mut out = Vec::new();
        for c in word.chars() {
            let mut buf = [0u8; 4];
            let letter = &*c.to_lowercase().next().unwrap_or(c).encode_utf8(&mut buf);
            if let Some(mnemonics) = self.letter_name(letter) {
                out.extend(phones::resolve_all(mnemonics)?);
            }
        }
        Ok(out)
    }
}

impl Phonemizer for LexiconPhonemizer {
    fn language(&self) -> Language {
        self.language
    }

    fn phonemize_word(&self, word: &str) -> Result<Vec<Phone>, G2PError> {
        let lower = word.to_lowercase();
        match self.lookup(&lower) {
            Some(mnemonics) => phones::resolve_all(mnemonics),
            None => self.spell(&lower),
        }
    }
}
