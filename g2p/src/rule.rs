//! Rule-based G2P engine.

use crate::{phones, G2PError, Language, Phone, Phonemizer};

/// Grapheme-to-mnemonic rules, longest grapheme first.
static RULES: &[(&str, &str)] = &[
    ("igh", "aI"),
    ("tch", "tS"),
    ("ch", "tS"),
    ("sh", "S"),
    ("th", "T"),
    ("ph", "f"),
    ("wh", "w"),
    ("ng", "N"),
    ("ck", "k"),
    ("qu", "k w"),
    ("ee", "i:"),
    ("ea", "i:"),
    ("oo", "u:"),
    ("ou", "aU"),
    ("ow", "aU"),
    ("oa", "oU"),
    ("ai", "eI"),
    ("ay", "eI"),
    ("oy", "OI"),
    ("oi", "OI"),
    ("au", "O:"),
    ("aw", "O:"),
    ("a", "{"),
    ("b", "b"),
    ("c", "k"),
    ("d", "d"),
    ("e", "E"),
    ("f", "f"),
    ("g", "g"),
    ("h", "h"),
    ("i", "I"),
    ("j", "dZ"),
    ("k", "k"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("o", "O:"),
    ("p", "p"),
    ("q", "k"),
    ("r", "r"),
    ("s", "s"),
    ("t", "t"),
    ("u", "V"),
    ("v", "v"),
    ("w", "w"),
    ("x", "k s"),
    ("y", "j"),
    ("z", "z"),
];

/// Deterministic letter-rule G2P engine.
///
/// Applies longest-match grapheme rules with primary stress on the
/// first vowel. Characters without a rule are skipped, so the engine
/// never fails.
pub struct RulePhonemizer {
    language: Language,
}

impl RulePhonemizer {
    /// Creates a rule engine for the given dialect.
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl Phonemizer for RulePhonemizer {
    fn language(&self) -> Language {
        self.language
    }

    fn phonemize_word(&self, word: &str) -> Result<Vec<Phone>, G2PError> {
        let lower = word.to_lowercase();
        let input = strip_silent_e(&lower);

        let mut mnemonics: Vec<String> = Vec::new();
        let mut rest = input;
        'outer: while !rest.is_empty() {
            for (grapheme, phone_str) in RULES {
                if let Some(tail) = rest.strip_prefix(grapheme) {
                    mnemonics.extend(phone_str.split_whitespace().map(str::to_string));
                    rest = tail;
                    continue 'outer;
                }
            }
            // No rule matched, skip one character
            let mut chars = rest.chars();
            chars.next();
            rest = chars.as_str();
        }

        // Primary stress on the first vowel
        if let Some(first_vowel) = mnemonics.iter().position(|m| phones::is_vowel(m)) {
            mnemonics[first_vowel].insert(0, '\'');
        }

        mnemonics.iter().map(|m| phones::resolve(m)).collect()
    }
}

/// Drops a word-final silent `e` when the word still has another vowel.
fn strip_silent_e(word: &str) -> &str {
    if word.len() > 2 {
        if let Some(stem) = word.strip_suffix('e') {
            if stem.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')) {
                return stem;
            }
        }
    }
    word
}
