//! Phone inventory shared by the G2P engines.
//!
//! Each phone has two renderings: a compact ASCII mnemonic (with `'`
//! marking primary stress) and an IPA form. Compound phones keep the
//! `^` tie the notation mapper expects between their components.

use crate::G2PError;

/// A single phone with its mnemonic and IPA renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    /// ASCII mnemonic, e.g. `'E` for a stressed open-mid front vowel.
    pub mnemonic: String,
    /// IPA rendering, e.g. `ˈɛ`. Empty for pause phones.
    pub ipa: String,
}

impl Phone {
    /// Creates a phone from its two renderings.
    pub fn new(mnemonic: impl Into<String>, ipa: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            ipa: ipa.into(),
        }
    }

    /// Long clause pause.
    pub fn pause_long() -> Self {
        Phone::new("_:", "")
    }

    /// Short clause pause.
    pub fn pause_short() -> Self {
        Phone::new("_", "")
    }

    /// True for pause phones.
    pub fn is_pause(&self) -> bool {
        self.mnemonic.starts_with('_')
    }
}

/// (mnemonic, ipa, is_vowel) rows of the phone inventory.
const INVENTORY: &[(&str, &str, bool)] = &[
    // Stops
    ("p", "p", false),
    ("b", "b", false),
    ("t", "t", false),
    ("d", "d", false),
    ("k", "k", false),
    ("g", "g", false),
    // Fricatives
    ("f", "f", false),
    ("v", "v", false),
    ("T", "θ", false),
    ("D", "ð", false),
    ("s", "s", false),
    ("z", "z", false),
    ("S", "ʃ", false),
    ("Z", "ʒ", false),
    ("h", "h", false),
    // Affricates (tied components)
    ("tS", "t^ʃ", false),
    ("dZ", "d^ʒ", false),
    // Nasals and approximants
    ("m", "m", false),
    ("n", "n", false),
    ("N", "ŋ", false),
    ("l", "l", false),
    ("r", "r", false),
    ("w", "w", false),
    ("j", "j", false),
    // Monophthongs
    ("i:", "iː", true),
    ("I", "ɪ", true),
    ("E", "ɛ", true),
    ("{", "æ", true),
    ("A:", "ɑː", true),
    ("V", "ʌ", true),
    ("O:", "ɔː", true),
    ("U", "ʊ", true),
    ("u:", "uː", true),
    ("@", "ə", true),
    ("3:", "ɜː", true),
    // Diphthongs (tied components)
    ("eI", "e^ɪ", true),
    ("aI", "a^ɪ", true),
    ("OI", "ɔ^ɪ", true),
    ("aU", "a^ʊ", true),
    ("oU", "o^ʊ", true),
    ("@U", "ə^ʊ", true),
];

/// Looks up an inventory row by mnemonic (without any stress mark).
fn inventory_get(mnemonic: &str) -> Option<&'static (&'static str, &'static str, bool)> {
    INVENTORY.iter().find(|(m, _, _)| *m == mnemonic)
}

/// True if the mnemonic (stress mark allowed) names a vowel phone.
pub fn is_vowel(mnemonic: &str) -> bool {
    let key = mnemonic.strip_prefix('\'').unwrap_or(mnemonic);
    inventory_get(key).is_some_and(|(_, _, v)| *v)
}

/// Resolves a mnemonic token (optionally `'`-stressed) into a [`Phone`].
pub fn resolve(token: &str) -> Result<Phone, G2PError> {
    if token.starts_with('_') {
        return Ok(Phone::new(token, ""));
    }
    let (stressed, key) = match token.strip_prefix('\'') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (_, ipa, _) = inventory_get(key)
        .ok_or_else(|| G2PError::PhonemizeFailed(format!("unknown phone mnemonic: {token}")))?;
    let ipa = if stressed {
        format!("ˈ{ipa}")
    } else {
        (*ipa).to_string()
    };
    Ok(Phone::new(token, ipa))
}

/// Resolves a space-separated mnemonic string into phones.
pub fn resolve_all(mnemonics: &str) -> Result<Vec<Phone>, G2PError> {
    mnemonics.split_whitespace().map(resolve).collect()
}
