//! Phoneme notation post-processing.
//!
//! G2P engines emit a verbose IPA-like notation with `^` ties between
//! compound phone components. TTS models consume a compact single-char
//! alphabet. [`compact`] maps between the two, including dialect
//! rewrites.

use crate::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Engine-notation to model-alphabet replacements, longest first.
static E2M: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut table = vec![
        ("ʔˌn\u{329}", "tn"),
        ("ʔn\u{329}", "tn"),
        ("ʔn", "tn"),
        ("ʔ", "t"),
        ("a^ɪ", "I"),
        ("a^ʊ", "W"),
        ("d^ʒ", "ʤ"),
        ("e^ɪ", "A"),
        ("e", "A"),
        ("t^ʃ", "ʧ"),
        ("ɔ^ɪ", "Y"),
        ("ə^l", "ᵊl"),
        ("ʲo", "jo"),
        ("ʲə", "jə"),
        ("ʲ", ""),
        ("ɚ", "əɹ"),
        ("r", "ɹ"),
        ("x", "k"),
        ("ç", "k"),
        ("ɐ", "ə"),
        ("ɬ", "l"),
        ("\u{303}", ""),
    ];
    table.sort_by_key(|(from, _)| std::cmp::Reverse(from.chars().count()));
    table
});

/// Syllabic consonant: the mark follows the consonant it attaches to.
static SYLLABIC: Lazy<Regex> =
    Lazy::new(|| Regex::new("(\\S)\u{329}").expect("syllabic pattern"));

/// Maps an engine-native phoneme string into the compact model alphabet.
///
/// Applies the replacement table, syllabic-consonant handling, the
/// dialect pass for `language`, and the engine compatibility pass.
pub fn compact(phonemes: &str, language: Language) -> String {
    let mut result = phonemes.trim().to_string();
    for (from, to) in E2M.iter() {
        result = result.replace(from, to);
    }

    result = SYLLABIC.replace_all(&result, "ᵊ$1").into_owned();
    result = result.replace('\u{329}', "");

    result = match language {
        Language::EnGb => result
            .replace("e^ə", "ɛː")
            .replace("iə", "ɪə")
            .replace("ə^ʊ", "Q"),
        Language::EnUs => result
            .replace("o^ʊ", "O")
            .replace("ɜːɹ", "ɜɹ")
            .replace("ɜː", "ɜɹ")
            .replace("ɪə", "iə")
            .replace('ː', ""),
    };

    // Engine compatibility: bare `o` and leftover ties
    result = result.replace('o', "ɔ");
    result.replace('^', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_plain() {
        assert_eq!(compact("t ˈɛ s t", Language::EnUs), "t ˈɛ s t");
    }

    #[test]
    fn test_compact_diphthongs() {
        assert_eq!(compact("ˈa^ɪ", Language::EnUs), "ˈI");
        assert_eq!(compact("d ˈe^ɪ", Language::EnUs), "d ˈA");
        assert_eq!(compact("ˈɔ^ɪ", Language::EnUs), "ˈY");
        assert_eq!(compact("ˈa^ʊ", Language::EnUs), "ˈW");
    }

    #[test]
    fn test_compact_affricates() {
        assert_eq!(compact("t^ʃ", Language::EnUs), "ʧ");
        assert_eq!(compact("d^ʒ", Language::EnUs), "ʤ");
    }

    #[test]
    fn test_compact_us_dialect() {
        // o^ʊ collapses before the bare-o rule fires
        assert_eq!(compact("h ə l ˈo^ʊ", Language::EnUs), "h ə l ˈO");
        // length marks are dropped
        assert_eq!(compact("s p ˈiː t^ʃ", Language::EnUs), "s p ˈi ʧ");
        assert_eq!(compact("w ˈɜː l d", Language::EnUs), "w ˈɜɹ l d");
    }

    #[test]
    fn test_compact_gb_dialect() {
        assert_eq!(compact("h ə l ˈə^ʊ", Language::EnGb), "h ə l ˈQ");
        // GB keeps length marks
        assert_eq!(compact("s p ˈiː t^ʃ", Language::EnGb), "s p ˈiː ʧ");
    }

    #[test]
    fn test_compact_r() {
        assert_eq!(compact("r ˈɛ d", Language::EnUs), "ɹ ˈɛ d");
    }

    #[test]
    fn test_compact_syllabic() {
        assert_eq!(compact("b ˈʌ t n\u{329}", Language::EnUs), "b ˈʌ t ᵊn");
    }

    #[test]
    fn test_compact_glottal_stop() {
        assert_eq!(compact("ʔ", Language::EnUs), "t");
    }

    #[test]
    fn test_compact_trims() {
        assert_eq!(compact("  t  ", Language::EnUs), "t");
    }
}
