//! Language dialects for phonemization.

use crate::G2PError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported language dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    /// US English.
    EnUs,
    /// GB English.
    EnGb,
}

impl Language {
    /// All supported dialects.
    pub const ALL: [Language; 2] = [Language::EnUs, Language::EnGb];

    /// Returns the dialect tag (e.g. `"en-us"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::EnUs => "en-us",
            Language::EnGb => "en-gb",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = G2PError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en-us" | "en_us" | "en" => Ok(Language::EnUs),
            "en-gb" | "en_gb" => Ok(Language::EnGb),
            _ => Err(G2PError::UnsupportedLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_as_str() {
        assert_eq!(Language::EnUs.as_str(), "en-us");
        assert_eq!(Language::EnGb.as_str(), "en-gb");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("en-us".parse::<Language>().unwrap(), Language::EnUs);
        assert_eq!("EN-GB".parse::<Language>().unwrap(), Language::EnGb);
        assert_eq!("en".parse::<Language>().unwrap(), Language::EnUs);
        assert!("fr-fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::EnGb).unwrap();
        assert_eq!(json, "\"en-gb\"");
        let lang: Language = serde_json::from_str("\"en-us\"").unwrap();
        assert_eq!(lang, Language::EnUs);
    }

    #[test]
    fn test_language_all() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }
}
