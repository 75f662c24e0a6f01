//! Grapheme-to-phoneme conversion for speech synthesis.
//!
//! This crate provides:
//! - [`Language`]: supported language dialects
//! - [`Phonemizer`] and [`create_phonemizer`]: pluggable G2P engines
//! - [`compact`]: post-processing from engine-native notation to the
//!   compact model phoneme alphabet
//! - [`Vocab`]: phoneme-to-token-id mapping for TTS models
//!
//! # Example
//!
//! ```rust
//! use phonik_g2p::{create_phonemizer, G2PEngine, Language};
//!
//! let g2p = create_phonemizer(G2PEngine::Lexicon, Language::EnUs).unwrap();
//! let phonemes = g2p.phonemize("test").unwrap();
//! assert_eq!(phonemes, "t ˈɛ s t");
//! ```

mod lang;
mod lexicon;
mod mapping;
mod phones;
mod phonemizer;
mod rule;
mod tokenizer;

pub use lang::*;
pub use lexicon::*;
pub use mapping::*;
pub use phones::*;
pub use phonemizer::*;
pub use rule::*;
pub use tokenizer::*;
