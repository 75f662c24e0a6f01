//! Synthesis event reporting.
//!
//! This crate provides:
//! - [`SynthEvent`] and [`EventKind`]: the engine's event records,
//!   delivered as sentinel-terminated batches
//! - [`SynthCallback`] and [`dispatch`]: the synthesis callback contract
//! - [`PhonemeSink`] and [`PhonemeCollector`]: collection of phoneme
//!   identifiers emitted during synthesis
//! - [`Engine`]: a reference synthesis engine driving G2P over
//!   clause-segmented text
//! - [`SynthStream`] and [`EventStream`]: the async streaming surface
//!
//! # Example
//!
//! ```rust
//! use phonik_g2p::Language;
//! use phonik_synth::{Engine, EngineConfig, PhonemeCollector, PhonemeEventMode};
//!
//! let mut engine = Engine::new(EngineConfig::new(Language::EnUs)).unwrap();
//! engine.set_phoneme_events(PhonemeEventMode::Ipa);
//!
//! let collector = PhonemeCollector::new(256);
//! engine.set_callback(collector.callback());
//! engine.synthesize("test").unwrap();
//! assert_eq!(collector.contents(), "t ˈɛ s t  ");
//! ```

mod callback;
mod engine;
mod error;
mod event;
mod segment;
mod stream;

pub use callback::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use segment::*;
pub use stream::*;
