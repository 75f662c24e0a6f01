//! Synthesis callback contract and phoneme collection.

use crate::{EventKind, SynthEvent};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// What the callback tells the engine to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackResult {
    /// Keep synthesizing.
    Continue,
    /// Stop before the next batch.
    Abort,
}

/// Synthesis callback. Receives the batch's audio samples (possibly
/// empty) and its sentinel-terminated event records.
pub type SynthCallback = Box<dyn FnMut(&[i16], &[SynthEvent]) -> CallbackResult + Send>;

/// Invokes the callback with a well-terminated batch.
///
/// The batch is truncated at the first sentinel; a missing sentinel is
/// appended before delivery.
pub fn dispatch(
    callback: &mut (dyn FnMut(&[i16], &[SynthEvent]) -> CallbackResult + Send),
    samples: &[i16],
    events: &[SynthEvent],
) -> CallbackResult {
    match events.iter().position(SynthEvent::is_terminator) {
        Some(idx) => callback(samples, &events[..=idx]),
        None => {
            let mut terminated = events.to_vec();
            terminated.push(SynthEvent::terminator());
            callback(samples, &terminated)
        }
    }
}

/// Shared handle to a [`PhonemeSink`].
pub type SharedPhonemeSink = Arc<Mutex<PhonemeSink>>;

/// Capacity-bounded accumulator of phoneme identifiers.
///
/// Identifiers are space-separated. Writes past the capacity are
/// truncated at a character boundary; the sink never errors.
#[derive(Debug)]
pub struct PhonemeSink {
    buf: String,
    capacity: usize,
    truncated: bool,
}

impl PhonemeSink {
    /// Creates a sink bounded to `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            capacity,
            truncated: false,
        }
    }

    /// Creates a shared sink handle.
    pub fn shared(capacity: usize) -> SharedPhonemeSink {
        Arc::new(Mutex::new(Self::new(capacity)))
    }

    /// Appends a phoneme identifier, preceded by a separator when the
    /// sink is not empty. The separator counts toward capacity.
    pub fn push(&mut self, id: &str) {
        if !self.buf.is_empty() {
            self.write_char(' ');
        }
        for c in id.chars() {
            self.write_char(c);
        }
    }

    fn write_char(&mut self, c: char) {
        if self.buf.len() + c.len_utf8() > self.capacity {
            if !self.truncated {
                warn!(capacity = self.capacity, "phoneme sink full, truncating");
                self.truncated = true;
            }
            return;
        }
        self.buf.push(c);
    }

    /// Current space-joined contents.
    pub fn contents(&self) -> &str {
        &self.buf
    }

    /// True if any write was dropped for capacity.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Empties the sink and clears the truncation flag.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.truncated = false;
    }
}

/// Collects phoneme identifiers emitted during synthesis.
///
/// Walks each event batch up to the sentinel and appends the
/// identifier of every phoneme event to its sink. All other event
/// kinds and the audio samples are ignored, and the collector always
/// asks the engine to continue.
#[derive(Clone)]
pub struct PhonemeCollector {
    sink: SharedPhonemeSink,
}

impl PhonemeCollector {
    /// Creates a collector with a fresh sink of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            sink: PhonemeSink::shared(capacity),
        }
    }

    /// Creates a collector writing into an existing sink.
    pub fn with_sink(sink: SharedPhonemeSink) -> Self {
        Self { sink }
    }

    /// The underlying sink handle.
    pub fn sink(&self) -> SharedPhonemeSink {
        Arc::clone(&self.sink)
    }

    /// Snapshot of the collected identifiers.
    pub fn contents(&self) -> String {
        self.lock().contents().to_string()
    }

    /// Handles one synthesis batch.
    pub fn handle(&self, _samples: &[i16], events: &[SynthEvent]) -> CallbackResult {
        let mut sink = self.lock();
        for event in events {
            if event.is_terminator() {
                break;
            }
            if let EventKind::Phoneme { id } = &event.kind {
                sink.push(id);
            }
        }
        CallbackResult::Continue
    }

    /// Boxes the collector as a [`SynthCallback`].
    pub fn callback(&self) -> SynthCallback {
        let collector = self.clone();
        Box::new(move |samples, events| collector.handle(samples, events))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PhonemeSink> {
        self.sink.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn phoneme(id: &str) -> SynthEvent {
        SynthEvent::new(
            EventKind::Phoneme { id: id.to_string() },
            0,
            Duration::ZERO,
        )
    }

    #[test]
    fn test_sink_push() {
        let mut sink = PhonemeSink::new(64);
        sink.push("t");
        sink.push("ˈɛ");
        sink.push("s");
        sink.push("t");
        assert_eq!(sink.contents(), "t ˈɛ s t");
        assert!(!sink.truncated());
    }

    #[test]
    fn test_sink_empty_id_separator() {
        let mut sink = PhonemeSink::new(64);
        sink.push("t");
        sink.push("");
        sink.push("");
        assert_eq!(sink.contents(), "t  ");
    }

    #[test]
    fn test_sink_empty_id_on_empty_sink() {
        let mut sink = PhonemeSink::new(64);
        sink.push("");
        assert_eq!(sink.contents(), "");
        sink.push("t");
        assert_eq!(sink.contents(), "t");
    }

    #[test]
    fn test_sink_truncation() {
        let mut sink = PhonemeSink::new(3);
        sink.push("t");
        sink.push("s");
        sink.push("k");
        assert_eq!(sink.contents(), "t s");
        assert!(sink.truncated());
    }

    #[test]
    fn test_sink_truncation_char_boundary() {
        let mut sink = PhonemeSink::new(2);
        // 'ˈ' is two bytes; 'ɛ' no longer fits
        sink.push("ˈɛ");
        assert_eq!(sink.contents(), "ˈ");
        assert!(sink.truncated());
    }

    #[test]
    fn test_sink_clear() {
        let mut sink = PhonemeSink::new(1);
        sink.push("ts");
        assert!(sink.truncated());
        sink.clear();
        assert_eq!(sink.contents(), "");
        assert!(!sink.truncated());
    }

    #[test]
    fn test_dispatch_appends_missing_sentinel() {
        let mut seen = Vec::new();
        let mut cb = |_s: &[i16], events: &[SynthEvent]| {
            seen.extend(events.to_vec());
            CallbackResult::Continue
        };
        dispatch(&mut cb, &[], &[phoneme("t")]);
        assert_eq!(seen.len(), 2);
        assert!(seen[1].is_terminator());
    }

    #[test]
    fn test_dispatch_truncates_at_sentinel() {
        let mut seen = Vec::new();
        let mut cb = |_s: &[i16], events: &[SynthEvent]| {
            seen.extend(events.to_vec());
            CallbackResult::Continue
        };
        dispatch(
            &mut cb,
            &[],
            &[phoneme("t"), SynthEvent::terminator(), phoneme("x")],
        );
        assert_eq!(seen.len(), 2);
        assert!(seen[1].is_terminator());
    }

    #[test]
    fn test_collector_ignores_after_sentinel() {
        let collector = PhonemeCollector::new(64);
        collector.handle(
            &[],
            &[phoneme("t"), SynthEvent::terminator(), phoneme("x")],
        );
        assert_eq!(collector.contents(), "t");
    }

    #[test]
    fn test_collector_ignores_non_phoneme() {
        let collector = PhonemeCollector::new(64);
        let result = collector.handle(
            &[0i16; 16],
            &[
                SynthEvent::new(EventKind::Word { length: 4 }, 0, Duration::ZERO),
                phoneme("t"),
                SynthEvent::new(EventKind::Sentence, 0, Duration::ZERO),
                phoneme("s"),
                SynthEvent::new(
                    EventKind::Mark {
                        name: "m1".to_string(),
                    },
                    2,
                    Duration::ZERO,
                ),
                SynthEvent::new(EventKind::End, 4, Duration::ZERO),
                SynthEvent::terminator(),
            ],
        );
        assert_eq!(result, CallbackResult::Continue);
        assert_eq!(collector.contents(), "t s");
    }

    #[test]
    fn test_collector_shared_sink() {
        let sink = PhonemeSink::shared(64);
        let collector = PhonemeCollector::with_sink(Arc::clone(&sink));
        collector.handle(&[], &[phoneme("k"), SynthEvent::terminator()]);
        assert_eq!(sink.lock().unwrap().contents(), "k");
    }
}
