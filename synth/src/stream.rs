//! Async streaming surface for the engine.

use crate::{
    segment::find_clause_boundary, CallbackResult, Clause, Engine, SynthChunk, SynthError,
};
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;

/// Interface for iterating over synthesis chunks.
#[async_trait]
pub trait SynthStream: Send + Sync {
    /// Returns the next chunk.
    /// Returns `SynthError::Done` when synthesis has finished.
    async fn next(&mut self) -> Result<SynthChunk, SynthError>;

    /// Closes the stream.
    fn close(&mut self);
}

/// Chunk stream backed by a synthesis task.
pub struct EventStream {
    rx: mpsc::Receiver<Result<SynthChunk, SynthError>>,
    closed: bool,
}

#[async_trait]
impl SynthStream for EventStream {
    async fn next(&mut self) -> Result<SynthChunk, SynthError> {
        if self.closed {
            return Err(SynthError::Closed);
        }
        match self.rx.recv().await {
            Some(result) => result,
            None => Err(SynthError::Done),
        }
    }

    fn close(&mut self) {
        self.closed = true;
        self.rx.close();
    }
}

impl Engine {
    /// Synthesizes text read from `reader`, yielding one chunk per
    /// clause as the text arrives.
    ///
    /// The engine (and its registered callback) moves into a spawned
    /// task; the callback still sees every batch before it is
    /// yielded. The stream ends after the final end-of-synthesis
    /// chunk, or early if the callback aborts.
    pub fn synthesize_stream(mut self, reader: Box<dyn AsyncRead + Send + Unpin>) -> EventStream {
        let (tx, rx) = mpsc::channel(16);

        tokio::spawn(async move {
            let mut reader = reader;
            let mut buf = String::new();
            let mut temp = [0u8; 1024];
            let mut base = 0usize;
            let mut audio_pos = Duration::ZERO;

            loop {
                match reader.read(&mut temp).await {
                    Ok(0) => break,
                    Ok(n) => {
                        if let Ok(s) = std::str::from_utf8(&temp[..n]) {
                            buf.push_str(s);
                        }
                        while let Some(idx) = find_clause_boundary(&buf, self.max_clause_chars())
                        {
                            if idx == 0 {
                                break;
                            }
                            let text: String = buf.drain(..idx).collect();
                            let clause = Clause { text, offset: 0 };
                            if !emit_clause(&mut self, &clause, base, &mut audio_pos, &tx).await {
                                return;
                            }
                            base += idx;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(SynthError::Io(e))).await;
                        return;
                    }
                }
            }

            // EOF: flush the incomplete tail, then finish
            if !buf.is_empty() {
                let tail_len = buf.len();
                let clause = Clause {
                    text: std::mem::take(&mut buf),
                    offset: 0,
                };
                if !emit_clause(&mut self, &clause, base, &mut audio_pos, &tx).await {
                    return;
                }
                base += tail_len;
            }

            let end = self.end_chunk(base, audio_pos);
            self.deliver(&end);
            let _ = tx.send(Ok(end)).await;
        });

        EventStream { rx, closed: false }
    }
}

/// Synthesizes and sends one clause. Returns false when the task
/// should stop (abort, error, or receiver gone).
async fn emit_clause(
    engine: &mut Engine,
    clause: &Clause,
    base: usize,
    audio_pos: &mut Duration,
    tx: &mpsc::Sender<Result<SynthChunk, SynthError>>,
) -> bool {
    match engine.clause_chunk(clause, base, audio_pos) {
        Ok(Some(chunk)) => {
            let result = engine.deliver(&chunk);
            if tx.send(Ok(chunk)).await.is_err() {
                return false;
            }
            result == CallbackResult::Continue
        }
        Ok(None) => true,
        Err(e) => {
            let _ = tx.send(Err(e)).await;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineConfig, EventKind, PhonemeCollector, PhonemeEventMode};
    use phonik_g2p::Language;

    fn ipa_engine() -> Engine {
        let mut config = EngineConfig::new(Language::EnUs);
        config.phoneme_events = PhonemeEventMode::Ipa;
        Engine::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_stream_yields_chunks() {
        let engine = ipa_engine();
        let reader = std::io::Cursor::new("One. Two.".as_bytes().to_vec());
        let mut stream = engine.synthesize_stream(Box::new(reader));

        let mut chunks = Vec::new();
        loop {
            match stream.next().await {
                Ok(chunk) => chunks.push(chunk),
                Err(SynthError::Done) => break,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        // two clause chunks plus the end chunk
        assert_eq!(chunks.len(), 3);
        assert!(chunks[2]
            .events
            .iter()
            .any(|e| e.kind == EventKind::End));
    }

    #[tokio::test]
    async fn test_stream_callback_sees_batches() {
        let mut engine = ipa_engine();
        let collector = PhonemeCollector::new(256);
        engine.set_callback(collector.callback());

        let reader = std::io::Cursor::new("test.".as_bytes().to_vec());
        let mut stream = engine.synthesize_stream(Box::new(reader));
        while stream.next().await.is_ok() {}

        assert_eq!(collector.contents(), "t ˈɛ s t  ");
    }

    #[tokio::test]
    async fn test_stream_close() {
        let engine = ipa_engine();
        let reader = std::io::Cursor::new("One. Two.".as_bytes().to_vec());
        let mut stream = engine.synthesize_stream(Box::new(reader));

        stream.close();
        assert!(matches!(stream.next().await, Err(SynthError::Closed)));
    }
}
