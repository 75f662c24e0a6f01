//! Error type for synthesis operations.

/// Error type for synthesis operations.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("end of stream")]
    Done,
    #[error("closed")]
    Closed,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("g2p error: {0}")]
    G2P(#[from] phonik_g2p::G2PError),
    #[error("unknown phoneme event mode: {0}")]
    UnknownMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(SynthError::Done.to_string(), "end of stream");
        assert_eq!(SynthError::Closed.to_string(), "closed");

        let err = SynthError::UnknownMode("loud".to_string());
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_error_from_g2p() {
        let err: SynthError = phonik_g2p::G2PError::PhonemizeFailed("x".to_string()).into();
        assert!(matches!(err, SynthError::G2P(_)));
    }
}
