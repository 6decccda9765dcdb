//! Error types for uidoc.
//!
//! Every decode failure is terminal for the enclosing call: there is no
//! partial-tree recovery or default substitution, so callers must treat any
//! `DecodeError` as "reject the whole document".

use thiserror::Error;

/// Errors that can occur while decoding a layout document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The `type` discriminator field is absent (or is not a string).
    #[error("missing `type` discriminator for {family}")]
    MissingDiscriminator {
        /// Union family being decoded
        family: &'static str,
    },

    /// The discriminator token is not in the family's closed table.
    #[error("unrecognized discriminator `{token}` for {family}")]
    UnrecognizedDiscriminator {
        /// Union family being decoded
        family: &'static str,
        /// The offending token as it appeared on the wire
        token: String,
    },

    /// The discriminator was recognized but the payload does not decode as
    /// that kind's payload type.
    #[error("payload mismatch for {family} `{token}`: {detail}")]
    PayloadMismatch {
        /// Union family being decoded
        family: &'static str,
        /// Discriminator token that selected the payload type
        token: &'static str,
        /// What went wrong with the payload
        detail: String,
    },

    /// Decode depth exceeded [`MAX_DECODE_DEPTH`](crate::codec::MAX_DECODE_DEPTH).
    ///
    /// The wire grammar is unbounded; this guard protects against stack
    /// exhaustion on adversarial input. Raw JSON nesting beyond the parser's
    /// own limit is reported through this variant as well, with `family` set
    /// to `"document"`.
    #[error("recursion limit exceeded while decoding {family}")]
    RecursionLimitExceeded {
        /// Union family at which the limit tripped
        family: &'static str,
    },

    /// Malformed JSON or a non-codec serde failure.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    /// Create a payload-mismatch error with a detail message.
    pub(crate) fn payload(
        family: &'static str,
        token: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self::PayloadMismatch { family, token, detail: detail.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DecodeError::MissingDiscriminator { family: "LayoutSchema" };
        assert_eq!(err.to_string(), "missing `type` discriminator for LayoutSchema");

        let err = DecodeError::UnrecognizedDiscriminator {
            family: "LayoutSchema",
            token: "Circle".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized discriminator `Circle` for LayoutSchema");

        let err = DecodeError::payload("Transition", "FadeInOut", "missing `settings` payload");
        assert_eq!(
            err.to_string(),
            "payload mismatch for Transition `FadeInOut`: missing `settings` payload"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DecodeError>();
    }
}
