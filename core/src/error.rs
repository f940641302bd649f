//! Error types for the attack submission lifecycle.
//!
//! # Design
//! Every variant's `Display` text is the exact banner copy shown to the
//! user — the controller converts errors into view messages at the
//! submission boundary and nothing propagates past it. `EmptyResults` gets
//! a dedicated variant because its display behavior differs from the other
//! failures (the results area is not re-cleared, see the controller).

use std::fmt;

use crate::http::TransportError;

/// Failure of one submission, classified by where it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    /// The network call itself failed — nothing came back.
    Transport(String),

    /// A reply arrived but its body was not valid payload JSON.
    Decode(String),

    /// The backend answered and reported failure, either through a
    /// non-success status or a top-level `error` field.
    Server(String),

    /// Structurally sound response with zero result entries.
    EmptyResults,

    /// The form payload could not be serialized before the call.
    Encode(String),
}

impl AttackError {
    /// Whether the failure branch wipes previously rendered results.
    ///
    /// Every failure clears except `EmptyResults`: the pre-flight clear has
    /// already run by the time that branch is reached, so it leaves the
    /// (empty) results area alone.
    pub fn clears_results(&self) -> bool {
        !matches!(self, AttackError::EmptyResults)
    }
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::Transport(reason) => write!(f, "Connection error: {reason}"),
            AttackError::Decode(reason) => {
                write!(f, "Malformed response from backend: {reason}")
            }
            AttackError::Server(message) => write!(f, "{message}"),
            AttackError::EmptyResults => write!(f, "No results returned from server"),
            AttackError::Encode(reason) => write!(f, "Failed to encode request: {reason}"),
        }
    }
}

impl std::error::Error for AttackError {}

impl From<TransportError> for AttackError {
    fn from(err: TransportError) -> Self {
        AttackError::Transport(err.reason().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_carries_connection_prefix() {
        let err = AttackError::Transport("timeout".to_string());
        assert_eq!(err.to_string(), "Connection error: timeout");
    }

    #[test]
    fn server_error_is_shown_verbatim() {
        let err = AttackError::Server("count maximum 1000".to_string());
        assert_eq!(err.to_string(), "count maximum 1000");
    }

    #[test]
    fn empty_results_has_fixed_message() {
        assert_eq!(
            AttackError::EmptyResults.to_string(),
            "No results returned from server"
        );
    }

    #[test]
    fn only_empty_results_skips_the_clear() {
        assert!(AttackError::Transport(String::new()).clears_results());
        assert!(AttackError::Decode(String::new()).clears_results());
        assert!(AttackError::Server(String::new()).clears_results());
        assert!(AttackError::Encode(String::new()).clears_results());
        assert!(!AttackError::EmptyResults.clears_results());
    }

    #[test]
    fn transport_error_converts() {
        let err: AttackError = TransportError::new("connection refused").into();
        assert_eq!(err, AttackError::Transport("connection refused".to_string()));
    }
}
