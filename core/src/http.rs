//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the submission round-trip as plain data. The core
//! crate builds an `HttpRequest` and interprets an `HttpResponse` without
//! ever touching the network — whatever sits behind the [`Transport`] trait
//! (ureq in the CLI, a scripted stub in tests) is responsible for the actual
//! I/O. This keeps the controller deterministic and testable without a
//! browser, a terminal, or a reachable backend.
//!
//! All fields use owned types (`String`, `Vec`) so values can move into the
//! blocking task that executes them without lifetime concerns.

use std::fmt;

/// An HTTP request described as plain data.
///
/// Built by `AttackClient::build_attack`. The execution endpoint accepts
/// exactly one verb, so every `HttpRequest` is executed as a POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then
/// passed to `AttackClient::parse_attack` for interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The network call itself failed: no response was produced at all.
///
/// Distinct from a response that *reports* failure — those still come back
/// as an `HttpResponse` and are interpreted by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    reason: String,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The underlying failure description (connection refused, timeout, ...).
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for TransportError {}

/// Executes one submission round-trip.
///
/// Implementations are synchronous; the controller moves the call onto
/// tokio's blocking pool so the loading animator keeps ticking while the
/// request is pending. A 4xx/5xx response is **not** a transport error —
/// implementations must return it as data and leave status interpretation
/// to the core.
pub trait Transport: Send + Sync + 'static {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
