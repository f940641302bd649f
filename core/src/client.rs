//! Stateless request builder and response interpreter for the execution
//! backend.
//!
//! # Design
//! `AttackClient` holds only the backend base URL and carries no mutable
//! state between calls. The submission is split into `build_attack`, which
//! produces an `HttpRequest`, and `parse_attack`, which consumes an
//! `HttpResponse` — the transport executes the actual round-trip in
//! between, keeping this module deterministic and free of I/O.
//!
//! `parse_attack` enforces the whole response contract: a top-level `error`
//! field signals failure regardless of HTTP status, a non-success status
//! without one falls back to a generic message, and a structurally sound
//! reply with zero entries is its own failure.

use crate::error::AttackError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{AttackRequest, AttackResponse};

/// Displayed when the backend fails without telling us why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Sans-io client for the execution backend's `/attack` endpoint.
#[derive(Debug, Clone)]
pub struct AttackClient {
    base_url: String,
}

impl AttackClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The URL every submission is posted to.
    pub fn endpoint(&self) -> String {
        format!("{}/attack", self.base_url)
    }

    /// Build the submission POST, carrying the raw form field values.
    pub fn build_attack(&self, input: &AttackRequest) -> Result<HttpRequest, AttackError> {
        let body =
            serde_urlencoded::to_string(input).map_err(|e| AttackError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            url: self.endpoint(),
            headers: vec![(
                "content-type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            )],
            body,
        })
    }

    /// Interpret the backend's reply.
    ///
    /// Checks run in order: decode first, then the error field / status,
    /// then the empty-results case. A top-level `error` wins even when the
    /// reply arrived as a 200.
    pub fn parse_attack(&self, response: HttpResponse) -> Result<AttackResponse, AttackError> {
        let payload: AttackResponse = serde_json::from_str(&response.body)
            .map_err(|e| AttackError::Decode(e.to_string()))?;

        let ok = (200..300).contains(&response.status);
        if !ok || payload.error.is_some() {
            let message = payload
                .error
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(AttackError::Server(message));
        }

        if payload.results.is_empty() {
            return Err(AttackError::EmptyResults);
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AttackClient {
        AttackClient::new("http://localhost:3000")
    }

    fn input() -> AttackRequest {
        AttackRequest {
            command_text: "curl -X POST https://example.com/api".to_string(),
            count: "3".to_string(),
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_attack_posts_to_the_attack_endpoint() {
        let req = client().build_attack(&input()).unwrap();
        assert_eq!(req.url, "http://localhost:3000/attack");
        assert_eq!(
            req.headers,
            vec![(
                "content-type".to_string(),
                "application/x-www-form-urlencoded".to_string()
            )]
        );
    }

    #[test]
    fn build_attack_form_encodes_the_raw_fields() {
        let req = client().build_attack(&input()).unwrap();
        assert_eq!(
            req.body,
            "command_text=curl+-X+POST+https%3A%2F%2Fexample.com%2Fapi&count=3"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = AttackClient::new("http://localhost:3000/");
        assert_eq!(client.endpoint(), "http://localhost:3000/attack");
    }

    #[test]
    fn parse_attack_success() {
        let body = r#"{"target":"https://x","method":"GET","results":[{"status":200,"body":"ok"}]}"#;
        let resp = client().parse_attack(response(200, body)).unwrap();
        assert_eq!(resp.target, "https://x");
        assert_eq!(resp.results.len(), 1);
    }

    #[test]
    fn error_field_beats_a_success_status() {
        let body = r#"{"target":"https://x","results":[{"status":200}],"error":"boom"}"#;
        let err = client().parse_attack(response(200, body)).unwrap_err();
        assert_eq!(err, AttackError::Server("boom".to_string()));
    }

    #[test]
    fn bad_status_with_error_field_uses_it() {
        let err = client()
            .parse_attack(response(400, r#"{"error":"count maximum 1000"}"#))
            .unwrap_err();
        assert_eq!(err, AttackError::Server("count maximum 1000".to_string()));
    }

    #[test]
    fn bad_status_without_error_field_falls_back() {
        let err = client().parse_attack(response(500, r#"{}"#)).unwrap_err();
        assert_eq!(err, AttackError::Server(GENERIC_FAILURE_MESSAGE.to_string()));
    }

    #[test]
    fn empty_results_is_its_own_failure() {
        let body = r#"{"target":"https://x","method":"GET","results":[]}"#;
        let err = client().parse_attack(response(200, body)).unwrap_err();
        assert_eq!(err, AttackError::EmptyResults);
    }

    #[test]
    fn unparseable_body_is_a_decode_failure() {
        let err = client()
            .parse_attack(response(200, "<html>gateway timeout</html>"))
            .unwrap_err();
        assert!(matches!(err, AttackError::Decode(_)));
    }
}
