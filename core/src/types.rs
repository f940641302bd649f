//! Domain DTOs for the attack submission API.
//!
//! # Design
//! These types mirror the execution backend's schema but are defined
//! independently from the mock-backend crate; integration tests catch
//! schema drift. Response fields default when absent because the backend's
//! error replies carry nothing but `{"error": "..."}`.

use serde::{Deserialize, Serialize};

/// Raw form input for one attack submission, exactly as the user typed it.
///
/// `count` stays a string: the submission carries the form field values
/// verbatim and the validator owns parsing. These field names are also the
/// wire names of the form-encoded POST body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttackRequest {
    pub command_text: String,
    pub count: String,
}

/// One outcome from one repeated call.
///
/// Exactly one of `status`+`body` or `error` is meaningful per entry; a
/// missing `status` signals a transport-level failure for that call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttackResultEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything the backend reports about one submission.
///
/// Created by the backend, consumed once by the renderer, then discarded —
/// nothing is persisted. A top-level `error` signals failure regardless of
/// the HTTP status the reply arrived with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttackResponse {
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub results: Vec<AttackResultEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Where the controller currently is in the submission lifecycle.
///
/// Owned exclusively by the controller and mutated only by its submission
/// handler; `Blocked`, `Succeeded` and `Failed` are terminal per submission
/// and collapse back to `Idle` before `submit` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Blocked,
    InFlight,
    Succeeded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_with_status_and_body_deserializes() {
        let entry: AttackResultEntry =
            serde_json::from_str(r#"{"status":200,"body":"ok"}"#).unwrap();
        assert_eq!(entry.status, Some(200));
        assert_eq!(entry.body.as_deref(), Some("ok"));
        assert!(entry.error.is_none());
    }

    #[test]
    fn entry_with_only_error_deserializes() {
        let entry: AttackResultEntry =
            serde_json::from_str(r#"{"error":"connection refused"}"#).unwrap();
        assert!(entry.status.is_none());
        assert!(entry.body.is_none());
        assert_eq!(entry.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn entry_with_null_status_deserializes() {
        // Backends may emit {"status": null, "body": "Error: ..."} for
        // calls that blew up inside the executor.
        let entry: AttackResultEntry =
            serde_json::from_str(r#"{"status":null,"body":"Error: boom"}"#).unwrap();
        assert!(entry.status.is_none());
        assert_eq!(entry.body.as_deref(), Some("Error: boom"));
    }

    #[test]
    fn full_response_deserializes() {
        let resp: AttackResponse = serde_json::from_str(
            r#"{"target":"https://x","method":"GET","results":[{"status":200,"body":"ok"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.target, "https://x");
        assert_eq!(resp.method, "GET");
        assert_eq!(resp.results.len(), 1);
        assert!(resp.error.is_none());
    }

    #[test]
    fn bare_error_payload_deserializes() {
        let resp: AttackResponse = serde_json::from_str(r#"{"error":"count maximum 1000"}"#).unwrap();
        assert_eq!(resp.error.as_deref(), Some("count maximum 1000"));
        assert!(resp.target.is_empty());
        assert!(resp.method.is_empty());
        assert!(resp.results.is_empty());
    }

    #[test]
    fn request_serializes_to_form_fields() {
        let req = AttackRequest {
            command_text: "curl https://example.com/api".to_string(),
            count: "5".to_string(),
        };
        let form = serde_urlencoded::to_string(&req).unwrap();
        assert_eq!(form, "command_text=curl+https%3A%2F%2Fexample.com%2Fapi&count=5");
    }
}
