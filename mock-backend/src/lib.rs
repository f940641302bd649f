//! Deterministic stand-in for the attack execution backend.
//!
//! Accepts the same `POST /attack` form submission as the real service,
//! re-validates it server-side, parses the command for a target URL and
//! method, and fabricates one result entry per requested repetition. The
//! outcome is keyed off the target URL's path so tests can provoke every
//! client branch without touching the network:
//!
//! - `/status/{codes}` — entries cycle through the comma-separated codes
//! - `/empty` — a well-formed response with zero entries
//! - `/error` — `400` with a top-level `error` field
//! - `/unreachable` — entries carrying only an `error`, no status
//! - anything else — all entries succeed with status 200

use std::sync::LazyLock;

use axum::{http::StatusCode, routing::post, Form, Json, Router};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// First `http://` or `https://` token in the command.
/// Example: `curl -X POST https://example.com/api`
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(https?://[^\s'"]+)"#).unwrap());

/// Explicit method flag. Example: `-X POST` or `-X 'DELETE'`
static METHOD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"-X\s+['"]?([A-Z]+)['"]?"#).unwrap());

/// Fabricated bodies are clipped to this many characters, like the real
/// service clips upstream response text.
const BODY_CHAR_LIMIT: usize = 200;

const COUNT_MAX: i64 = 1000;

/// Raw form fields of one submission. Both default so that a missing
/// field reads as empty and fails validation instead of rejecting the
/// form decode.
#[derive(Debug, Deserialize)]
pub struct AttackParams {
    #[serde(default)]
    pub command_text: String,
    #[serde(default)]
    pub count: String,
}

/// One fabricated call outcome. Absent fields are omitted from the JSON,
/// matching the variable shapes the real executor produces.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AttackOutcome {
    pub target: String,
    pub method: String,
    pub results: Vec<SimulatedResult>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Target and method extracted from the command text.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    pub target: Option<String>,
    pub method: String,
}

pub fn app() -> Router {
    Router::new().route("/attack", post(run_attack))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn run_attack(
    Form(params): Form<AttackParams>,
) -> Result<Json<AttackOutcome>, (StatusCode, Json<ErrorBody>)> {
    let command = params.command_text.trim();
    validate_command(command).map_err(bad_request)?;
    let count = validate_count(params.count.trim()).map_err(bad_request)?;

    let parsed = parse_command(command);
    let target = parsed.target.ok_or_else(|| {
        bad_request(
            "URL not found in command. Make sure it contains a URL with http:// or https://"
                .to_string(),
        )
    })?;

    let results = simulate(&target, count as usize).map_err(bad_request)?;
    Ok(Json(AttackOutcome {
        target,
        method: parsed.method,
        results,
    }))
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message }))
}

fn validate_command(command: &str) -> Result<(), String> {
    if command.is_empty() {
        return Err("Command cannot be empty".to_string());
    }
    if command.chars().count() < 10 {
        return Err("Command too short (min 10 characters)".to_string());
    }
    Ok(())
}

fn validate_count(raw: &str) -> Result<i64, String> {
    if raw.is_empty() {
        return Err("Parameter 'count' must be provided".to_string());
    }
    let count: i64 = raw
        .parse()
        .map_err(|_| format!("count must be a number, not '{raw}'"))?;
    if count <= 0 {
        return Err("count must be greater than 0 (minimum 1)".to_string());
    }
    if count > COUNT_MAX {
        return Err(format!("count maximum {COUNT_MAX}, you entered {count}"));
    }
    Ok(count)
}

/// Extract the target URL and method from a submitted command. The first
/// `http(s)://` token wins; `-X METHOD` overrides the GET default.
pub fn parse_command(command: &str) -> ParsedCommand {
    let normalized = command.replace("\\\n", " ").replace('\n', " ");
    let target = URL_REGEX.captures(&normalized).map(|caps| {
        caps[1]
            .trim_matches(|c| c == '\'' || c == '"')
            .to_string()
    });
    let method = METHOD_REGEX
        .captures(&normalized)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| "GET".to_string());
    ParsedCommand { target, method }
}

/// The path portion of a target URL, query and fragment stripped.
fn url_path(target: &str) -> &str {
    let rest = target
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(target);
    let path = match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => "/",
    };
    path.split(['?', '#']).next().unwrap_or("/")
}

/// Fabricate the per-call outcomes for one submission. `Err` simulates an
/// execution-level failure that the handler reports as `400 {"error"}`.
fn simulate(target: &str, count: usize) -> Result<Vec<SimulatedResult>, String> {
    let path = url_path(target);

    if let Some(spec) = path.strip_prefix("/status/") {
        let codes: Vec<u16> = spec
            .split('/')
            .next()
            .unwrap_or("")
            .split(',')
            .filter_map(|code| code.parse().ok())
            .collect();
        let codes = if codes.is_empty() { vec![200] } else { codes };
        return Ok((0..count)
            .map(|i| {
                let status = codes[i % codes.len()];
                success_entry(status, target)
            })
            .collect());
    }

    match path {
        "/empty" => Ok(Vec::new()),
        "/error" => Err("Execution error: simulated backend failure".to_string()),
        "/unreachable" => Ok((0..count)
            .map(|_| SimulatedResult {
                status: None,
                body: None,
                error: Some(clip(format!("connection refused: {target}"))),
            })
            .collect()),
        _ => Ok((0..count).map(|_| success_entry(200, target)).collect()),
    }
}

fn success_entry(status: u16, target: &str) -> SimulatedResult {
    SimulatedResult {
        status: Some(status),
        body: Some(clip(format!("simulated {status} response from {target}"))),
        error: None,
    }
}

fn clip(text: String) -> String {
    if text.chars().count() <= BODY_CHAR_LIMIT {
        text
    } else {
        text.chars().take(BODY_CHAR_LIMIT).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_url_with_get_default() {
        let parsed = parse_command("curl https://example.com/api");
        assert_eq!(parsed.target.as_deref(), Some("https://example.com/api"));
        assert_eq!(parsed.method, "GET");
    }

    #[test]
    fn parses_explicit_method_flag() {
        let parsed = parse_command("curl -X POST https://example.com/api");
        assert_eq!(parsed.method, "POST");
    }

    #[test]
    fn parses_quoted_method_and_url() {
        let parsed = parse_command(r#"curl -X 'DELETE' "https://example.com/items/1""#);
        assert_eq!(parsed.method, "DELETE");
        assert_eq!(
            parsed.target.as_deref(),
            Some("https://example.com/items/1")
        );
    }

    #[test]
    fn first_url_wins() {
        let parsed = parse_command("curl http://a.example/one http://b.example/two");
        assert_eq!(parsed.target.as_deref(), Some("http://a.example/one"));
    }

    #[test]
    fn command_without_url_has_no_target() {
        let parsed = parse_command("curl --verbose example.com");
        assert_eq!(parsed.target, None);
    }

    #[test]
    fn multiline_commands_are_flattened() {
        let parsed = parse_command("curl -X PUT \\\nhttps://example.com/api");
        assert_eq!(parsed.method, "PUT");
        assert_eq!(parsed.target.as_deref(), Some("https://example.com/api"));
    }

    #[test]
    fn url_path_strips_host_query_and_fragment() {
        assert_eq!(url_path("https://example.com/status/200?x=1"), "/status/200");
        assert_eq!(url_path("https://example.com/a/b#frag"), "/a/b");
        assert_eq!(url_path("https://example.com"), "/");
    }

    #[test]
    fn status_codes_cycle_over_count() {
        let results = simulate("https://x.test/status/200,500", 5).unwrap();
        let statuses: Vec<Option<u16>> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![Some(200), Some(500), Some(200), Some(500), Some(200)]
        );
    }

    #[test]
    fn unparseable_status_spec_falls_back_to_200() {
        let results = simulate("https://x.test/status/abc", 2).unwrap();
        assert!(results.iter().all(|r| r.status == Some(200)));
    }

    #[test]
    fn empty_path_yields_zero_entries() {
        assert!(simulate("https://x.test/empty", 5).unwrap().is_empty());
    }

    #[test]
    fn error_path_is_an_execution_failure() {
        let err = simulate("https://x.test/error", 1).unwrap_err();
        assert_eq!(err, "Execution error: simulated backend failure");
    }

    #[test]
    fn unreachable_entries_carry_only_an_error() {
        let results = simulate("https://x.test/unreachable", 2).unwrap();
        assert_eq!(results.len(), 2);
        for entry in &results {
            assert_eq!(entry.status, None);
            assert_eq!(entry.body, None);
            assert!(entry.error.as_deref().unwrap().contains("connection refused"));
        }
    }

    #[test]
    fn count_validation_bounds() {
        assert!(validate_count("1").is_ok());
        assert!(validate_count("1000").is_ok());
        assert_eq!(
            validate_count("0").unwrap_err(),
            "count must be greater than 0 (minimum 1)"
        );
        assert_eq!(
            validate_count("1001").unwrap_err(),
            "count maximum 1000, you entered 1001"
        );
        assert_eq!(
            validate_count("abc").unwrap_err(),
            "count must be a number, not 'abc'"
        );
        assert_eq!(
            validate_count("").unwrap_err(),
            "Parameter 'count' must be provided"
        );
    }

    #[test]
    fn absent_fields_are_omitted_from_entry_json() {
        let entry = SimulatedResult {
            status: Some(200),
            body: Some("ok".to_string()),
            error: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["body"], "ok");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn fabricated_bodies_stay_within_the_clip_limit() {
        let long_target = format!("https://example.com/{}", "a".repeat(300));
        let results = simulate(&long_target, 1).unwrap();
        let body = results[0].body.as_deref().unwrap();
        assert!(body.chars().count() <= BODY_CHAR_LIMIT);
    }
}
