//! Structural validation of raw form input.
//!
//! # Design
//! Rules are evaluated independently — every violation is collected rather
//! than short-circuiting on the first one, so the user sees the full list
//! in a single pass. The function is pure: no side effects, identical input
//! always yields an identical report. Semantic correctness of the command
//! (whether it actually describes a working request) is the backend's
//! problem, not ours.

/// Minimum command length, counted in characters after trimming.
pub const MIN_COMMAND_CHARS: usize = 10;

/// Inclusive bounds for the request count.
pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 1000;

/// Counts above this (and within bounds) draw a non-blocking warning.
pub const LARGE_COUNT_THRESHOLD: i64 = 100;

/// Findings from one validation pass.
///
/// Invariant: a non-empty `errors` list blocks submission unconditionally;
/// `warnings` are advisory and displayed but never block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when submission must not proceed.
    pub fn is_blocked(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The single banner message for blocked submissions.
    pub fn joined_errors(&self) -> String {
        self.errors.join(" | ")
    }
}

/// Check raw form input against the structural rules.
///
/// `count_raw` is the count field exactly as typed; it must parse as a
/// strict integer. Counts in `(100, 1000]` pass with a warning about
/// runtime.
pub fn validate(command_text: &str, count_raw: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    let trimmed = command_text.trim();
    if trimmed.is_empty() {
        report.errors.push("Command cannot be empty".to_string());
    } else if trimmed.chars().count() < MIN_COMMAND_CHARS {
        report.errors.push(format!(
            "Command too short (min {MIN_COMMAND_CHARS} characters)"
        ));
    }

    let lowered = command_text.to_lowercase();
    if !lowered.contains("http://") && !lowered.contains("https://") {
        report.errors.push(
            "Command must contain URL with protocol (http:// or https://)".to_string(),
        );
    }

    match count_raw.trim().parse::<i64>() {
        Err(_) => {
            report
                .errors
                .push("Request count must be a number".to_string());
        }
        Ok(n) => {
            if n < MIN_COUNT {
                report
                    .errors
                    .push(format!("Request count minimum {MIN_COUNT}"));
            } else if n > MAX_COUNT {
                report
                    .errors
                    .push(format!("Request count maximum {MAX_COUNT}"));
            }

            if n > LARGE_COUNT_THRESHOLD && n <= MAX_COUNT {
                report.warnings.push(format!(
                    "Large request count ({n}), may take a long time"
                ));
            }
        }
    }

    report
}
