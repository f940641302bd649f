//! Turns a successful `AttackResponse` into display rows and summary
//! statistics.
//!
//! # Design
//! Everything here is pure data-to-data: the functions compute *what* to
//! show and presentation layers decide *how* (a terminal view maps a
//! [`StatusBucket`] to an ANSI color, some other surface might map it to a
//! CSS class). Rendering fully replaces prior rows — there is no diffing —
//! and row order always matches the order the backend reported.

use crate::types::{AttackResultEntry, AttackResponse};

/// Maximum number of characters shown from a result body.
pub const BODY_PREVIEW_CHARS: usize = 100;

/// Appended to a preview when the source text was cut.
pub const ELLIPSIS: &str = "...";

/// Displayed when an entry has neither a body nor an error text.
pub const EMPTY_BODY_PLACEHOLDER: &str = "N/A";

/// Displayed when an entry has neither a status nor an error text.
pub const MISSING_STATUS_LABEL: &str = "ERROR";

/// One of exactly five display categories for a result row.
///
/// Classification is total: every status value, and the absent case, lands
/// in exactly one bucket. Presentation layers color `Error` and
/// `ServerError` identically (red on light red), but they stay distinct
/// buckets — one means "no response at all", the other "the response was a
/// failure".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    /// The entry carries no HTTP status: that call failed in transport.
    Error,
    /// 200–299.
    Success,
    /// 300–399.
    Redirect,
    /// 400–499.
    ClientError,
    /// 500 and up, plus anything outside the recognized ranges (1xx, 0).
    ServerError,
}

impl StatusBucket {
    /// Classify an entry's status. First match wins.
    pub fn classify(status: Option<u16>) -> Self {
        match status {
            None => StatusBucket::Error,
            Some(s) if (200..300).contains(&s) => StatusBucket::Success,
            Some(s) if (300..400).contains(&s) => StatusBucket::Redirect,
            Some(s) if (400..500).contains(&s) => StatusBucket::ClientError,
            Some(_) => StatusBucket::ServerError,
        }
    }
}

/// Render instructions for one result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// 1-based position, matching the backend's ordering.
    pub position: usize,
    /// Status code if present, else the entry's error text, else "ERROR".
    pub status_label: String,
    pub bucket: StatusBucket,
    /// First 100 characters of the body (or error text, or "N/A").
    pub body_preview: String,
    /// True when the source text exceeded the preview limit.
    pub truncated: bool,
}

impl ResultRow {
    /// The preview with the ellipsis marker applied.
    pub fn body_cell(&self) -> String {
        if self.truncated {
            format!("{}{}", self.body_preview, ELLIPSIS)
        } else {
            self.body_preview.clone()
        }
    }
}

/// Summary block values for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackSummary {
    pub target: String,
    pub method: String,
    pub total: usize,
    pub success_count: usize,
}

impl AttackSummary {
    /// Success rate as the display string, e.g. `"66.67% (2/3)"`.
    ///
    /// A success is a status in `[200, 300)`. An empty response (which the
    /// controller never renders) reads as `"0.00% (0/0)"`.
    pub fn success_rate_label(&self) -> String {
        let rate = if self.total == 0 {
            0.0
        } else {
            self.success_count as f64 / self.total as f64 * 100.0
        };
        format!("{:.2}% ({}/{})", rate, self.success_count, self.total)
    }
}

/// Compute the summary block for a response.
pub fn summarize(response: &AttackResponse) -> AttackSummary {
    let success_count = response
        .results
        .iter()
        .filter(|entry| matches!(entry.status, Some(s) if (200..300).contains(&s)))
        .count();
    AttackSummary {
        target: response.target.clone(),
        method: response.method.clone(),
        total: response.results.len(),
        success_count,
    }
}

/// Build one row per entry, in the order the backend reported them.
pub fn build_rows(results: &[AttackResultEntry]) -> Vec<ResultRow> {
    results
        .iter()
        .enumerate()
        .map(|(index, entry)| build_row(entry, index))
        .collect()
}

fn build_row(entry: &AttackResultEntry, index: usize) -> ResultRow {
    let status_label = match (&entry.status, &entry.error) {
        (Some(status), _) => status.to_string(),
        (None, Some(error)) => error.clone(),
        (None, None) => MISSING_STATUS_LABEL.to_string(),
    };

    let source = entry
        .body
        .as_deref()
        .or(entry.error.as_deref())
        .unwrap_or(EMPTY_BODY_PLACEHOLDER);
    let (body_preview, truncated) = preview(source);

    ResultRow {
        position: index + 1,
        status_label,
        bucket: StatusBucket::classify(entry.status),
        body_preview,
        truncated,
    }
}

/// Cut `text` to the preview limit, counting characters rather than bytes
/// so multibyte bodies never split. Returns the preview and whether
/// anything was cut.
fn preview(text: &str) -> (String, bool) {
    let mut chars = text.chars();
    let cut: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    let truncated = chars.next().is_some();
    (cut, truncated)
}
