//! Terminal implementation of the core's view-model.
//!
//! Progress and diagnostics go to stderr, rendered results to stdout. A
//! terminal is append-only, so the hide/clear methods that retract
//! on-screen state elsewhere are mostly no-ops here — stale output simply
//! scrolls away. The one piece of transient state is the progress line,
//! which is redrawn in place with carriage returns and blanked when the
//! submission settles.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

use barrage_core::{AttackSummary, ResultRow, StatusBucket, View};

/// Widest text the progress line can hold ("Running..."), padded a little,
/// used to blank the line out.
const PROGRESS_LINE_WIDTH: usize = 16;

pub struct TerminalView {
    loading: AtomicBool,
}

impl TerminalView {
    pub fn new() -> Self {
        TerminalView {
            loading: AtomicBool::new(false),
        }
    }

    fn clear_progress_line(&self) {
        if self.loading.load(Ordering::SeqCst) {
            eprint!("\r{:width$}\r", "", width = PROGRESS_LINE_WIDTH);
            let _ = io::stderr().flush();
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        TerminalView::new()
    }
}

impl View for TerminalView {
    fn show_error(&self, message: &str) {
        self.clear_progress_line();
        eprintln!("{} {message}", "Error:".red().bold());
    }

    fn hide_error(&self) {
        // Printed lines cannot be retracted; stale errors scroll away.
    }

    fn show_warnings(&self, warnings: &[String]) {
        for warning in warnings {
            eprintln!("{} {warning}", "Warning:".yellow().bold());
        }
    }

    fn hide_warnings(&self) {}

    fn set_submit_control(&self, _label: &str, _enabled: bool) {
        // No persistent control on a terminal; the progress line already
        // conveys the running state.
    }

    fn show_loading(&self) {
        self.loading.store(true, Ordering::SeqCst);
        eprint!("Running");
        let _ = io::stderr().flush();
    }

    fn loading_tick(&self, dots: u8) {
        // Late ticks can race the settle path; once the line is gone they
        // must not redraw it.
        if !self.loading.load(Ordering::SeqCst) {
            return;
        }
        eprint!("\rRunning{:<3}", ".".repeat(dots as usize));
        let _ = io::stderr().flush();
    }

    fn hide_loading(&self) {
        self.clear_progress_line();
        self.loading.store(false, Ordering::SeqCst);
    }

    fn clear_results(&self) {
        // Results are printed once per submission; nothing to take back.
    }

    fn render_results(&self, summary: &AttackSummary, rows: &[ResultRow]) {
        println!();
        println!("Target:  {}", summary.target);
        println!("Method:  {}", summary.method);
        println!("Total:   {}", summary.total);
        println!("Success: {}", summary.success_rate_label());
        println!();
        println!("{:>4}  {:<8}  Response", "#", "Status");
        for row in rows {
            // Pad before coloring: ANSI escapes would break the width.
            let label = format!("{:<8}", row.status_label);
            println!(
                "{:>4}  {}  {}",
                row.position,
                paint(row.bucket, &label),
                row.body_cell()
            );
        }
    }
}

fn paint(bucket: StatusBucket, label: &str) -> String {
    match bucket {
        StatusBucket::Success => label.green().to_string(),
        StatusBucket::Redirect => label.cyan().to_string(),
        StatusBucket::ClientError => label.yellow().to_string(),
        StatusBucket::Error | StatusBucket::ServerError => label.red().to_string(),
    }
}
