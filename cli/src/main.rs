//! Terminal front end for the barrage controller core.
//!
//! Binds the core's view-model to stdout/stderr and its transport seam to
//! ureq, then runs exactly one submission. The exit code mirrors the
//! outcome: 0 rendered results, 1 the call failed, 2 validation blocked
//! the submission before any call.

mod term;
mod transport;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use owo_colors::OwoColorize;

use barrage_core::{AttackController, AttackRequest, SubmissionOutcome};

use crate::term::TerminalView;
use crate::transport::UreqTransport;

const DEFAULT_BACKEND: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(name = "barrage")]
#[command(about = "Repeat an HTTP request against a target and summarize every outcome", long_about = None)]
#[command(version)]
struct Cli {
    /// Command describing the request, e.g. "curl -X POST https://host/api"
    command_text: String,

    /// How many times to repeat the request (1 to 1000)
    #[arg(short = 'n', long, default_value = "1")]
    count: String,

    /// Execution backend base URL (falls back to BARRAGE_BACKEND)
    #[arg(long)]
    backend: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    print_notice();

    let backend = cli.backend.unwrap_or_else(|| {
        std::env::var("BARRAGE_BACKEND").unwrap_or_else(|_| DEFAULT_BACKEND.to_string())
    });

    let view = Arc::new(TerminalView::new());
    let transport = Arc::new(UreqTransport::new());
    let mut controller = AttackController::new(&backend, transport, view);

    let input = AttackRequest {
        command_text: cli.command_text,
        count: cli.count,
    };

    match controller.submit(&input).await {
        SubmissionOutcome::Succeeded { .. } => ExitCode::SUCCESS,
        SubmissionOutcome::Failed(_) => ExitCode::from(1),
        SubmissionOutcome::Blocked(_) => ExitCode::from(2),
    }
}

fn print_notice() {
    eprintln!("{}", "DISCLAIMER".yellow().bold());
    eprintln!("Use this tool responsibly and ethically. Any form of misuse, unauthorized");
    eprintln!("access, or illegal activity is strictly prohibited and is the sole");
    eprintln!("responsibility of the user. Intended for authorized security testing only.");
    eprintln!();
}
