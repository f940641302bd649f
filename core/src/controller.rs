//! The submission state machine.
//!
//! # Design
//! [`AttackController`] owns one submission at a time. `submit` walks the
//! full lifecycle — validate, gate, call, settle — and drives the [`View`]
//! through the same sequence of display updates on every path. The network
//! call goes through the sans-io [`AttackClient`] and a [`Transport`]
//! implementation running on tokio's blocking pool, so the loading
//! animator keeps ticking while the call is pending.
//!
//! Exactly one submission can be in flight: `submit` takes `&mut self`, so
//! a second state machine over the same controller is unrepresentable, and
//! the disabled submit control communicates the same gate to the user.
//!
//! `submit` never returns `Err`. Every failure is converted into a view
//! message and a [`SubmissionOutcome`], and the submit control is restored
//! on every path that disabled it.

use std::sync::Arc;

use log::debug;

use crate::animator::LoadingAnimator;
use crate::client::AttackClient;
use crate::error::AttackError;
use crate::http::Transport;
use crate::render::{build_rows, summarize, AttackSummary, ResultRow};
use crate::types::{AttackRequest, AttackResponse, SubmissionState};
use crate::validate::{validate, ValidationReport};
use crate::view::View;

/// Submit control label while no submission is running.
pub const SUBMIT_READY_LABEL: &str = "Run Attack";

/// Submit control label while a submission is in flight.
pub const SUBMIT_RUNNING_LABEL: &str = "Running...";

/// How one call to [`AttackController::submit`] settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Validation errors stopped the submission before any network call.
    Blocked(ValidationReport),
    /// The backend returned a renderable response.
    Succeeded {
        summary: AttackSummary,
        rows: Vec<ResultRow>,
    },
    /// The call was issued but settled in failure.
    Failed(AttackError),
}

/// Drives one submission at a time from raw input to a settled outcome.
pub struct AttackController<T: Transport, V: View> {
    client: AttackClient,
    transport: Arc<T>,
    view: Arc<V>,
    animator: LoadingAnimator,
    state: SubmissionState,
}

impl<T: Transport, V: View> AttackController<T, V> {
    /// A controller for the execution backend at `backend_base`.
    ///
    /// Transport and view are shared handles: the view is also ticked from
    /// the animator task, and the transport moves onto the blocking pool
    /// per call.
    pub fn new(backend_base: &str, transport: Arc<T>, view: Arc<V>) -> Self {
        AttackController::with_animator(backend_base, transport, view, LoadingAnimator::new())
    }

    /// Same as [`AttackController::new`] with a caller-supplied animator,
    /// so tests can shrink the tick period.
    pub fn with_animator(
        backend_base: &str,
        transport: Arc<T>,
        view: Arc<V>,
        animator: LoadingAnimator,
    ) -> Self {
        AttackController {
            client: AttackClient::new(backend_base),
            transport,
            view,
            animator,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The user edited the command text. A non-empty edit hides the error
    /// banner so stale failures do not linger while the user corrects the
    /// input.
    pub fn input_changed(&self, command_text: &str) {
        if !command_text.is_empty() {
            self.view.hide_error();
        }
    }

    /// Run one full submission: validate, gate, call, settle.
    ///
    /// Display updates happen in a fixed order. Blocked submissions show
    /// the joined errors and clear results without ever touching the
    /// submit control or the animator. In-flight submissions disable the
    /// control, show and animate the loading indicator, clear prior
    /// results, await settlement, then unconditionally restore the
    /// control.
    pub async fn submit(&mut self, input: &AttackRequest) -> SubmissionOutcome {
        self.state = SubmissionState::Validating;
        let report = validate(&input.command_text, &input.count);

        self.view.hide_error();
        self.view.hide_warnings();

        if report.is_blocked() {
            debug!("submission blocked: {}", report.joined_errors());
            self.state = SubmissionState::Blocked;
            self.view.show_error(&report.joined_errors());
            self.view.clear_results();
            self.state = SubmissionState::Idle;
            return SubmissionOutcome::Blocked(report);
        }

        if !report.warnings.is_empty() {
            self.view.show_warnings(&report.warnings);
        }

        self.state = SubmissionState::InFlight;
        debug!("submitting to {}", self.client.endpoint());
        self.view.set_submit_control(SUBMIT_RUNNING_LABEL, false);
        self.view.show_loading();
        self.animator.start(Arc::clone(&self.view));
        self.view.clear_results();

        let outcome = match self.perform(input).await {
            Ok(response) => {
                debug!("submission succeeded with {} results", response.results.len());
                self.state = SubmissionState::Succeeded;
                self.view.hide_loading();
                self.animator.stop();
                self.view.hide_error();
                self.view.hide_warnings();
                let summary = summarize(&response);
                let rows = build_rows(&response.results);
                self.view.render_results(&summary, &rows);
                SubmissionOutcome::Succeeded { summary, rows }
            }
            Err(err) => {
                debug!("submission failed: {err}");
                self.state = SubmissionState::Failed;
                self.view.show_error(&err.to_string());
                self.view.hide_loading();
                self.animator.stop();
                if err.clears_results() {
                    self.view.clear_results();
                }
                SubmissionOutcome::Failed(err)
            }
        };

        self.view.set_submit_control(SUBMIT_READY_LABEL, true);
        self.state = SubmissionState::Idle;
        outcome
    }

    /// Build, execute and interpret one round-trip. The sync transport
    /// runs on the blocking pool so this future stays suspension-friendly
    /// for the animator task.
    async fn perform(&self, input: &AttackRequest) -> Result<AttackResponse, AttackError> {
        let request = self.client.build_attack(input)?;
        let transport = Arc::clone(&self.transport);
        let response = tokio::task::spawn_blocking(move || transport.execute(request))
            .await
            .map_err(|err| AttackError::Transport(err.to_string()))??;
        self.client.parse_attack(response)
    }
}
