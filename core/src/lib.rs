//! Client-side controller core for the barrage request repeater.
//!
//! # Overview
//! Validates raw form input, drives the single-in-flight submission state
//! machine, and turns backend responses into display rows — all against a
//! `View` trait instead of a concrete surface, and a `Transport` trait
//! instead of a concrete HTTP stack (host-does-IO pattern). The consumer
//! executes the actual round-trip, making the core fully deterministic and
//! testable.
//!
//! # Design
//! - `AttackClient` is stateless — it holds only the backend base URL; the
//!   submission round-trip is split into `build_attack` (produces request)
//!   and `parse_attack` (consumes response), so the I/O boundary is
//!   explicit.
//! - `AttackController` owns the lifecycle: validate → gate → call →
//!   settle, with the loading animator ticking as a tokio task while the
//!   transport runs on the blocking pool.
//! - Validation and rendering are pure functions; everything that touches
//!   a clock or a socket sits behind an owned handle or a trait.
//! - DTOs are defined independently from the mock-backend crate;
//!   integration tests catch schema drift.

pub mod animator;
pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod render;
pub mod types;
pub mod validate;
pub mod view;

pub use animator::LoadingAnimator;
pub use client::AttackClient;
pub use controller::{AttackController, SubmissionOutcome};
pub use error::AttackError;
pub use http::{HttpRequest, HttpResponse, Transport, TransportError};
pub use render::{build_rows, summarize, AttackSummary, ResultRow, StatusBucket};
pub use types::{AttackRequest, AttackResponse, AttackResultEntry, SubmissionState};
pub use validate::{validate, ValidationReport};
pub use view::View;
