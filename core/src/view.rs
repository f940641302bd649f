//! Presentation seam between the controller and whatever surface displays
//! the attack.
//!
//! The controller calls these methods in a fixed order around each
//! submission; implementations only mutate their own display state and
//! never call back into the controller. All methods take `&self` because
//! the loading animator shares the view with the controller from a spawned
//! task — implementations use interior mutability where they need state.

use crate::render::{AttackSummary, ResultRow};

/// Display surface driven by [`AttackController`](crate::AttackController).
///
/// `Send + Sync + 'static` so a view can be held in an `Arc` and ticked
/// from the animator task. Stopping the animator does not flush ticks
/// already in flight, so a `loading_tick` may land immediately after
/// `hide_loading`; implementations should tolerate that (e.g. by ignoring
/// ticks while the loading indicator is hidden).
pub trait View: Send + Sync + 'static {
    /// Show the error banner with the given text, replacing any prior text.
    fn show_error(&self, message: &str);

    /// Hide the error banner.
    fn hide_error(&self);

    /// Show the warning banner with the given lines, replacing prior ones.
    fn show_warnings(&self, warnings: &[String]);

    /// Hide the warning banner.
    fn hide_warnings(&self);

    /// Set the submit control's label and whether it accepts input.
    fn set_submit_control(&self, label: &str, enabled: bool);

    /// Show the loading indicator in its initial state.
    fn show_loading(&self);

    /// Advance the loading indicator to `dots` dots (always 1, 2 or 3).
    fn loading_tick(&self, dots: u8);

    /// Hide the loading indicator.
    fn hide_loading(&self);

    /// Remove all result rows and the summary block.
    fn clear_results(&self);

    /// Replace the result area with a fresh summary and rows.
    fn render_results(&self, summary: &AttackSummary, rows: &[ResultRow]);
}
