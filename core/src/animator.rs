//! Loading indicator driver.
//!
//! While a request is in flight the controller starts an animator that
//! advances the view's loading indicator through 1, 2, 3 dots and wraps
//! around. The animation is a plain tokio task owned by
//! [`LoadingAnimator`]: stopping aborts the task, and dropping the
//! animator stops it too, so a ticker can never outlive its owner.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::view::View;

/// Interval between dot updates.
pub const TICK_PERIOD: Duration = Duration::from_millis(500);

/// Owns the ticking task for the loading indicator.
///
/// At most one task runs per animator: starting again stops the previous
/// run first, so a view is never ticked by two cycles at once.
pub struct LoadingAnimator {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl LoadingAnimator {
    pub fn new() -> Self {
        LoadingAnimator::with_period(TICK_PERIOD)
    }

    /// An animator with a custom period. Tests shrink it; production code
    /// uses [`TICK_PERIOD`] via [`LoadingAnimator::new`].
    pub fn with_period(period: Duration) -> Self {
        LoadingAnimator { period, task: None }
    }

    /// Begin ticking `view` once per period, starting the dot cycle over
    /// at one. The first tick lands after one full period, not
    /// immediately.
    pub fn start<V: View>(&mut self, view: Arc<V>) {
        self.stop();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut dots: u8 = 1;
            loop {
                sleep(period).await;
                view.loading_tick(dots);
                dots = if dots == 3 { 1 } else { dots + 1 };
            }
        }));
    }

    /// Cancel the ticking task. Safe to call when nothing is running. A
    /// tick that already left its sleep may still land after this returns.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Default for LoadingAnimator {
    fn default() -> Self {
        LoadingAnimator::new()
    }
}

impl Drop for LoadingAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}
