//! Fixed-interval command polling.
//!
//! One task owns the whole pipeline: fetch, dispatch, render. A slow
//! render simply delays the next poll, so command batches can never
//! interleave or render out of order.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use viewer::render::PageSource;

use crate::detector::{DetectorClient, DetectorError};
use crate::display::Display;
use crate::present::Presenter;

/// Consecutive failures logged before the tracker goes quiet.
const LOGGED_FAILURES: u32 = 5;

/// Caps log noise when the detector endpoint goes away: the first few
/// consecutive failures are logged, the rest are counted silently until
/// a success resets the streak.
#[derive(Debug, Default)]
pub struct FailureTracker {
    consecutive: u32,
}

impl FailureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failure. Returns `true` while this streak should still
    /// be logged.
    pub fn record(&mut self) -> bool {
        self.consecutive = self.consecutive.saturating_add(1);
        self.consecutive < LOGGED_FAILURES
    }

    /// Record a success. Returns `true` when this ends a failure streak.
    pub fn reset(&mut self) -> bool {
        let was_failing = self.consecutive > 0;
        self.consecutive = 0;
        was_failing
    }

    #[must_use]
    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }
}

/// Handle one poll outcome: dispatch the token, surface failures on the
/// status line, then run mode decay. Log noise is capped by the
/// tracker, but the user-visible status updates on every failure.
fn handle_poll<S: PageSource, D: Display>(
    presenter: &mut Presenter<S, D>,
    failures: &mut FailureTracker,
    result: Result<Option<String>, DetectorError>,
) {
    match result {
        Ok(token) => {
            if failures.reset() {
                tracing::info!("command polling recovered");
            }
            if let Some(token) = token {
                tracing::debug!(%token, "command received");
                presenter.handle_token(&token);
            }
        }
        Err(err) => {
            let should_log = failures.record();
            match &err {
                DetectorError::Status { status } => {
                    presenter.status(&format!("server error: {status}"));
                }
                DetectorError::Http(_) => presenter.status("connection error"),
            }
            if should_log {
                tracing::warn!(error = %err, "command poll failed");
            } else if failures.consecutive() == LOGGED_FAILURES {
                tracing::warn!("still failing, suppressing further poll errors");
            }
        }
    }
    presenter.tick();
}

/// Poll the detector until the task is dropped.
///
/// Every tick fetches at most one command token. Fetch failures never
/// abort the loop.
pub async fn run<S: PageSource, D: Display>(
    client: &DetectorClient,
    presenter: &mut Presenter<S, D>,
    poll_interval: Duration,
) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut failures = FailureTracker::new();

    loop {
        ticker.tick().await;
        handle_poll(presenter, &mut failures, client.fetch_command().await);
    }
}
