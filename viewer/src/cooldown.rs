//! Per-command-kind rate limiting for gesture tokens.
//!
//! The detector emits tokens at camera frame rate, far faster than most
//! actions should fire. Each command kind carries a fixed minimum interval
//! between accepted invocations, independent of the poll cadence, so
//! bursty or duplicated tokens cannot churn the viewer state.

#[cfg(test)]
#[path = "cooldown_test.rs"]
mod cooldown_test;

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configured interval per command kind, in milliseconds. Kinds absent
/// from this table are never rate-limited.
const DURATIONS_MS: &[(&str, u64)] = &[
    ("next", 2000),
    ("prev", 2000),
    ("puntero", 50),
    ("zoom", 100),
    ("reset", 1000),
    ("toggle_draw_mode", 1500),
    ("start_draw", 50),
    ("drawing", 20),
    ("stop_draw", 50),
    ("start_erase", 50),
    ("erasing", 20),
    ("stop_erase", 50),
];

struct CooldownEntry {
    last_fired_at: Option<Instant>,
    duration: Duration,
}

/// Check-and-set rate limiter keyed by command kind.
pub struct CooldownGate {
    entries: HashMap<&'static str, CooldownEntry>,
}

impl CooldownGate {
    /// Gate with the standard per-kind durations.
    #[must_use]
    pub fn new() -> Self {
        let entries = DURATIONS_MS
            .iter()
            .map(|&(kind, ms)| {
                (kind, CooldownEntry { last_fired_at: None, duration: Duration::from_millis(ms) })
            })
            .collect();
        Self { entries }
    }

    /// Whether `kind` may fire now; on `true` the firing is recorded.
    pub fn can_proceed(&mut self, kind: &str) -> bool {
        self.can_proceed_at(kind, Instant::now())
    }

    /// Check-and-set with an explicit timestamp (for testing).
    ///
    /// Unconfigured kinds always proceed.
    pub fn can_proceed_at(&mut self, kind: &str, now: Instant) -> bool {
        let Some(entry) = self.entries.get_mut(kind) else {
            return true;
        };
        if let Some(last) = entry.last_fired_at {
            if now.duration_since(last) < entry.duration {
                return false;
            }
        }
        entry.last_fired_at = Some(now);
        true
    }

    /// Time left until `kind` may fire again. Zero for unconfigured kinds
    /// and for kinds whose window has already passed.
    #[must_use]
    pub fn remaining(&self, kind: &str) -> Duration {
        self.remaining_at(kind, Instant::now())
    }

    /// [`CooldownGate::remaining`] with an explicit timestamp.
    #[must_use]
    pub fn remaining_at(&self, kind: &str, now: Instant) -> Duration {
        let Some(entry) = self.entries.get(kind) else {
            return Duration::ZERO;
        };
        let Some(last) = entry.last_fired_at else {
            return Duration::ZERO;
        };
        entry.duration.saturating_sub(now.duration_since(last))
    }
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new()
    }
}
