//! Transient flash notices.
//!
//! Notices show for a fixed window, then spend a short exit phase (the
//! fade-out a graphical host would animate) before disappearing. The
//! board never reads a clock; callers pass `Instant`s in.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use std::time::{Duration, Instant};

/// How long a notice stays fully visible.
const DISPLAY_WINDOW: Duration = Duration::from_millis(6000);
/// Exit phase length before the notice is removed.
const EXIT_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Shown { since: Instant },
    Leaving { since: Instant },
}

/// One flash message on the board.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
    phase: Phase,
}

impl Notice {
    /// Whether the notice is in its exit phase.
    #[must_use]
    pub fn leaving(&self) -> bool {
        matches!(self.phase, Phase::Leaving { .. })
    }
}

/// Holds the currently visible notices, newest last.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.post_at(kind, text, Instant::now())
    }

    pub fn post_at(&mut self, kind: NoticeKind, text: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let text = text.into();
        tracing::info!(?kind, notice = %text, "notice posted");
        self.notices.push(Notice {
            id,
            kind,
            text,
            phase: Phase::Shown { since: now },
        });
        id
    }

    // Kind shorthands, mirroring how callers think about them.

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.post(NoticeKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.post(NoticeKind::Error, text)
    }

    pub fn warning(&mut self, text: impl Into<String>) -> u64 {
        self.post(NoticeKind::Warning, text)
    }

    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        self.post(NoticeKind::Info, text)
    }

    /// Start the exit phase early (the user clicked the notice away).
    /// Unknown ids and already-leaving notices are ignored.
    pub fn dismiss_at(&mut self, id: u64, now: Instant) {
        if let Some(notice) = self.notices.iter_mut().find(|n| n.id == id) {
            if !notice.leaving() {
                notice.phase = Phase::Leaving { since: now };
            }
        }
    }

    /// Advance phases: expired notices start leaving, finished exits are
    /// removed. Returns `true` when anything changed.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for notice in &mut self.notices {
            if let Phase::Shown { since } = notice.phase {
                if now.duration_since(since) >= DISPLAY_WINDOW {
                    notice.phase = Phase::Leaving { since: now };
                    changed = true;
                }
            }
        }
        let before = self.notices.len();
        self.notices.retain(|n| match n.phase {
            Phase::Shown { .. } => true,
            Phase::Leaving { since } => now.duration_since(since) < EXIT_WINDOW,
        });
        changed || self.notices.len() != before
    }

    /// Every notice still on the board, exit phase included.
    #[must_use]
    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
