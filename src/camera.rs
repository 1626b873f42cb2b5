//! Camera availability probing for the on-screen indicator.
//!
//! The gesture detector is useless without a camera, so the host keeps
//! an indicator current: a background task probes on a slow interval
//! and publishes changes over a watch channel, and `check_now` serves
//! the focus-style immediate recheck.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Why no camera can be used right now, when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    NoPermission,
    InUse,
    NotDetected,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoPermission => "No permission",
            Self::InUse => "In use",
            Self::NotDetected => "Not detected",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraStatus {
    Available,
    /// `None` when the failure could not be classified.
    Unavailable(Option<UnavailableReason>),
}

/// How the host discovers capture devices. Swapped for a fake in tests.
pub trait CameraProbe {
    fn probe(&self) -> CameraStatus;
}

/// Probe backed by the kernel's video device nodes.
#[derive(Debug, Clone)]
pub struct DeviceProbe {
    dev_dir: PathBuf,
}

impl Default for DeviceProbe {
    fn default() -> Self {
        Self { dev_dir: PathBuf::from("/dev") }
    }
}

impl DeviceProbe {
    #[must_use]
    pub fn new(dev_dir: impl Into<PathBuf>) -> Self {
        Self { dev_dir: dev_dir.into() }
    }
}

impl CameraProbe for DeviceProbe {
    fn probe(&self) -> CameraStatus {
        let entries = match std::fs::read_dir(&self.dev_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                return CameraStatus::Unavailable(Some(UnavailableReason::NoPermission));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return CameraStatus::Unavailable(Some(UnavailableReason::NotDetected));
            }
            Err(_) => return CameraStatus::Unavailable(None),
        };
        let found = entries
            .filter_map(Result::ok)
            .filter_map(|e| e.file_name().into_string().ok())
            .any(|name| name.starts_with("video"));
        if found {
            CameraStatus::Available
        } else {
            CameraStatus::Unavailable(Some(UnavailableReason::NotDetected))
        }
    }
}

/// Probe plus change tracking: only transitions are reported.
#[derive(Debug)]
pub struct CameraIndicator<P: CameraProbe> {
    probe: P,
    last: Option<CameraStatus>,
}

impl<P: CameraProbe> CameraIndicator<P> {
    #[must_use]
    pub fn new(probe: P) -> Self {
        Self { probe, last: None }
    }

    /// Probe immediately (interval tick or window-focus recheck).
    /// Returns `true` when the status changed; the very first probe
    /// always counts as a change.
    pub fn check_now(&mut self) -> bool {
        let status = self.probe.probe();
        let changed = self.last != Some(status);
        if changed {
            match status {
                CameraStatus::Available => tracing::info!("camera available"),
                CameraStatus::Unavailable(Some(reason)) => {
                    tracing::warn!(%reason, "camera unavailable");
                }
                CameraStatus::Unavailable(None) => tracing::warn!("camera unavailable"),
            }
            self.last = Some(status);
        }
        changed
    }

    #[must_use]
    pub fn status(&self) -> Option<CameraStatus> {
        self.last
    }
}

/// Spawn the background probe loop. The receiver always holds the most
/// recent status; the task ends when every receiver is dropped.
pub fn spawn_monitor<P>(
    probe: P,
    poll_interval: Duration,
) -> (JoinHandle<()>, watch::Receiver<CameraStatus>)
where
    P: CameraProbe + Send + 'static,
{
    let mut indicator = CameraIndicator::new(probe);
    indicator.check_now();
    let initial = indicator
        .status()
        .unwrap_or(CameraStatus::Unavailable(None));
    let (tx, rx) = watch::channel(initial);
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if indicator.check_now() {
                let status = indicator
                    .status()
                    .unwrap_or(CameraStatus::Unavailable(None));
                if tx.send(status).is_err() {
                    break;
                }
            }
        }
    });
    (handle, rx)
}
