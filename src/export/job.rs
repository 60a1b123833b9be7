use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::PlannerError;
use crate::export::{write_snapshot, SnapshotSource};

/// Time given to pending layout and paint work before the snapshot is taken.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);
/// How long to wait for the window to deliver a live capture.
pub const CAPTURE_TIMEOUT: Duration = Duration::from_secs(2);
pub const FAILURE_MESSAGE: &str = "Export failed. Please try using a screenshot instead.";
pub const PROGRESS_MESSAGE: &str = "Creating PNG image...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Settling { until: Instant },
    AwaitingCapture { requested_at: Instant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { path: PathBuf, source: &'static str },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStep {
    /// Nothing to do this frame; poll again later.
    Waiting,
    /// The static snapshot failed; the host should ask the window for a
    /// screenshot and pass it to the next polls.
    RequestCapture,
    Finished(ExportOutcome),
}

/// One PNG export in flight, driven by the UI loop.
///
/// The host polls it once per frame until it returns [`JobStep::Finished`]
/// and then drops it, which also clears the progress indicator.
#[derive(Debug)]
pub struct ExportJob {
    path: PathBuf,
    stage: Stage,
}

impl ExportJob {
    pub fn start(path: PathBuf, now: Instant) -> Self {
        tracing::info!("Starting export to {:?}", path);
        Self {
            path,
            stage: Stage::Settling {
                until: now + SETTLE_DELAY,
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_awaiting_capture(&self) -> bool {
        matches!(self.stage, Stage::AwaitingCapture { .. })
    }

    pub fn poll(
        &mut self,
        now: Instant,
        primary: &dyn SnapshotSource,
        capture: Option<&dyn SnapshotSource>,
    ) -> JobStep {
        match self.stage {
            Stage::Settling { until } => {
                if now < until {
                    return JobStep::Waiting;
                }
                match write_snapshot(primary, &self.path) {
                    Ok(()) => self.saved(primary),
                    Err(e) => {
                        tracing::warn!("{} failed, falling back to live capture: {}", primary.name(), e);
                        self.stage = Stage::AwaitingCapture { requested_at: now };
                        JobStep::RequestCapture
                    }
                }
            }
            Stage::AwaitingCapture { requested_at } => {
                if let Some(capture) = capture {
                    return match write_snapshot(capture, &self.path) {
                        Ok(()) => self.saved(capture),
                        Err(e) => self.failed(e),
                    };
                }
                let waited = now.saturating_duration_since(requested_at);
                if waited >= CAPTURE_TIMEOUT {
                    self.failed(PlannerError::CaptureTimeout(waited.as_millis()))
                } else {
                    JobStep::Waiting
                }
            }
        }
    }

    fn saved(&self, source: &dyn SnapshotSource) -> JobStep {
        JobStep::Finished(ExportOutcome::Saved {
            path: self.path.clone(),
            source: source.name(),
        })
    }

    fn failed(&self, error: PlannerError) -> JobStep {
        tracing::error!("Export to {:?} failed: {}", self.path, error);
        JobStep::Finished(ExportOutcome::Failed {
            message: FAILURE_MESSAGE.to_string(),
        })
    }
}
