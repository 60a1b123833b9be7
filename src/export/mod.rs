//! PNG export of the rendered chart.
//!
//! The primary path draws a static copy of the [`GanttScene`] (no toggles,
//! no hover overlays) as SVG and rasterises it off-screen. If that fails the
//! export falls back to a capture of the live window.
//!
//! [`GanttScene`]: crate::render::GanttScene

pub mod capture;
pub mod job;
pub mod raster;
pub mod svg;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use capture::LiveCapture;
pub use job::{ExportJob, ExportOutcome, JobStep};
pub use raster::StaticSnapshot;

pub const EXPORT_FILE_NAME: &str = "timeline.png";
/// Exports are drawn at twice the on-screen size.
pub const PIXEL_SCALE: f32 = 2.0;

/// Something that can produce a PNG image of the chart.
pub trait SnapshotSource {
    /// Short name for logs and status messages.
    fn name(&self) -> &'static str;

    fn render_png(&self, pixel_scale: f32) -> Result<Vec<u8>>;
}

/// Render `source` and write it to `path`.
pub fn write_snapshot(source: &dyn SnapshotSource, path: &Path) -> Result<()> {
    let png = source.render_png(PIXEL_SCALE)?;
    std::fs::write(path, png)?;
    tracing::info!("Exported timeline via {} to {:?}", source.name(), path);
    Ok(())
}

/// Where interactive exports land: the user's download directory, or the
/// working directory when there is none.
pub fn default_export_path() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(EXPORT_FILE_NAME)
}
