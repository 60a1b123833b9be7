use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid SVG snapshot: {0}")]
    Svg(String),

    #[error("Rasterization failed: {0}")]
    Raster(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Timeline has nothing to capture")]
    CaptureUnavailable,

    #[error("Screen capture did not arrive within {0} ms")]
    CaptureTimeout(u128),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
