use shared::BoundsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Invalid availability bounds: {0}")]
    Bounds(#[from] BoundsError),
    #[error("Invalid picker config: {0}")]
    InvalidConfig(String),
    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Range has a start but no end")]
    UnresolvedRange,
    #[error("Trigger element is not mounted")]
    TriggerNotMounted,
    #[error("Viewport size unavailable: {0}")]
    ViewportUnavailable(String),
}
