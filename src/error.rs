// src/error.rs
use quire_layout::LayoutError;
use thiserror::Error;

/// Errors surfaced by [`DocumentEngine`](crate::DocumentEngine).
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
}
