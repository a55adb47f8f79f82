//! Unified Error Type
//!
//! Single error enum for the whole application. Every failure mode here is
//! recoverable: stage drivers catch at the operation boundary, report, and
//! keep the run going so a summary is always printed.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("README not found at {}", path.display())]
    MissingReadme { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, DocError>;
