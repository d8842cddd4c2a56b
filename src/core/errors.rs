use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HJson error: {0}")]
    HJson(#[from] serde_hjson::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),

    #[error("Project slug is not URL-safe: {0:?}")]
    InvalidSlug(String),

    #[error("No project with slug: {0}")]
    ProjectNotFound(String),

    #[error("Unsupported data file type: {0}")]
    UnsupportedDataFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl From<std::io::Error> for FolioError {
    fn from(error: std::io::Error) -> Self {
        FolioError::Io(Box::new(error))
    }
}

impl FolioError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FolioError::ProjectNotFound(_))
    }
}
