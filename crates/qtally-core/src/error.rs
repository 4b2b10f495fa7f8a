use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QtallyError {
    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QtallyError>;

impl QtallyError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SourceNotFound { .. } => 2,
            Self::ConfigParse { .. } => 3,
            _ => 1,
        }
    }
}
