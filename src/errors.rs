use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReorderError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Section {header} has {len} body lines, need at least 2")]
    SectionTooShort { header: String, len: usize },
}

pub type ReorderResult<T> = Result<T, ReorderError>;
