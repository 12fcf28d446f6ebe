// ABOUTME: Error types for the reveal-deck compiler
// ABOUTME: Provides structured error handling for each stage of the pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Input does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Malformed front matter: {0}")]
    MalformedFrontMatter(String),

    #[error("Invalid front matter YAML: {0}")]
    FrontMatterYaml(#[from] serde_yaml::Error),

    #[error("Invalid input path: {0}")]
    InvalidInput(PathBuf),

    #[error("Invalid input pattern: {0}")]
    InvalidPattern(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<glob::PatternError> for DeckError {
    fn from(err: glob::PatternError) -> Self {
        DeckError::InvalidPattern(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
