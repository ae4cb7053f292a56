use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddonError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to load bundle {}: {message}", .path.display())]
    BundleError { path: PathBuf, message: String },
    #[error("Validator code {0} already exists")]
    DuplicateValidator(String),
    #[error("Validator {0} declares the same bundle as both a succeeding and a failing candidate")]
    OverlappingCandidates(String),
    #[error("Disabled and enabled validator lists are mutually exclusive")]
    MutuallyExclusive,
    #[error("Unknown validator code: {0}")]
    UnknownValidator(String),
    #[error("Failed to render output: {0}")]
    OutputError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AddonError {
    /// Process exit code for this error: 1 when bundles were judged invalid,
    /// 2 when the run itself could not be carried out.
    pub fn exit_code(&self) -> i32 {
        match self {
            AddonError::ValidationError(_) => 1,
            _ => 2,
        }
    }
}
