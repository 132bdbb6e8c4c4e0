use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, IndexError>;

/// Typed failures raised by the library layer. CLI front ends wrap these with `eyre` context
/// and turn them into a diagnostic-and-exit-1 at the process boundary.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid index: {0}")]
    InvalidIndex(String),

    #[error("suffix array construction failed: {0}")]
    IndexBuildFailed(String),

    #[error("argument error: {0}")]
    ArgumentError(String),
}

impl IndexError {
    pub fn invalid_index(reason: impl Into<String>) -> Self {
        Self::InvalidIndex(reason.into())
    }

    pub fn empty_reference(path: &PathBuf) -> Self {
        Self::ArgumentError(format!("reference file {path:?} contains no records"))
    }
}
