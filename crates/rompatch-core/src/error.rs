use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Search and replacement must be the same length ({pattern} vs {replacement} bytes)")]
    LengthMismatch { pattern: usize, replacement: usize },

    #[error("Search pattern is empty")]
    EmptyPattern,

    #[error("Pointer offset {offset:#x} overflows when rebased onto {base:#x}")]
    PointerOverflow { offset: u32, base: u32 },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
