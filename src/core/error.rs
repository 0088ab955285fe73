use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardenError {
    #[error("scan report length mismatch: side {side} requires {expected} cells, got {actual}")]
    ScanLengthMismatch {
        side: u16,
        expected: usize,
        actual: usize,
    },

    #[error("scan window side must be odd and positive, got {0}")]
    InvalidScanSide(u16),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WardenError>;
