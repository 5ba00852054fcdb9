use thiserror::Error;

/// Result type alias for FSD operations
pub type Result<T> = std::result::Result<T, FsdError>;

/// Errors that can occur when decoding FSD files
#[derive(Debug, Error)]
pub enum FsdError {
    /// I/O error occurred while reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with the FSD signature
    #[error("Missing FSD file header at offset {offset} (found {found:02X?})")]
    InvalidHeader {
        /// Byte offset of the signature
        offset: u64,
        /// Bytes found where the signature was expected
        found: [u8; 3],
    },

    /// The stream ended inside a structure
    #[error("Unexpected end of input at offset {offset} ({needed} more bytes needed)")]
    UnexpectedEndOfInput {
        /// Byte offset where the stream ran out
        offset: u64,
        /// Number of bytes still required by the structure being read
        needed: usize,
    },

    /// The image file could not be opened
    #[error("Failed to open file: {path}")]
    UnopenableSource {
        /// Path that failed to open
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl FsdError {
    /// Create an end-of-input error with context
    pub fn eof(offset: u64, needed: usize) -> Self {
        FsdError::UnexpectedEndOfInput { offset, needed }
    }

    /// Create an invalid header error for the bytes found
    pub fn invalid_header(offset: u64, found: [u8; 3]) -> Self {
        FsdError::InvalidHeader { offset, found }
    }

    /// Check if this error is a truncated stream
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, FsdError::UnexpectedEndOfInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_display() {
        let err = FsdError::eof(264, 128);
        assert_eq!(
            err.to_string(),
            "Unexpected end of input at offset 264 (128 more bytes needed)"
        );
        assert!(err.is_unexpected_eof());
    }

    #[test]
    fn test_invalid_header_display() {
        let err = FsdError::invalid_header(0, *b"DSK");
        assert_eq!(
            err.to_string(),
            "Missing FSD file header at offset 0 (found [44, 53, 4B])"
        );
        assert!(!err.is_unexpected_eof());
    }

    #[test]
    fn test_unopenable_display() {
        let err = FsdError::UnopenableSource {
            path: "missing.fsd".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "Failed to open file: missing.fsd");
    }
}
