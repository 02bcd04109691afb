//! Error types for encoding and decoding operations.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Codec error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Encoded input is corrupted or structurally invalid.
    #[error("corrupted data: {message}")]
    CorruptedData {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A byte outside the 7-bit alphabet was read from a text source.
    #[error("invalid symbol: byte 0x{value:02x} is outside the 7-bit alphabet")]
    InvalidSymbol { value: u8 },

    /// A bit sequence contained a character other than '0' or '1'.
    #[error("invalid bit character {found:?} in bit sequence")]
    InvalidBit { found: char },

    /// A symbol reached the encoder without an entry in the code table.
    #[error("no codeword for symbol {symbol} (0x{symbol:02x})")]
    MissingCodeword { symbol: u8 },

    /// I/O error from an underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
            source: None,
        }
    }

    /// Create a corrupted data error with offset context.
    pub fn corrupted_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptedData {
            message: format!("{} at offset {}", message.into(), offset),
            source: None,
        }
    }

    /// Create an invalid symbol error.
    pub fn invalid_symbol(value: u8) -> Self {
        Error::InvalidSymbol { value }
    }

    /// Create an invalid bit error.
    pub fn invalid_bit(found: char) -> Self {
        Error::InvalidBit { found }
    }

    /// Create a missing codeword error.
    pub fn missing_codeword(symbol: u8) -> Self {
        Error::MissingCodeword { symbol }
    }

    /// Create an I/O error with a custom message.
    pub fn io(message: impl Into<String>) -> Self {
        Error::Io(std::io::Error::other(message.into()))
    }

    /// Check if error is recoverable (retrying the operation can succeed).
    ///
    /// Invalid bits and missing codewords are invariant violations, not
    /// recoverable conditions.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Get error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Error::CorruptedData { .. } => "corrupted_data",
            Error::InvalidSymbol { .. } => "invalid_symbol",
            Error::InvalidBit { .. } => "invalid_bit",
            Error::MissingCodeword { .. } => "missing_codeword",
            Error::Io(_) => "io_error",
        }
    }
}
