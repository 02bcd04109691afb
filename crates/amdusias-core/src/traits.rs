//! Collaborator traits between the codec core and its surrounding I/O.
//!
//! ## Collaborator roles
//!
//! ```text
//! SymbolSource ──> frequency analysis, encode   (pull 7-bit symbols)
//! SymbolSink   <── decode                       (push decoded symbols)
//! ByteSink     <── encode                       (push framed bytes)
//! ByteSource   ──> decode                       (pull framed bytes)
//! ```
//!
//! The codec core never opens files or touches raw streams; everything
//! flows through these four seams so tests can substitute in-memory
//! collaborators for file-backed ones.

use crate::error::Result;
use crate::types::Symbol;

/// Sequential pull interface over a text source.
pub trait SymbolSource {
    /// Read the next symbol.
    ///
    /// # Returns
    /// `Some(symbol)` while the source has symbols remaining, `None` at
    /// end of stream.
    fn next_symbol(&mut self) -> Result<Option<Symbol>>;
}

/// Sequential push interface to a text destination.
pub trait SymbolSink {
    /// Write one symbol to the destination.
    fn write_symbol(&mut self, symbol: Symbol) -> Result<()>;

    /// Flush buffered symbols through to the destination.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Whole-sequence pull interface over an encoded byte source.
pub trait ByteSource {
    /// Read the entire byte sequence from the source.
    fn read_to_end(&mut self) -> Result<Vec<u8>>;
}

/// Whole-sequence push interface to an encoded byte destination.
pub trait ByteSink {
    /// Write a complete byte sequence to the destination.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    /// Flush buffered bytes through to the destination.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
