//! Stream adapters implementing the collaborator traits over `std::io`.
//!
//! All adapters are generic over `Read`/`Write`, so file-backed streams
//! and in-memory buffers share one implementation. Buffered writers
//! release their handle and surface flush failures through `flush` or
//! `into_inner`; dropping without flushing is best-effort only.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::traits::{ByteSink, ByteSource, SymbolSink, SymbolSource};
use crate::types::Symbol;

/// Symbol-at-a-time reader over a text stream.
///
/// Bytes outside the 7-bit alphabet fail with [`Error::InvalidSymbol`]
/// instead of being silently truncated.
#[derive(Debug)]
pub struct TextReader<R: Read> {
    inner: BufReader<R>,
}

impl TextReader<File> {
    /// Open a text file as a symbol source.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(TextReader::new(File::open(path)?))
    }
}

impl<R: Read> TextReader<R> {
    /// Wrap a reader as a symbol source.
    pub fn new(reader: R) -> Self {
        TextReader {
            inner: BufReader::new(reader),
        }
    }
}

impl<R: Read> SymbolSource for TextReader<R> {
    fn next_symbol(&mut self) -> Result<Option<Symbol>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Symbol::try_from(byte[0]).map(Some),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Buffered symbol writer to a text stream.
#[derive(Debug)]
pub struct TextWriter<W: Write> {
    inner: BufWriter<W>,
}

impl TextWriter<File> {
    /// Create (or truncate) a text file as a symbol sink.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(TextWriter::new(File::create(path)?))
    }
}

impl<W: Write> TextWriter<W> {
    /// Wrap a writer as a symbol sink.
    pub fn new(writer: W) -> Self {
        TextWriter {
            inner: BufWriter::new(writer),
        }
    }

    /// Flush and unwrap the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

impl<W: Write> SymbolSink for TextWriter<W> {
    fn write_symbol(&mut self, symbol: Symbol) -> Result<()> {
        self.inner.write_all(&[symbol.value()])?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Whole-file reader for encoded byte streams.
#[derive(Debug)]
pub struct ByteReader<R: Read> {
    inner: R,
}

impl ByteReader<File> {
    /// Open an encoded file as a byte source.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(ByteReader::new(File::open(path)?))
    }
}

impl<R: Read> ByteReader<R> {
    /// Wrap a reader as a byte source.
    pub fn new(reader: R) -> Self {
        ByteReader { inner: reader }
    }
}

impl<R: Read> ByteSource for ByteReader<R> {
    fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.inner.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

/// Buffered writer for encoded byte streams.
#[derive(Debug)]
pub struct ByteWriter<W: Write> {
    inner: BufWriter<W>,
}

impl ByteWriter<File> {
    /// Create (or truncate) an encoded file as a byte sink.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(ByteWriter::new(File::create(path)?))
    }
}

impl<W: Write> ByteWriter<W> {
    /// Wrap a writer as a byte sink.
    pub fn new(writer: W) -> Self {
        ByteWriter {
            inner: BufWriter::new(writer),
        }
    }

    /// Flush and unwrap the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

impl<W: Write> ByteSink for ByteWriter<W> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
