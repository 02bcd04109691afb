//! # Amdusias Core
//!
//! Core traits, types, and stream adapters for the Amdusias prefix-coding
//! library.
//!
//! Amdusias is named after the 67th demon of the Ars Goetia, the Great
//! King who bends trees at will - just as this codec hangs every encoded
//! payload off one deterministically bent binary tree.
//!
//! ## Design Philosophy
//!
//! - **Deterministic by construction**: identical input yields
//!   bit-identical trees, tables, and streams
//! - **Explicit collaborators**: the codec core pulls symbols and pushes
//!   bytes only through the trait seams in [`traits`]
//! - **Bounded failure**: malformed input surfaces a diagnostic or a
//!   bounded no-op, never out-of-bounds access
//!
//! ## Collaborator Traits
//!
//! - [`SymbolSource`] - sequential 7-bit symbol pull (analysis, encode)
//! - [`SymbolSink`] - sequential symbol push (decode)
//! - [`ByteSink`] - framed byte-sequence push (encode)
//! - [`ByteSource`] - framed byte-sequence pull (decode)
//!
//! ## Example
//!
//! ```ignore
//! use amdusias_core::stream::{ByteWriter, TextReader};
//! use amdusias_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::analyze(&mut TextReader::open("notes.txt")?)?;
//! let stats = codec.encode(
//!     &mut TextReader::open("notes.txt")?,
//!     &mut ByteWriter::create("notes.amd")?,
//! )?;
//! println!("saved {:.1}%", stats.savings_percent());
//! ```

pub mod error;
pub mod stats;
pub mod stream;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::{DecodeStats, EncodeStats};
pub use stream::{ByteReader, ByteWriter, TextReader, TextWriter};
pub use traits::{ByteSink, ByteSource, SymbolSink, SymbolSource};
pub use types::{Symbol, SymbolFrequency, ALPHABET_SIZE};
