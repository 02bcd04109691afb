//! # Amdusias Huffman
//!
//! Static Huffman coding for seven-bit symbol streams.
//!
//! The codec reads a source text twice: once to census symbol frequencies
//! and grow the code tree, once to translate symbols into codewords. The
//! tree is built with the two-queue merge over pre-sorted frequencies, so
//! identical inputs always produce identical trees, tables, and bitstreams.
//!
//! ## Features
//!
//! - **Deterministic**: Total ordering on frequencies (probability, then
//!   symbol value) makes every stage reproducible bit for bit
//! - **Prefix-Free**: Codewords come from leaf paths of a full binary tree,
//!   so no codeword prefixes another
//! - **Self-Delimiting Frames**: A sentinel bit marks where padding ends,
//!   letting the decoder recover the exact payload length from whole bytes
//! - **Streaming Collaborators**: Sources and sinks implement the small
//!   traits in [`amdusias_core`], so the pipeline runs over files, buffers,
//!   or test fixtures
//!
//! ## Quick Start
//!
//! ```rust
//! use amdusias_core::{ByteReader, ByteWriter, TextReader, TextWriter};
//! use amdusias_huffman::HuffmanCodec;
//!
//! let text = b"abracadabra";
//!
//! // Pass 1: census the text and grow the code tree.
//! let codec = HuffmanCodec::analyze(&mut TextReader::new(&text[..])).unwrap();
//!
//! // Pass 2: encode the same text into a framed bitstream.
//! let mut sink = ByteWriter::new(Vec::new());
//! codec.encode(&mut TextReader::new(&text[..]), &mut sink).unwrap();
//! let encoded = sink.into_inner().unwrap();
//!
//! // Decode the bitstream back into the original symbols.
//! let mut restored = TextWriter::new(Vec::new());
//! codec
//!     .decode(&mut ByteReader::new(&encoded[..]), &mut restored)
//!     .unwrap();
//! assert_eq!(restored.into_inner().unwrap(), text);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      amdusias-huffman                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  freq.rs   FrequencyTable: census plus sorted probabilities │
//! │  tree.rs   HuffmanTree: two-queue merge into owned nodes    │
//! │  code.rs   CodeTable: leaf paths collected depth-first      │
//! │  bits.rs   frame packing, sentinel bit, padding rules       │
//! │  codec.rs  HuffmanCodec: analyze / encode / decode driver   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each stage consumes the previous stage's output and exposes its own
//! result through read-only accessors on [`HuffmanCodec`].
//!
//! ## References
//!
//! - [Huffman, "A Method for the Construction of Minimum-Redundancy Codes" (1952)](https://doi.org/10.1109/JRPROC.1952.273898)
//! - [van Leeuwen, "On the Construction of Huffman Trees" (1976)](https://dl.acm.org/doi/10.5555/646234.682914)

pub mod bits;
pub mod code;
pub mod codec;
pub mod freq;
pub mod tree;

pub use bits::{pack_bits, padding_width, strip_sentinel, unpack_bits, SENTINEL_ONLY_FRAME};
pub use code::CodeTable;
pub use codec::HuffmanCodec;
pub use freq::FrequencyTable;
pub use tree::{HuffmanTree, TreeNode};
