//! Pipeline orchestration: analysis, encoding, and decoding.
//!
//! ## Overview
//!
//! [`HuffmanCodec::analyze`] runs the build stages in order, each
//! consuming the previous stage's output: frequency list, then tree,
//! then code table. The finished codec is read-only; `encode` and
//! `decode` borrow it and move all raw I/O through the collaborator
//! traits. The wire format carries no header, so decoding requires a
//! codec analyzed from the same source that produced the stream.

use tracing::{debug, warn};

use amdusias_core::traits::{ByteSink, ByteSource, SymbolSink, SymbolSource};
use amdusias_core::types::SymbolFrequency;
use amdusias_core::{DecodeStats, EncodeStats, Error, Result};

use crate::bits;
use crate::code::CodeTable;
use crate::freq::FrequencyTable;
use crate::tree::{HuffmanTree, TreeNode};

/// Deterministic Huffman codec over the 7-bit alphabet.
///
/// Holds the finished products of the three build stages. An empty
/// source yields a codec with no tree and an empty table, which still
/// encodes the well-formed empty frame.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: Vec<SymbolFrequency>,
    tree: Option<HuffmanTree>,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Run the build pipeline over a source.
    pub fn analyze<S: SymbolSource>(source: &mut S) -> Result<Self> {
        let census = FrequencyTable::from_source(source)?;
        debug!(
            "Analyzed {} symbols, {} distinct",
            census.total(),
            census.distinct()
        );

        let frequencies = census.sorted_frequencies();
        let tree = HuffmanTree::from_frequencies(&frequencies);
        let table = match &tree {
            Some(tree) => CodeTable::from_tree(tree),
            None => CodeTable::default(),
        };
        debug!("Derived {} codewords", table.len());

        Ok(HuffmanCodec {
            frequencies,
            tree,
            table,
        })
    }

    /// Sorted frequency list: ascending probability, then symbol value.
    pub fn frequencies(&self) -> &[SymbolFrequency] {
        &self.frequencies
    }

    /// The prefix-code tree, absent for an empty source.
    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    /// The derived codeword table.
    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// Encode a symbol stream into sentinel-framed bytes.
    ///
    /// The source must present the same symbol population the codec was
    /// analyzed from; a symbol without a codeword aborts with
    /// [`Error::MissingCodeword`] before anything is written.
    pub fn encode<S, D>(&self, source: &mut S, destination: &mut D) -> Result<EncodeStats>
    where
        S: SymbolSource,
        D: ByteSink,
    {
        let mut payload = String::new();
        let mut symbols_read = 0usize;
        while let Some(symbol) = source.next_symbol()? {
            match self.table.code(symbol) {
                Some(code) => payload.push_str(code),
                None => return Err(Error::missing_codeword(symbol.value())),
            }
            symbols_read += 1;
        }

        let payload_bits = payload.len();
        let padding_bits = bits::padding_width(payload_bits);
        let framed = bits::pack_bits(&payload)?;
        destination.write_all(&framed)?;
        destination.flush()?;

        debug!(
            "Encoded {} symbols into {} bytes ({} payload bits, {} padding)",
            symbols_read,
            framed.len(),
            payload_bits,
            padding_bits
        );
        Ok(EncodeStats {
            symbols_read,
            payload_bits,
            padding_bits,
            bytes_written: framed.len(),
        })
    }

    /// Decode sentinel-framed bytes back into symbols.
    ///
    /// Truncated input is bounded, never fatal: a trailing partial
    /// codeword is discarded. With no tree (empty analysis) the payload
    /// is ignored and zero symbols are emitted.
    pub fn decode<S, D>(&self, source: &mut S, destination: &mut D) -> Result<DecodeStats>
    where
        S: ByteSource,
        D: SymbolSink,
    {
        let encoded = source.read_to_end()?;
        if encoded.is_empty() {
            return Err(Error::corrupted("empty encoded stream"));
        }

        let unpacked = bits::unpack_bits(&encoded);
        let payload = bits::strip_sentinel(&unpacked);

        let symbols_written = match &self.tree {
            Some(tree) => walk_payload(tree, payload, destination)?,
            None => {
                if !payload.is_empty() {
                    warn!(
                        "Payload of {} bits with no tree; emitting nothing",
                        payload.len()
                    );
                }
                0
            }
        };
        destination.flush()?;

        debug!(
            "Decoded {} symbols from {} bytes",
            symbols_written,
            encoded.len()
        );
        Ok(DecodeStats {
            bytes_read: encoded.len(),
            payload_bits: payload.len(),
            symbols_written,
        })
    }
}

/// Root-to-leaf traversal over the payload bits.
///
/// '0' descends left, '1' descends right; each leaf emits its symbol and
/// resets the walk to the root.
fn walk_payload<D: SymbolSink>(
    tree: &HuffmanTree,
    payload: &str,
    destination: &mut D,
) -> Result<usize> {
    let mut emitted = 0usize;
    let mut position: &TreeNode = tree.root();
    for (offset, bit) in payload.char_indices() {
        let next = match bit {
            '0' => position.left.as_deref(),
            '1' => position.right.as_deref(),
            other => return Err(Error::invalid_bit(other)),
        };
        position = match next {
            Some(node) => node,
            // merge-built trees have two children on every internal node
            None => return Err(Error::corrupted_at("tree walk descended past a leaf", offset)),
        };
        if let Some(symbol) = position.data.symbol {
            destination.write_symbol(symbol)?;
            emitted += 1;
            position = tree.root();
        }
    }
    Ok(emitted)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use amdusias_core::stream::{ByteReader, ByteWriter, TextReader, TextWriter};

    fn codec_for(text: &[u8]) -> HuffmanCodec {
        HuffmanCodec::analyze(&mut TextReader::new(text)).expect("Should analyze source")
    }

    fn encode_to_bytes(codec: &HuffmanCodec, text: &[u8]) -> (Vec<u8>, EncodeStats) {
        let mut sink = ByteWriter::new(Vec::new());
        let stats = codec
            .encode(&mut TextReader::new(text), &mut sink)
            .expect("Should encode");
        (sink.into_inner().expect("Should flush"), stats)
    }

    fn decode_to_text(codec: &HuffmanCodec, encoded: &[u8]) -> (Vec<u8>, DecodeStats) {
        let mut sink = TextWriter::new(Vec::new());
        let stats = codec
            .decode(&mut ByteReader::new(encoded), &mut sink)
            .expect("Should decode");
        (sink.into_inner().expect("Should flush"), stats)
    }

    #[test]
    fn test_skewed_pair_encodes_to_one_byte() {
        let codec = codec_for(b"aaab");
        let (encoded, stats) = encode_to_bytes(&codec, b"aaab");

        assert_eq!(encoded, vec![0x1e]);
        assert_eq!(stats.symbols_read, 4);
        assert_eq!(stats.payload_bits, 4);
        assert_eq!(stats.padding_bits, 4);
        assert_eq!(stats.bytes_written, 1);

        let (decoded, dstats) = decode_to_text(&codec, &encoded);
        assert_eq!(decoded, b"aaab");
        assert_eq!(dstats.symbols_written, 4);
        assert_eq!(dstats.payload_bits, 4);
    }

    #[test]
    fn test_single_symbol_source_round_trips_through_phantom() {
        let codec = codec_for(b"zzzz");
        let (encoded, _) = encode_to_bytes(&codec, b"zzzz");
        assert_eq!(encoded, vec![0x1f]);

        let (decoded, _) = decode_to_text(&codec, &encoded);
        assert_eq!(decoded, b"zzzz");
    }

    #[test]
    fn test_empty_source_frames_to_sentinel_byte() {
        let codec = codec_for(b"");
        assert!(codec.tree().is_none());
        assert!(codec.code_table().is_empty());
        assert!(codec.frequencies().is_empty());

        let (encoded, stats) = encode_to_bytes(&codec, b"");
        assert_eq!(encoded, vec![bits::SENTINEL_ONLY_FRAME]);
        assert_eq!(stats.symbols_read, 0);
        assert_eq!(stats.padding_bits, 8);

        let (decoded, dstats) = decode_to_text(&codec, &encoded);
        assert!(decoded.is_empty());
        assert_eq!(dstats.symbols_written, 0);
    }

    #[test]
    fn test_byte_aligned_payload_gains_full_sentinel_byte() {
        let codec = codec_for(b"aaaabbbb");
        let (encoded, stats) = encode_to_bytes(&codec, b"aaaabbbb");

        // Eight 1-bit codewords: a full extra sentinel byte, never zero padding.
        assert_eq!(stats.payload_bits, 8);
        assert_eq!(stats.padding_bits, 8);
        assert_eq!(encoded, vec![0x01, 0b0000_1111]);

        let (decoded, _) = decode_to_text(&codec, &encoded);
        assert_eq!(decoded, b"aaaabbbb");
    }

    #[test]
    fn test_longer_text_round_trips() {
        let text = &b"the quick brown fox jumps over the lazy dog"[..];
        let codec = codec_for(text);
        let (encoded, stats) = encode_to_bytes(&codec, text);
        assert_eq!(stats.bytes_written, encoded.len());
        assert!(stats.is_effective(), "Huffman should shrink english text");

        let (decoded, _) = decode_to_text(&codec, &encoded);
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_payload_bits_match_census_accounting() {
        let text = &b"mississippi river"[..];
        let codec = codec_for(text);
        let (_, stats) = encode_to_bytes(&codec, text);

        let census = FrequencyTable::from_source(&mut TextReader::new(text))
            .expect("Should tally source");
        let expected: u64 = codec
            .code_table()
            .iter()
            .map(|(symbol, code)| census.count(symbol) * code.len() as u64)
            .sum();
        assert_eq!(stats.payload_bits as u64, expected);
    }

    #[test]
    fn test_encode_aborts_on_unanalyzed_symbol() {
        let codec = codec_for(b"aaab");
        let mut sink = ByteWriter::new(Vec::new());
        let err = codec
            .encode(&mut TextReader::new(&b"aaac"[..]), &mut sink)
            .expect_err("Should reject symbol missing from the table");
        assert!(matches!(err, Error::MissingCodeword { symbol } if symbol == b'c'));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_decode_of_empty_stream_is_an_error() {
        let codec = codec_for(b"aaab");
        let mut sink = TextWriter::new(Vec::new());
        let err = codec
            .decode(&mut ByteReader::new(&[][..]), &mut sink)
            .expect_err("Should reject an empty encoded stream");
        assert_eq!(err.category(), "corrupted_data");
    }

    #[test]
    fn test_truncated_stream_decodes_a_prefix() {
        let text = &b"abracadabra abracadabra"[..];
        let codec = codec_for(text);
        let (encoded, _) = encode_to_bytes(&codec, text);
        assert!(encoded.len() > 2);

        let truncated = &encoded[..encoded.len() - 1];
        let (decoded, dstats) = decode_to_text(&codec, truncated);
        assert!(decoded.len() < text.len());
        assert_eq!(&text[..decoded.len()], &decoded[..]);
        assert_eq!(dstats.symbols_written, decoded.len());
    }

    #[test]
    fn test_decode_without_tree_emits_nothing() {
        let codec = codec_for(b"");
        let (decoded, dstats) = decode_to_text(&codec, &[0x1e]);
        assert!(decoded.is_empty());
        assert_eq!(dstats.symbols_written, 0);
        assert_eq!(dstats.payload_bits, 4);
    }

    #[test]
    fn test_stage_accessors_expose_pipeline_products() {
        let codec = codec_for(b"aaab");

        let frequencies = codec.frequencies();
        assert_eq!(frequencies.len(), 2);
        assert!(frequencies[0].probability <= frequencies[1].probability);

        let tree = codec.tree().expect("Should hold a tree");
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(codec.code_table().len(), 2);
    }
}
