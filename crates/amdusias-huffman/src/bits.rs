//! Sentinel-framed bit packing and unpacking.
//!
//! ## Overview
//!
//! Encoded payloads travel as raw bytes with no header or magic number.
//! The stream opens with a run of zero or more '0' bits closed by exactly
//! one '1' bit, the padding sentinel; every bit strictly after it,
//! MSB-first across the remaining bytes, is Huffman payload. The sentinel
//! occupies `8 - (payload_bits % 8)` bits, always 1..=8, so a payload
//! already on a byte boundary still gains one full sentinel byte and an
//! empty payload frames to the single byte `0x01`.
//!
//! Bit sequences are modeled as strings of `'0'`/`'1'`; any other
//! character is an invariant violation and aborts packing before a byte
//! is produced.

use amdusias_core::{Error, Result};

/// Frame produced for an empty payload: the sentinel bit alone.
pub const SENTINEL_ONLY_FRAME: u8 = 0b0000_0001;

/// Widest possible sentinel, in bits.
const MAX_PADDING_BITS: usize = 8;

/// Sentinel width for a payload of the given bit length.
pub fn padding_width(payload_bits: usize) -> usize {
    MAX_PADDING_BITS - (payload_bits % MAX_PADDING_BITS)
}

/// Pack a payload bit string into sentinel-framed bytes.
///
/// The sentinel is prepended, then the framed sequence is packed eight
/// bits per byte, most significant bit first.
pub fn pack_bits(payload: &str) -> Result<Vec<u8>> {
    let padding = padding_width(payload.len());
    let mut framed = String::with_capacity(padding + payload.len());
    for _ in 0..padding - 1 {
        framed.push('0');
    }
    framed.push('1');
    framed.push_str(payload);

    let mut bytes = Vec::with_capacity(framed.len() / 8);
    let mut current = 0u8;
    let mut filled = 0u8;
    for c in framed.chars() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            other => return Err(Error::invalid_bit(other)),
        };
        current = (current << 1) | bit;
        filled += 1;
        if filled == 8 {
            bytes.push(current);
            current = 0;
            filled = 0;
        }
    }
    Ok(bytes)
}

/// Unpack framed bytes into the full bit string, sentinel included.
pub fn unpack_bits(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    bits
}

/// Strip the padding sentinel from an unpacked bit string.
///
/// Scans the first eight bits only; everything up to and including the
/// first '1' is discarded. A malformed head with no '1' in range loses
/// exactly eight bits, and inputs shorter than that strip to nothing.
pub fn strip_sentinel(bits: &str) -> &str {
    for (index, bit) in bits.char_indices().take(MAX_PADDING_BITS) {
        if bit == '1' {
            return &bits[index + 1..];
        }
    }
    bits.get(MAX_PADDING_BITS..).unwrap_or("")
}

// =============================================================================
// Tests
// =============================================================================
