//! Statistics reported by encode and decode operations.

/// Statistics from a completed encode.
///
/// The text alphabet stores one symbol per byte, so `symbols_read` doubles
/// as the source size in bytes when computing ratios.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeStats {
    /// Symbols consumed from the source.
    pub symbols_read: usize,

    /// Payload bits before the padding sentinel was prepended.
    pub payload_bits: usize,

    /// Sentinel bits prepended to reach a byte boundary (always 1..=8).
    pub padding_bits: usize,

    /// Encoded bytes written to the destination.
    pub bytes_written: usize,
}

impl EncodeStats {
    /// Compression ratio (source size / encoded size).
    /// Higher is better (more compression).
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        self.symbols_read as f64 / self.bytes_written as f64
    }

    /// Space savings as a percentage (0-100).
    pub fn savings_percent(&self) -> f64 {
        if self.symbols_read == 0 {
            return 0.0;
        }
        (1.0 - (self.bytes_written as f64 / self.symbols_read as f64)) * 100.0
    }

    /// Check if encoding was effective (saved space).
    pub fn is_effective(&self) -> bool {
        self.bytes_written < self.symbols_read
    }
}

/// Statistics from a completed decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeStats {
    /// Encoded bytes read from the source.
    pub bytes_read: usize,

    /// Payload bits walked after sentinel removal.
    pub payload_bits: usize,

    /// Symbols written to the destination.
    pub symbols_written: usize,
}
