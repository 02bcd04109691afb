//! Core type definitions for prefix coding.

use std::fmt;

use crate::error::Error;

/// Number of code points in the fixed 7-bit alphabet.
pub const ALPHABET_SIZE: usize = 128;

/// A symbol from the fixed 7-bit alphabet.
///
/// Wraps a code point in `0..=127`. Construction is fallible so the bound
/// holds everywhere a `Symbol` value appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Largest valid code point.
    pub const MAX: u8 = 127;

    /// Create a symbol, or `None` for bytes outside the alphabet.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Symbol(value))
        } else {
            None
        }
    }

    /// Get the underlying code point.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the code point widened for table indexing.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Successor code point, wrapping 127 to 1.
    ///
    /// Used to mint the phantom leaf for single-symbol sources; the result
    /// is always a distinct valid symbol.
    pub const fn successor(self) -> Symbol {
        if self.0 == Self::MAX {
            Symbol(1)
        } else {
            Symbol(self.0 + 1)
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Symbol::new(value).ok_or(Error::InvalidSymbol { value })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() {
            write!(f, "{:?}", self.0 as char)
        } else {
            write!(f, "0x{:02x}", self.0)
        }
    }
}

/// A symbol/probability pair.
///
/// `symbol` is `Some` on tree leaves; merged internal nodes carry `None`.
/// For sources with at least two distinct symbols the leaf probabilities
/// sum to 1.0 within floating tolerance; a single-symbol source gets a
/// phantom leaf with probability 0.0 so the tree always has two leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolFrequency {
    /// The symbol, present only on leaves.
    pub symbol: Option<Symbol>,
    /// Occurrence probability in `[0.0, 1.0]`.
    pub probability: f64,
}

impl SymbolFrequency {
    /// Create a leaf entry.
    pub fn leaf(symbol: Symbol, probability: f64) -> Self {
        SymbolFrequency {
            symbol: Some(symbol),
            probability,
        }
    }

    /// Create an internal (merged) entry.
    pub fn internal(probability: f64) -> Self {
        SymbolFrequency {
            symbol: None,
            probability,
        }
    }

    /// Check whether this entry marks a leaf.
    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}
