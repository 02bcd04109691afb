//! Codeword table derivation.
//!
//! ## Overview
//!
//! A depth-first walk of the prefix-code tree appends `'0'` descending
//! left and `'1'` descending right into a shared path buffer, recording
//! the accumulated path at each leaf. The analyzer guarantees at least
//! two leaves and the builder admits no unary nodes, so every codeword
//! has length >= 1 and no codeword is an ancestor path of another: the
//! table is prefix-free by construction.

use amdusias_core::types::{Symbol, ALPHABET_SIZE};

use crate::tree::{HuffmanTree, TreeNode};

/// Per-symbol codeword table.
///
/// Sparse over the 128-symbol space: entries exist only for symbols that
/// appeared in the analyzed source, plus the phantom when one was
/// injected. Derived once from the tree and read-only afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTable {
    codes: Vec<Option<String>>,
}

impl Default for CodeTable {
    fn default() -> Self {
        CodeTable {
            codes: vec![None; ALPHABET_SIZE],
        }
    }
}

impl CodeTable {
    /// Derive the table by walking a tree depth-first.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();
        let mut path = String::new();
        assign(tree.root(), &mut path, &mut table);
        table
    }

    /// Codeword for a symbol, if the symbol has one.
    pub fn code(&self, symbol: Symbol) -> Option<&str> {
        self.codes[symbol.index()].as_deref()
    }

    /// Number of symbols holding a codeword.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    /// Check whether the table holds no codewords.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_none())
    }

    /// Iterate `(symbol, codeword)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codes.iter().enumerate().filter_map(|(value, code)| {
            let symbol = Symbol::new(value as u8)?;
            Some((symbol, code.as_deref()?))
        })
    }
}

/// Record the running path at each leaf, pushing and popping one bit
/// around every descent.
fn assign(node: &TreeNode, path: &mut String, table: &mut CodeTable) {
    if let Some(symbol) = node.data.symbol {
        table.codes[symbol.index()] = Some(path.clone());
        return;
    }
    if let Some(left) = node.left.as_deref() {
        path.push('0');
        assign(left, path, table);
        path.pop();
    }
    if let Some(right) = node.right.as_deref() {
        path.push('1');
        assign(right, path, table);
        path.pop();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use amdusias_core::stream::TextReader;

    fn table_for(text: &[u8]) -> CodeTable {
        let mut source = TextReader::new(text);
        let census = FrequencyTable::from_source(&mut source).expect("Should tally source");
        let tree = HuffmanTree::from_frequencies(&census.sorted_frequencies())
            .expect("Should build tree");
        CodeTable::from_tree(&tree)
    }

    fn code_of(table: &CodeTable, value: u8) -> Option<String> {
        table
            .code(Symbol::new(value).expect("Should be a 7-bit symbol"))
            .map(str::to_owned)
    }

    #[test]
    fn test_skewed_pair_gets_single_bit_codes() {
        let table = table_for(b"aaab");
        assert_eq!(code_of(&table, b'b').as_deref(), Some("0"));
        assert_eq!(code_of(&table, b'a').as_deref(), Some("1"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_phantom_receives_the_zero_branch() {
        let table = table_for(b"zzzz");
        assert_eq!(code_of(&table, b'{').as_deref(), Some("0"));
        assert_eq!(code_of(&table, b'z').as_deref(), Some("1"));
    }

    #[test]
    fn test_absent_symbols_have_no_codeword() {
        let table = table_for(b"aaab");
        assert_eq!(code_of(&table, b'q'), None);
    }

    #[test]
    fn test_codewords_are_prefix_free() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");
        let codes: Vec<(Symbol, &str)> = table.iter().collect();
        assert!(codes.len() > 2);

        for (i, (_, a)) in codes.iter().enumerate() {
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.starts_with(a),
                        "Codeword {:?} is a prefix of {:?}",
                        a, b
                    );
                }
            }
        }
    }

    #[test]
    fn test_frequent_symbols_get_no_longer_codes() {
        let mut text = Vec::new();
        for _ in 0..100 {
            text.push(b'a');
        }
        for _ in 0..50 {
            text.push(b'b');
        }
        for _ in 0..25 {
            text.push(b'c');
        }
        for _ in 0..5 {
            text.push(b'd');
        }

        let table = table_for(&text);
        let len_of = |value: u8| code_of(&table, value).map(|code| code.len()).unwrap_or(0);
        assert!(len_of(b'a') <= len_of(b'b'));
        assert!(len_of(b'b') <= len_of(b'c'));
        assert!(len_of(b'c') <= len_of(b'd'));
    }

    #[test]
    fn test_every_codeword_is_non_empty() {
        let table = table_for(b"mississippi");
        for (_, code) in table.iter() {
            assert!(!code.is_empty());
        }
        assert!(!table.is_empty());
    }
}
