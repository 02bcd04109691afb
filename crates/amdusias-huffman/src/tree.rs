//! Prefix-code tree construction via the two-queue merge.
//!
//! ## Overview
//!
//! Leaves enter a `source` queue in sorted order; merged nodes accumulate
//! in creation order on a `target` queue. Because `source` is pre-sorted
//! and every merged probability is at least as large as either child's,
//! `target` stays sorted ascending at every step, so the two queue fronts
//! are always the two lightest available nodes and no priority queue is
//! needed. Taking from `source` on probability ties is the rule that
//! makes trees identical across runs; it must not be weakened.

use std::collections::VecDeque;

use amdusias_core::types::SymbolFrequency;

/// A node of the prefix-code tree.
///
/// Leaf iff `data.symbol` is `Some`, in which case both children are
/// `None`; internal nodes always carry exactly two children.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Symbol/probability payload.
    pub data: SymbolFrequency,
    /// Left child, the '0' branch.
    pub left: Option<Box<TreeNode>>,
    /// Right child, the '1' branch.
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(data: SymbolFrequency) -> Self {
        TreeNode {
            data,
            left: None,
            right: None,
        }
    }

    fn merge(left: TreeNode, right: TreeNode) -> Self {
        let probability = left.data.probability + right.data.probability;
        TreeNode {
            data: SymbolFrequency::internal(probability),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Check whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.data.symbol.is_some()
    }
}

/// An owned prefix-code tree.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanTree {
    root: TreeNode,
}

impl HuffmanTree {
    /// Build the tree from a sorted frequency list.
    ///
    /// Repeatedly dequeues the two lightest nodes (left first), merges
    /// them, and enqueues the merged node until a single root remains.
    /// Returns `None` for lists with fewer than two entries; the analyzer
    /// guarantees at least two leaves for every non-empty source.
    pub fn from_frequencies(frequencies: &[SymbolFrequency]) -> Option<Self> {
        if frequencies.len() < 2 {
            return None;
        }

        let mut source: VecDeque<TreeNode> =
            frequencies.iter().copied().map(TreeNode::leaf).collect();
        let mut target: VecDeque<TreeNode> = VecDeque::new();

        while !(source.is_empty() && target.len() == 1) {
            let left = take_lighter(&mut source, &mut target)?;
            let right = take_lighter(&mut source, &mut target)?;
            target.push_back(TreeNode::merge(left, right));
        }

        target.pop_front().map(|root| HuffmanTree { root })
    }

    /// Borrow the root node.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        fn walk(node: &TreeNode) -> usize {
            if node.is_leaf() {
                return 1;
            }
            node.left.as_deref().map_or(0, walk) + node.right.as_deref().map_or(0, walk)
        }
        walk(&self.root)
    }
}

/// Dequeue the lighter front, preferring `source` on ties.
fn take_lighter(
    source: &mut VecDeque<TreeNode>,
    target: &mut VecDeque<TreeNode>,
) -> Option<TreeNode> {
    match (source.front(), target.front()) {
        (Some(_), None) => source.pop_front(),
        (None, Some(_)) => target.pop_front(),
        (Some(s), Some(t)) => {
            if s.data.probability <= t.data.probability {
                source.pop_front()
            } else {
                target.pop_front()
            }
        }
        (None, None) => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
