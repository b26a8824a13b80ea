use std::collections::VecDeque;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;

pub mod codes;

use codes::CodeTable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        symbol: u8,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(symbol: u8, weight: u64) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    /// Joins two subtrees; `left` is the lighter (or older) of the two.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline(always)]
    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Follows one bit of a code: `false` goes left, `true` goes right.
    /// Leaves have no children.
    #[inline(always)]
    pub fn child(&self, bit: bool) -> Option<&HuffNode> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn count_nodes(&self) -> (usize, usize) {
        match self {
            HuffNode::Leaf { .. } => (1, 0),
            HuffNode::Internal { left, right, .. } => {
                let (left_leaves, left_internal) = left.count_nodes();
                let (right_leaves, right_internal) = right.count_nodes();
                (left_leaves + right_leaves, left_internal + right_internal + 1)
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A prefix tree built deterministically from a frequency table.
///
/// Building the tree twice from tables with the same entries in the same order
/// always yields the same shape, so the decoder can rebuild exactly the tree
/// the encoder used from nothing but the stored table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let frequencies = FrequencyTable::from_bytes(bytes)?;
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        HuffmanTree::from_frequencies(&frequencies)
    }

    /// Builds the tree.
    ///
    /// The working set is kept sorted by weight. Leaves start in table order,
    /// stably sorted, so equal weights keep their table position. Each round
    /// merges the two front nodes and reinserts the result in front of the
    /// first node that weighs at least as much.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let mut nodes: Vec<HuffNode> = frequencies
            .iter()
            .map(|(symbol, count)| HuffNode::new(symbol, count as u64))
            .collect();

        nodes.sort_by_key(HuffNode::weight);

        let mut nodes = VecDeque::from(nodes);

        while nodes.len() > 1 {
            let (Some(left), Some(right)) = (nodes.pop_front(), nodes.pop_front()) else {
                unreachable!("the working set holds at least two nodes");
            };

            let merged = HuffNode::merge(left, right);
            let pos = nodes.partition_point(|node| node.weight() < merged.weight());
            nodes.insert(pos, merged);
        }

        let root = nodes
            .pop_front()
            .ok_or_else(|| HuffmanError::corrupt("the frequency table is empty"))?;

        Ok(HuffmanTree { root })
    }

    pub fn generate_table(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }

    pub fn leaf_count(&self) -> usize {
        self.root.count_nodes().0
    }

    pub fn internal_count(&self) -> usize {
        self.root.count_nodes().1
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn weight(&self) -> u64 {
        self.root.weight()
    }
}
