use std::collections::BTreeMap;
use std::fmt;

use super::{HuffNode, HuffmanTree};
use crate::frequency::FrequencyTable;

/// The path from the root to a leaf: `false` is a left turn, `true` a right one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl From<&[bool]> for Code {
    fn from(bits: &[bool]) -> Self {
        Code { bits: bits.to_vec() }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Byte value to code, derived from one specific tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut path = Vec::new();
        collect_codes(&tree.root, &mut path, &mut codes);
        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Codes listed from the most to the least frequent symbol.
    pub fn by_frequency<'a>(&'a self, frequencies: &FrequencyTable) -> Vec<(u8, &'a Code)> {
        frequencies
            .by_frequency()
            .into_iter()
            .filter_map(|(symbol, _)| self.get(symbol).map(|code| (symbol, code)))
            .collect()
    }

    /// Direct-indexed view used on the hot encoding path.
    pub fn lookup(&self) -> [Option<&Code>; 256] {
        let mut lookup = [None; 256];
        for (&symbol, code) in self.codes.iter() {
            lookup[symbol as usize] = Some(code);
        }
        lookup
    }

    /// Total number of bits needed to encode a buffer with these counts.
    pub fn encoded_len(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() as u64 * count as u64))
            .sum()
    }
}

fn collect_codes(node: &HuffNode, path: &mut Vec<bool>, codes: &mut BTreeMap<u8, Code>) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            // A lone leaf is its own root and gets the one-bit code "0"
            let code = if path.is_empty() { Code { bits: vec![false] } } else { Code::from(path.as_slice()) };
            codes.insert(*symbol, code);
        }
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            collect_codes(left, path, codes);
            path.pop();

            path.push(true);
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}
