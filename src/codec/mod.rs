//! Compression and decompression entry points.
//!
//! ```
//! let blob = huffman_rust::compress(b"AAAAABBBCC")?;
//! assert_eq!(huffman_rust::decompress(&blob)?, b"AAAAABBBCC");
//! # Ok::<(), huffman_rust::HuffmanError>(())
//! ```

use crate::bitstreams::{BinaryReader, BinaryWriter, BinaryWriterBuilder};
use crate::container::Container;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::hufftree::codes::CodeTable;
use crate::hufftree::{HuffNode, HuffmanTree};

pub mod stats;

pub use stats::CompressionStats;

/// Everything one compression run produced.
#[derive(Clone, Debug)]
pub struct CompressionResult {
    pub blob: Vec<u8>,
    pub frequencies: FrequencyTable,
    pub tree: HuffmanTree,
    pub code_table: CodeTable,
    pub stats: CompressionStats,
}

/// Compresses `data` into a container blob.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_detailed(data).map(|result| result.blob)
}

/// Compresses `data`, keeping the tree, the codes and the size figures.
pub fn compress_detailed(data: &[u8]) -> Result<CompressionResult> {
    if data.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    let frequencies = FrequencyTable::from_bytes(data)?;
    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let code_table = tree.generate_table();

    let packed = pack(data, &code_table);
    let encoded_bits = packed.written_bits;

    log::debug!(
        "encoded {} bytes with {} symbols into {} bits (tree depth {})",
        data.len(),
        frequencies.len(),
        encoded_bits,
        tree.depth()
    );

    let container = Container::new(frequencies.clone(), packed);
    let blob = container.serialize();
    let stats = CompressionStats::new(data.len(), blob.len(), frequencies.len(), encoded_bits, container.padding);

    Ok(CompressionResult {
        blob,
        frequencies,
        tree,
        code_table,
        stats,
    })
}

/// Restores the original bytes from a container blob.
pub fn decompress(blob: &[u8]) -> Result<Vec<u8>> {
    let container = Container::parse(blob)?;
    let tree = HuffmanTree::from_frequencies(&container.frequencies)?;

    let decoded = unpack(&tree, container.reader()?)?;

    let expected = container.frequencies.total();
    if decoded.len() as u64 != expected {
        return Err(HuffmanError::corrupt(format!(
            "decoded {} symbols, the frequency table accounts for {}",
            decoded.len(),
            expected
        )));
    }

    log::debug!("decoded {} bytes from a {}-byte blob", decoded.len(), blob.len());

    Ok(decoded)
}

/// Concatenates the code of every byte of `data`.
///
/// # Panics
///
/// If a byte of `data` has no code, which means `codes` was not derived from
/// the frequencies of `data`.
pub fn pack(data: &[u8], codes: &CodeTable) -> BinaryWriter {
    let lookup = codes.lookup();
    let mut writer = BinaryWriterBuilder::new();

    for &byte in data {
        match lookup[byte as usize] {
            Some(code) => {
                writer.push_code(code);
            }
            None => panic!("Byte {:#04x} has no code in the table", byte),
        }
    }

    writer.build()
}

/// Walks `tree` along the bits of `reader`, emitting a byte at every leaf.
///
/// A tree made of a single leaf decodes every bit as one occurrence of its
/// symbol, mirroring the one-bit code "0" the encoder emits for it.
pub fn unpack(tree: &HuffmanTree, reader: BinaryReader) -> Result<Vec<u8>> {
    let root = &tree.root;

    if let HuffNode::Leaf { symbol, .. } = root {
        return Ok(vec![*symbol; reader.remaining()]);
    }

    let mut result = Vec::with_capacity(reader.remaining());
    let mut current = root;

    for bit in reader {
        current = current
            .child(bit)
            .ok_or_else(|| HuffmanError::corrupt("a bit leads past a leaf of the tree"))?;

        if let HuffNode::Leaf { symbol, .. } = current {
            result.push(*symbol);
            current = root;
        }
    }

    if !std::ptr::eq(current, root) {
        return Err(HuffmanError::corrupt("the bitstream ends inside a code"));
    }

    Ok(result)
}

#[cfg(test)]
mod tests;
