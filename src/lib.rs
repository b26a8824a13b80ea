//! # huffman_rust
//!
//! Byte-oriented Huffman compression. A buffer is analysed for symbol
//! frequencies, a prefix tree is built from them with a deterministic
//! tie-break, and the packed bitstream is stored together with the frequency
//! table so that decompression can rebuild exactly the same tree.

pub mod bitstreams;
pub mod codec;
pub mod container;
pub mod error;
pub mod frequency;
pub mod hufftree;
pub mod properties;

pub use codec::{compress, compress_detailed, decompress, CompressionResult, CompressionStats};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use hufftree::{codes::{Code, CodeTable}, HuffNode, HuffmanTree};
