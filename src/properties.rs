use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::codec::CompressionStats;
use crate::error::{HuffmanError, Result};

/// Sidecar describing a compressed file, stored as `<name>.properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    pub original_size: u64,
    pub compressed_size: u64,
    pub distinct_symbols: usize,
    pub encoded_bits: u64,
    pub padding_bits: u8,
}

impl Properties {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let map = java_properties::read(BufReader::new(file))
            .map_err(|e| HuffmanError::InvalidProperties(e.to_string()))?;

        Properties::try_from(map)
    }

    pub fn store(self, path: &Path) -> Result<()> {
        std::fs::write(path, String::from(self))?;
        Ok(())
    }
}

impl From<&CompressionStats> for Properties {
    fn from(stats: &CompressionStats) -> Self {
        Self {
            original_size: stats.original_size as u64,
            compressed_size: stats.compressed_size as u64,
            distinct_symbols: stats.distinct_symbols,
            encoded_bits: stats.encoded_bits as u64,
            padding_bits: stats.padding_bits,
        }
    }
}

fn required<T: std::str::FromStr>(map: &HashMap<String, String>, key: &str) -> Result<T> {
    let value = map
        .get(key)
        .ok_or_else(|| HuffmanError::InvalidProperties(format!("missing {}", key)))?;

    value
        .trim()
        .parse()
        .map_err(|_| HuffmanError::InvalidProperties(format!("{}={} is not a number", key, value)))
}

impl TryFrom<HashMap<String, String>> for Properties {
    type Error = HuffmanError;

    fn try_from(value: HashMap<String, String>) -> Result<Self> {
        let props = Properties {
            original_size: required(&value, "originalsize")?,
            compressed_size: required(&value, "compressedsize")?,
            distinct_symbols: required(&value, "symbols")?,
            encoded_bits: required(&value, "encodedbits")?,
            padding_bits: required(&value, "paddingbits")?,
        };

        if props.padding_bits > 7 {
            return Err(HuffmanError::InvalidProperties(format!("paddingbits={} is out of range", props.padding_bits)));
        }

        Ok(props)
    }
}

impl From<Properties> for String {
    fn from(val: Properties) -> Self {
        let mut s = String::new();

        s.push_str("#Huffman properties\n");
        s.push_str("version=0\n");
        s.push_str(&format!("originalsize={}\n", val.original_size));
        s.push_str(&format!("compressedsize={}\n", val.compressed_size));
        s.push_str(&format!("symbols={}\n", val.distinct_symbols));
        s.push_str(&format!("encodedbits={}\n", val.encoded_bits));
        s.push_str(&format!("paddingbits={}\n", val.padding_bits));

        s
    }
}
