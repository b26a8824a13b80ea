use crate::bitstreams::{BinaryReader, BinaryWriter};
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;

/// Size of the table entry count field.
pub const TABLE_LEN_BYTES: usize = 4;
/// Size of one table entry: symbol byte followed by its count.
pub const ENTRY_BYTES: usize = 5;
/// Size of the padding bit count field.
pub const PADDING_BYTES: usize = 4;
/// Distinct byte values an entry table can hold.
pub const MAX_ENTRIES: usize = 256;

/// The self-describing compressed artifact.
///
/// Layout, all integers little-endian:
///
/// | offset | size | field |
/// |---|---|---|
/// | 0 | 4 | table entry count `T` |
/// | 4 | 5T | `T` entries: symbol (1 byte), count (4 bytes) |
/// | 4 + 5T | 4 | padding bit count (0-7) |
/// | 8 + 5T | rest | packed payload |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub frequencies: FrequencyTable,
    pub padding: u8,
    pub payload: Vec<u8>,
}

impl Container {
    pub fn new(frequencies: FrequencyTable, packed: BinaryWriter) -> Self {
        Self {
            frequencies,
            padding: packed.padding(),
            payload: packed.os.into_vec(),
        }
    }

    /// Size of the header for a table of `entries` entries.
    #[inline(always)]
    pub fn header_len(entries: usize) -> usize {
        TABLE_LEN_BYTES + ENTRY_BYTES * entries + PADDING_BYTES
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::header_len(self.frequencies.len()) + self.payload.len());

        bytes.extend_from_slice(&(self.frequencies.len() as u32).to_le_bytes());
        for (symbol, count) in self.frequencies.iter() {
            bytes.push(symbol);
            bytes.extend_from_slice(&count.to_le_bytes());
        }
        bytes.extend_from_slice(&(self.padding as u32).to_le_bytes());
        bytes.extend_from_slice(&self.payload);

        bytes
    }

    pub fn parse(blob: &[u8]) -> Result<Self> {
        let entries = read_u32(blob, 0)? as usize;
        if entries > MAX_ENTRIES {
            return Err(HuffmanError::corrupt(format!(
                "the table declares {} entries, at most {} are possible",
                entries, MAX_ENTRIES
            )));
        }

        let header_len = Self::header_len(entries);
        if blob.len() < header_len {
            return Err(HuffmanError::corrupt(format!(
                "blob of {} bytes is shorter than its {}-byte header",
                blob.len(),
                header_len
            )));
        }

        let mut frequencies = FrequencyTable::new();
        let mut offset = TABLE_LEN_BYTES;
        for _ in 0..entries {
            let symbol = blob[offset];
            let count = read_u32(blob, offset + 1)?;
            frequencies.insert(symbol, count)?;
            offset += ENTRY_BYTES;
        }

        let padding = read_u32(blob, offset)?;
        if padding > 7 {
            return Err(HuffmanError::corrupt(format!("padding of {} bits is out of range", padding)));
        }

        Ok(Self {
            frequencies,
            padding: padding as u8,
            payload: blob[header_len..].to_vec(),
        })
    }

    /// Bits of the payload without the trailing padding.
    pub fn reader(&self) -> Result<BinaryReader<'_>> {
        BinaryReader::new(&self.payload, self.padding)
    }
}

#[inline(always)]
fn read_u32(blob: &[u8], offset: usize) -> Result<u32> {
    blob.get(offset..offset + 4)
        .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
        .map(u32::from_le_bytes)
        .ok_or_else(|| HuffmanError::corrupt(format!("blob ends before the field at offset {}", offset)))
}

#[cfg(test)]
mod tests;
