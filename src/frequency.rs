use crate::error::{HuffmanError, Result};

/// Occurrence counts of every byte value seen in a buffer.
///
/// Entries are kept in the order in which each symbol was first seen; this is
/// also the order in which the table is written to a container and the order
/// used to break weight ties while building the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(u8, u32)>,
    index: [Option<u8>; 256],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self { entries: Vec::new(), index: [None; 256] }
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `data` and counts every byte value.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() > u32::MAX as usize {
            return Err(HuffmanError::InputTooLarge(data.len()));
        }

        let mut table = Self::new();
        for &byte in data {
            match table.index[byte as usize] {
                Some(pos) => table.entries[pos as usize].1 += 1,
                None => {
                    table.index[byte as usize] = Some(table.entries.len() as u8);
                    table.entries.push((byte, 1));
                }
            }
        }

        Ok(table)
    }

    /// Appends an entry read back from a container.
    pub fn insert(&mut self, symbol: u8, count: u32) -> Result<()> {
        if count == 0 {
            return Err(HuffmanError::corrupt(format!("symbol {symbol:#04x} has a zero count")));
        }
        if self.index[symbol as usize].is_some() {
            return Err(HuffmanError::corrupt(format!("symbol {symbol:#04x} appears twice in the table")));
        }

        self.index[symbol as usize] = Some(self.entries.len() as u8);
        self.entries.push((symbol, count));
        Ok(())
    }

    #[inline(always)]
    pub fn get(&self, symbol: u8) -> Option<u32> {
        self.index[symbol as usize].map(|pos| self.entries[pos as usize].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the buffer the table describes.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count as u64).sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries ordered by decreasing count; equal counts keep table order.
    pub fn by_frequency(&self) -> Vec<(u8, u32)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|first, second| second.1.cmp(&first.1));
        sorted
    }
}

#[test]
fn test_first_occurrence_order() {
    let table = FrequencyTable::from_bytes(b"banana").unwrap();

    assert_eq!(table.iter().collect::<Vec<_>>(), vec![(b'b', 1), (b'a', 3), (b'n', 2)]);
    assert_eq!(table.total(), 6);
    assert_eq!(table.get(b'a'), Some(3));
    assert_eq!(table.get(b'z'), None);
}

#[test]
fn test_empty_input_gives_empty_table() {
    let table = FrequencyTable::from_bytes(&[]).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.total(), 0);
}

#[test]
fn test_all_byte_values() {
    let data: Vec<u8> = (0..=255).chain(0..=255).collect();
    let table = FrequencyTable::from_bytes(&data).unwrap();

    assert_eq!(table.len(), 256);
    assert!(table.iter().all(|(_, count)| count == 2));
    assert_eq!(table.iter().next(), Some((0, 2)));
}

#[test]
fn test_by_frequency_is_stable() {
    let table = FrequencyTable::from_bytes(b"xyzzyq").unwrap();

    assert_eq!(table.by_frequency(), vec![(b'y', 2), (b'z', 2), (b'x', 1), (b'q', 1)]);
}

#[test]
fn test_insert_rejects_duplicates_and_zero_counts() {
    let mut table = FrequencyTable::new();
    table.insert(7, 3).unwrap();

    assert!(matches!(table.insert(7, 1), Err(HuffmanError::CorruptData(_))));
    assert!(matches!(table.insert(8, 0), Err(HuffmanError::CorruptData(_))));
    assert_eq!(table.len(), 1);
}
