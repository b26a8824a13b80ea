use crate::bitstreams::BinaryWriterBuilder;

use super::*;

fn known_container() -> Container {
    let frequencies = FrequencyTable::from_bytes(b"AAAAABBBCC").unwrap();

    let mut writer = BinaryWriterBuilder::new();
    writer.push_bits(0b111_1101_0101_0000, 15);

    Container::new(frequencies, writer.build())
}

#[test]
fn test_serialize_layout() {
    let blob = known_container().serialize();

    assert_eq!(blob.len(), Container::header_len(3) + 2);
    assert_eq!(&blob[0..4], &3u32.to_le_bytes());
    assert_eq!(&blob[4..9], &[b'A', 5, 0, 0, 0]);
    assert_eq!(&blob[9..14], &[b'B', 3, 0, 0, 0]);
    assert_eq!(&blob[14..19], &[b'C', 2, 0, 0, 0]);
    assert_eq!(&blob[19..23], &1u32.to_le_bytes());
    assert_eq!(&blob[23..], &[0xFA, 0xA0]);
}

#[test]
fn test_parse_serialized() {
    let container = known_container();
    let parsed = Container::parse(&container.serialize()).unwrap();

    assert_eq!(parsed, container);
    assert_eq!(parsed.reader().unwrap().len(), 15);
}

#[test]
fn test_parse_keeps_table_order() {
    let mut frequencies = FrequencyTable::new();
    frequencies.insert(200, 1).unwrap();
    frequencies.insert(3, 9).unwrap();
    frequencies.insert(77, 4).unwrap();

    let container = Container { frequencies, padding: 0, payload: vec![0x12, 0x34] };
    let parsed = Container::parse(&container.serialize()).unwrap();

    assert_eq!(parsed.frequencies.iter().collect::<Vec<_>>(), vec![(200, 1), (3, 9), (77, 4)]);
}

#[test]
fn test_short_blobs_are_corrupt() {
    let blob = known_container().serialize();

    for len in [0, 3, 4, 10, Container::header_len(3) - 1] {
        assert!(
            matches!(Container::parse(&blob[..len]), Err(HuffmanError::CorruptData(_))),
            "a blob cut to {} bytes was accepted",
            len
        );
    }

    // The header alone is well formed, the payload check happens when reading bits
    let header_only = Container::parse(&blob[..Container::header_len(3)]).unwrap();
    assert!(matches!(header_only.reader(), Err(HuffmanError::CorruptData(_))));
}

#[test]
fn test_too_many_entries() {
    let mut blob = 257u32.to_le_bytes().to_vec();
    blob.extend(std::iter::repeat(0).take(257 * ENTRY_BYTES + PADDING_BYTES));

    assert!(matches!(Container::parse(&blob), Err(HuffmanError::CorruptData(_))));
}

#[test]
fn test_huge_entry_count_does_not_overflow() {
    let blob = u32::MAX.to_le_bytes();

    assert!(matches!(Container::parse(&blob), Err(HuffmanError::CorruptData(_))));
}

#[test]
fn test_duplicate_symbol() {
    let mut blob = 2u32.to_le_bytes().to_vec();
    blob.extend_from_slice(&[b'A', 1, 0, 0, 0, b'A', 2, 0, 0, 0]);
    blob.extend_from_slice(&0u32.to_le_bytes());
    blob.push(0);

    assert!(matches!(Container::parse(&blob), Err(HuffmanError::CorruptData(_))));
}

#[test]
fn test_zero_count() {
    let mut blob = 1u32.to_le_bytes().to_vec();
    blob.extend_from_slice(&[b'A', 0, 0, 0, 0]);
    blob.extend_from_slice(&0u32.to_le_bytes());

    assert!(matches!(Container::parse(&blob), Err(HuffmanError::CorruptData(_))));
}

#[test]
fn test_padding_out_of_range() {
    let mut blob = known_container().serialize();
    blob[19..23].copy_from_slice(&8u32.to_le_bytes());

    assert!(matches!(Container::parse(&blob), Err(HuffmanError::CorruptData(_))));
}

#[test]
fn test_zero_padding_keeps_all_bits() {
    let mut writer = BinaryWriterBuilder::new();
    writer.push_bits(0b0101_0101, 8);
    let container = Container::new(FrequencyTable::from_bytes(b"ABABABAB").unwrap(), writer.build());

    assert_eq!(container.padding, 0);
    assert_eq!(container.reader().unwrap().len(), 8);
}
