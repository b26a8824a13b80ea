use rand::{rngs::StdRng, Rng, SeedableRng};

use super::*;

fn assert_corrupt(blob: &[u8]) {
    match decompress(blob) {
        Err(HuffmanError::CorruptData(_)) => {}
        other => panic!("expected corrupt data, got {:?}", other),
    }
}

#[test]
fn test_known_vector() {
    let data = b"AAAAABBBCC";
    let result = compress_detailed(data).unwrap();

    assert_eq!(result.code_table.get(b'A').unwrap().to_string(), "1");
    assert_eq!(result.stats.encoded_bits, 15);
    assert_eq!(result.stats.padding_bits, 1);
    assert_eq!(result.stats.compressed_size, 25);
    assert_eq!(&result.blob[23..], &[0xFA, 0xA0]);
    assert_eq!(decompress(&result.blob).unwrap(), data);
}

#[test]
fn test_single_symbol() {
    let data = [0x41, 0x41, 0x41];
    let result = compress_detailed(&data).unwrap();

    assert_eq!(result.frequencies.iter().collect::<Vec<_>>(), vec![(0x41, 3)]);
    assert_eq!(result.code_table.len(), 1);
    assert_eq!(result.code_table.get(0x41).unwrap().to_string(), "0");
    assert_eq!(result.stats.encoded_bits, 3);
    assert_eq!(result.stats.padding_bits, 5);
    assert_eq!(decompress(&result.blob).unwrap(), data);
}

#[test]
fn test_single_byte() {
    let blob = compress(&[0]).unwrap();

    assert_eq!(decompress(&blob).unwrap(), vec![0]);
}

#[test]
fn test_empty_input() {
    assert!(matches!(compress(&[]), Err(HuffmanError::EmptyInput)));
    assert!(matches!(compress_detailed(&[]), Err(HuffmanError::EmptyInput)));
}

#[test]
fn test_byte_aligned_stream_has_no_padding() {
    let data = b"ABABABAB";
    let result = compress_detailed(data).unwrap();
    let padding_offset = Container::header_len(2) - 4;

    assert_eq!(result.stats.encoded_bits, 8);
    assert_eq!(result.stats.padding_bits, 0);
    assert_eq!(&result.blob[padding_offset..padding_offset + 4], &[0, 0, 0, 0]);
    assert_eq!(decompress(&result.blob).unwrap(), data);
}

#[test]
fn test_truncated_payload() {
    let inputs: [&[u8]; 4] = [b"AAAAABBBCC", &[0x41, 0x41, 0x41], b"ABABABAB", b"the quick brown fox jumps over the lazy dog"];

    for data in inputs {
        let blob = compress(data).unwrap();
        assert_corrupt(&blob[..blob.len() - 1]);
    }
}

#[test]
fn test_truncated_header() {
    let blob = compress(b"AAAAABBBCC").unwrap();

    for len in 0..Container::header_len(3) {
        assert_corrupt(&blob[..len]);
    }
}

#[test]
fn test_extra_payload() {
    let mut blob = compress(b"AAAAABBBCC").unwrap();
    blob.push(0xFF);

    assert_corrupt(&blob);
}

#[test]
fn test_stream_ending_inside_a_code() {
    // With the padding field zeroed the trailing pad bit starts a code that never ends
    let mut blob = compress(b"AAAAABBBCC").unwrap();
    blob[19..23].copy_from_slice(&0u32.to_le_bytes());

    assert_corrupt(&blob);
}

#[test]
fn test_empty_table() {
    let mut blob = 0u32.to_le_bytes().to_vec();
    blob.extend_from_slice(&0u32.to_le_bytes());

    assert_corrupt(&blob);
}

#[test]
fn test_unpack_stops_at_leaves() {
    let tree = HuffmanTree::from_bytes(b"AAAAABBBCC").unwrap();
    // 1 01 00 1
    let reader = BinaryReader::new(&[0b1010_0100], 2).unwrap();

    assert_eq!(unpack(&tree, reader).unwrap(), b"ABCA");
}

#[test]
fn test_unpack_single_leaf_counts_bits() {
    let tree = HuffmanTree::from_bytes(b"zz").unwrap();
    let reader = BinaryReader::new(&[0x00, 0x00], 3).unwrap();

    assert_eq!(unpack(&tree, reader).unwrap(), vec![b'z'; 13]);
}

#[test]
#[should_panic]
fn test_pack_with_foreign_table() {
    let codes = HuffmanTree::from_bytes(b"abc").unwrap().generate_table();

    pack(b"abd", &codes);
}

#[test]
fn test_pack_matches_code_table() {
    let data = b"mississippi";
    let codes = HuffmanTree::from_bytes(data).unwrap().generate_table();
    let packed = pack(data, &codes);

    let expected: String = data.iter().map(|&byte| codes.get(byte).unwrap().to_string()).collect();
    let reader = BinaryReader::new(&packed.os, packed.padding()).unwrap();
    let written: String = reader.map(|bit| if bit { '1' } else { '0' }).collect();

    assert_eq!(written, expected);
}

#[test]
fn test_random_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..200 {
        let len = rng.gen_range(1..3000);
        let alphabet = rng.gen_range(1..=256usize);
        let data: Vec<u8> = (0..len).map(|_| rng.gen_range(0..alphabet) as u8).collect();

        let blob = compress(&data).unwrap();
        assert_eq!(decompress(&blob).unwrap(), data);
    }
}

#[test]
fn test_skewed_roundtrip() {
    let mut data = Vec::new();
    for symbol in 0..30u8 {
        data.extend(std::iter::repeat(symbol).take(1 << (symbol / 3)));
    }

    let result = compress_detailed(&data).unwrap();

    assert!(result.tree.depth() > 8);
    assert_eq!(decompress(&result.blob).unwrap(), data);
}

#[test]
fn test_decoder_rebuilds_encoder_tree() {
    let data = b"she sells sea shells by the sea shore";
    let result = compress_detailed(data).unwrap();
    let container = Container::parse(&result.blob).unwrap();

    assert_eq!(HuffmanTree::from_frequencies(&container.frequencies).unwrap(), result.tree);
}

#[test]
fn test_compression_shrinks_redundant_input() {
    let data = vec![b'a'; 10_000];
    let result = compress_detailed(&data).unwrap();

    assert!(result.stats.compressed_size < data.len());
    assert!(result.stats.space_saving > 0.0);
}
