use serde::Serialize;

/// Size figures of one compression run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompressionStats {
    pub original_size: usize,
    pub compressed_size: usize,
    pub distinct_symbols: usize,
    pub encoded_bits: usize,
    pub padding_bits: u8,
    /// Compressed size as a percentage of the original size
    pub ratio: f64,
    /// `100 - ratio`
    pub space_saving: f64,
}

impl CompressionStats {
    pub fn new(original_size: usize, compressed_size: usize, distinct_symbols: usize, encoded_bits: usize, padding_bits: u8) -> Self {
        let ratio = if original_size > 0 {
            compressed_size as f64 / original_size as f64 * 100.0
        } else {
            0.0
        };
        let space_saving = if original_size > 0 { 100.0 - ratio } else { 0.0 };

        Self {
            original_size,
            compressed_size,
            distinct_symbols,
            encoded_bits,
            padding_bits,
            ratio,
            space_saving,
        }
    }
}

#[test]
fn test_ratio_and_saving() {
    let stats = CompressionStats::new(200, 50, 4, 390, 2);

    assert_eq!(stats.ratio, 25.0);
    assert_eq!(stats.space_saving, 75.0);
}

#[test]
fn test_empty_original_has_zero_ratio() {
    let stats = CompressionStats::new(0, 0, 0, 0, 0);

    assert_eq!(stats.ratio, 0.0);
    assert_eq!(stats.space_saving, 0.0);
}

#[test]
fn test_json_fields() {
    let stats = CompressionStats::new(10, 25, 3, 15, 1);
    let json: serde_json::Value = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["original_size"], 10);
    assert_eq!(json["compressed_size"], 25);
    assert_eq!(json["distinct_symbols"], 3);
    assert_eq!(json["padding_bits"], 1);
    assert_eq!(json["ratio"], 250.0);
}
