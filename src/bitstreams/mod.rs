use crate::error::{HuffmanError, Result};
use crate::hufftree::codes::Code;

/// A finished, byte-aligned bitstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryWriter {
    pub os: Box<[u8]>,
    pub written_bits: usize,
}

impl BinaryWriter {
    /// Number of zero bits appended to fill the last byte (0-7).
    #[inline(always)]
    pub fn padding(&self) -> u8 {
        ((8 - self.written_bits % 8) % 8) as u8
    }
}

/// Writes bits most-significant first, one byte at a time.
pub struct BinaryWriterBuilder {
    os: Vec<u8>,
    pub written_bits: usize,
    pub current: u64,
    pub free: usize,
}

impl Default for BinaryWriterBuilder {
    fn default() -> Self {
        BinaryWriterBuilder {
            os: Vec::default(),
            written_bits: 0,
            current: 0,
            free: 8,
        }
    }
}

impl BinaryWriterBuilder {
    /// Flushes the partially filled byte, if any, with trailing zero bits.
    pub fn build(mut self) -> BinaryWriter {
        if self.free < 8 {
            self.write(self.current);
        }

        BinaryWriter {
            os: self.os.into_boxed_slice(),
            written_bits: self.written_bits,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn write(&mut self, b: u64) {
        self.os.push(b as u8);
    }

    #[inline(always)]
    pub fn write_in_current(&mut self, b: u64, len: u64) -> u64 {
        self.free -= len as usize;
        self.current |= (b & ((1 << len) - 1)) << self.free;

        if self.free == 0 {
            self.write(self.current);
            self.free = 8;
            self.current = 0;
        }

        self.written_bits += len as usize;
        len
    }

    /// Appends the `len` lowest bits of `x`, highest of them first.
    #[inline(always)]
    pub fn push_bits(&mut self, x: u64, len: u64) -> u64 {
        assert!(len <= 64, "Cannot write {} bits from an integer", len);

        let mut left = len;
        while left > 0 {
            let chunk = left.min(self.free as u64);
            left -= chunk;
            self.write_in_current(x >> left, chunk);
        }

        len
    }

    #[inline(always)]
    pub fn push_bit(&mut self, bit: bool) {
        self.write_in_current(bit as u64, 1);
    }

    /// Appends a variable-length code, path order preserved.
    pub fn push_code(&mut self, code: &Code) -> u64 {
        for chunk in code.bits().chunks(32) {
            let x = chunk.iter().fold(0u64, |acc, &bit| (acc << 1) | bit as u64);
            self.push_bits(x, chunk.len() as u64);
        }

        code.len() as u64
    }
}

/// Reads a byte buffer bit by bit, most-significant bit first, ignoring the
/// trailing padding bits of the last byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryReader<'a> {
    is: &'a [u8],
    len_bits: usize,
    pub read_bits: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(input_stream: &'a [u8], padding: u8) -> Result<Self> {
        let total = input_stream.len() * 8;
        let padding = padding as usize;

        if padding > total {
            return Err(HuffmanError::corrupt(format!(
                "cannot trim {} padding bits from a {}-bit payload",
                padding, total
            )));
        }

        Ok(BinaryReader {
            is: input_stream,
            len_bits: total - padding,
            read_bits: 0,
        })
    }

    /// Number of meaningful bits in the stream.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len_bits
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len_bits == 0
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len_bits - self.read_bits
    }

    #[inline(always)]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.read_bits >= self.len_bits {
            return None;
        }

        let byte = self.is[self.read_bits >> 3];
        let bit = (byte >> (7 - (self.read_bits & 7))) & 1;
        self.read_bits += 1;

        Some(bit == 1)
    }

    /// Reads `len` bits as an integer, or `None` if fewer are left.
    pub fn read_int(&mut self, len: u64) -> Option<u64> {
        assert!(len <= 64, "Cannot read {} bits into an integer", len);

        if len as usize > self.remaining() {
            return None;
        }

        let mut x = 0;
        for _ in 0..len {
            x = (x << 1) | self.read_bit()? as u64;
        }

        Some(x)
    }
}

impl Iterator for BinaryReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
