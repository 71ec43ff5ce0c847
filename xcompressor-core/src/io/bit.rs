// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Word-packed bit writer/reader and the Golomb-Rice codeword helpers built on top of them.

use crate::error::{decode_error, Result};

/// Shift left without panicking when `n >= 32` (the result is simply `0` in that case, which
/// never happens in practice since `k` stays far below 32, but the helper avoids relying on
/// that at the type level).
#[inline(always)]
fn shl32(v: u32, n: u32) -> u32 {
    if n >= 32 {
        0
    } else {
        v << n
    }
}

#[inline(always)]
fn shr32(v: u32, n: u32) -> u32 {
    if n >= 32 {
        0
    } else {
        v >> n
    }
}

#[inline(always)]
fn mask32(n: u32) -> u32 {
    if n >= 32 {
        u32::MAX
    } else {
        (1u32 << n) - 1
    }
}

/// Writes bits into a growable byte buffer, flushing a little-endian 32-bit word every time the
/// internal accumulator fills.
///
/// `BitWriter` is infallible: the backing `Vec<u8>` grows as needed, so none of its methods can
/// fail the way the original fixed-capacity buffer could.
pub struct BitWriter {
    out: Vec<u8>,
    b: u32,
    c: u32,
}

impl BitWriter {
    /// Creates a new, empty writer.
    pub fn new() -> Self {
        BitWriter { out: Vec::new(), b: 0, c: 0 }
    }

    /// Creates a new, empty writer whose backing buffer is pre-sized to `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        BitWriter { out: Vec::with_capacity(capacity), b: 0, c: 0 }
    }

    #[inline(always)]
    fn flush_word(&mut self) {
        self.out.extend_from_slice(&self.b.to_le_bytes());
        self.b = 0;
        self.c = 0;
    }

    /// Writes a single `1` bit.
    #[inline]
    pub fn put_nonzero_bit(&mut self) {
        self.b |= 1 << self.c;
        self.c += 1;
        if self.c == 32 {
            self.flush_word();
        }
    }

    /// Writes the low `n` bits of `value`, LSB-first. `n` must be `<= 32`.
    pub fn write_bits(&mut self, value: u32, n: u32) {
        debug_assert!(n <= 32);

        let mut value = value & mask32(n);
        let mut n = n;

        while n > 0 {
            let avail = 32 - self.c;
            let take = avail.min(n);

            self.b |= (value & mask32(take)) << self.c;
            self.c += take;
            value = shr32(value, take);
            n -= take;

            if self.c == 32 {
                self.flush_word();
            }
        }
    }

    /// Writes `n` zero bits. Equivalent to `write_bits(0, n)` but does not need to mask.
    pub fn write_zero_bits(&mut self, n: u32) {
        debug_assert!(n <= 32);

        let mut n = n;
        while n > 0 {
            let take = (32 - self.c).min(n);
            self.c += take;
            n -= take;

            if self.c == 32 {
                self.flush_word();
            }
        }
    }

    /// Writes `n` zero bits followed by a terminating `1` bit. `n` has no upper bound; it is
    /// emitted in 32-bit chunks.
    pub fn write_unary(&mut self, n: u32) {
        let mut n = n;
        while n > 32 {
            self.write_zero_bits(32);
            n -= 32;
        }
        self.write_zero_bits(n);
        self.put_nonzero_bit();
    }

    /// Writes the Golomb-Rice code of non-negative integer `n` with parameter `k` (`M = 2^k`).
    /// Precondition: `k <= 32`.
    pub fn write_gr(&mut self, k: u32, n: u32) {
        debug_assert!(k <= 32);
        self.write_unary(shr32(n, k));
        self.write_bits(n, k);
    }

    /// Flushes any partial word (zero-padded in the high bits) and returns the encoded bytes.
    pub fn close(mut self) -> Vec<u8> {
        if self.c > 0 {
            self.flush_word();
        }
        self.out
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads bits out of a word-packed, LSB-first byte slice.
///
/// Unlike `BitWriter`, reads are fallible: a malformed or truncated stream must be reported as a
/// `Decode` error rather than panicking or reading out of bounds.
pub struct BitReader<'a> {
    buf: &'a [u8],
    pos: usize,
    b: u32,
    c: u32,
}

impl<'a> BitReader<'a> {
    /// Creates a reader over `buf`. The first read triggers a word load.
    pub fn new(buf: &'a [u8]) -> Self {
        BitReader { buf, pos: 0, b: 0, c: 32 }
    }

    fn reload(&mut self) -> Result<()> {
        let end = self.pos + 4;
        if end > self.buf.len() {
            return decode_error("unexpected end of bit stream");
        }
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.buf[self.pos..end]);
        self.b = u32::from_le_bytes(word);
        self.c = 0;
        self.pos = end;
        Ok(())
    }

    /// Reads `n` bits (`n <= 32`) and returns them as the low bits of the result.
    pub fn read_bits(&mut self, n: u32) -> Result<u32> {
        debug_assert!(n <= 32);

        if n == 0 {
            return Ok(0);
        }

        if self.c == 32 {
            self.reload()?;
        }

        let avail = 32 - self.c;
        let take = avail.min(n);

        let mut w = self.b & mask32(take);
        self.b = shr32(self.b, take);
        self.c += take;

        let remaining = n - take;
        if remaining > 0 {
            self.reload()?;

            w |= (self.b & mask32(remaining)) << take;
            self.b = shr32(self.b, remaining);
            self.c += remaining;
        }

        Ok(w)
    }

    /// Reads zero bits up to and including the terminating `1` bit; returns the count of zeros.
    pub fn read_unary(&mut self) -> Result<u32> {
        let mut total = 0u32;

        loop {
            if self.c == 32 {
                self.reload()?;
            }

            let avail = 32 - self.c;
            let tz = self.b.trailing_zeros().min(avail);

            self.b = shr32(self.b, tz);
            self.c += tz;
            total += tz;

            if self.c != 32 {
                break;
            }
        }

        // Drop the terminating 1 bit.
        self.b >>= 1;
        self.c += 1;

        Ok(total)
    }

    /// Reads the Golomb-Rice code of a non-negative integer with parameter `k`. Precondition:
    /// `k <= 32`.
    pub fn read_gr(&mut self, k: u32) -> Result<u32> {
        debug_assert!(k <= 32);
        let q = self.read_unary()?;
        let r = self.read_bits(k)?;
        Ok(shl32(q, k) | r)
    }
}

/// Returns the exact bit length of the Golomb-Rice code of `n` under parameter `k`.
pub fn sizeof_gr(k: u32, n: u32) -> usize {
    (shr32(n, k) as usize) + 1 + (k as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_bit_round_trip() {
        let values: &[(u32, u32)] =
            &[(0, 0), (1, 1), (0xABCD, 16), (0x7FFF_FFFF, 31), (u32::MAX, 32), (5, 3), (0, 5)];

        let mut writer = BitWriter::new();
        for &(v, n) in values {
            writer.write_bits(v, n);
        }
        let bytes = writer.close();

        let mut reader = BitReader::new(&bytes);
        for &(v, n) in values {
            let expected = if n == 32 { v } else { v & ((1 << n) - 1) };
            assert_eq!(reader.read_bits(n).unwrap(), expected);
        }
    }

    #[test]
    fn verify_bits_spanning_word_boundary() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1, 1);
        writer.write_bits(0xFFFF_FFFF, 32);
        writer.write_bits(0b101, 3);
        let bytes = writer.close();
        assert_eq!(bytes.len(), 8);

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(1).unwrap(), 1);
        assert_eq!(reader.read_bits(32).unwrap(), 0xFFFF_FFFF);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
    }

    #[test]
    fn verify_unary_round_trip() {
        let ns = [0u32, 1, 2, 31, 32, 33, 63, 64, 1000, 1_000_000];

        let mut writer = BitWriter::new();
        for &n in &ns {
            writer.write_unary(n);
        }
        let bytes = writer.close();

        let mut reader = BitReader::new(&bytes);
        for &n in &ns {
            assert_eq!(reader.read_unary().unwrap(), n);
        }
    }

    #[test]
    fn verify_gr_round_trip_and_sizeof() {
        for k in 0..8u32 {
            for n in [0u32, 1, 2, 7, 8, 65, 255, 256, 4095] {
                let mut writer = BitWriter::new();
                writer.write_gr(k, n);
                let bytes = writer.close();

                let padded_bits = bytes.len() * 8;
                let exact_bits = sizeof_gr(k, n);
                assert!(exact_bits <= padded_bits);
                assert!(padded_bits - exact_bits < 32);

                let mut reader = BitReader::new(&bytes);
                assert_eq!(reader.read_gr(k).unwrap(), n);
            }
        }
    }

    #[test]
    fn verify_sizeof_gr_matches_emitted_length() {
        // sizeof_gr predicts exact bit usage when codewords are packed back-to-back with no
        // padding in between (only the final word pads).
        let mut writer = BitWriter::new();
        let mut total_bits = 0usize;
        let k = 3;
        for n in [0u32, 65, 1, 0, 300, 7] {
            writer.write_gr(k, n);
            total_bits += sizeof_gr(k, n);
        }
        let bytes = writer.close();
        let padded_bits = bytes.len() * 8;
        assert!(total_bits <= padded_bits);
        assert!(padded_bits - total_bits < 32);
    }

    #[test]
    fn verify_empty_reader_errors_instead_of_panicking() {
        let mut reader = BitReader::new(&[]);
        assert!(reader.read_bits(1).is_err());

        let mut reader = BitReader::new(&[]);
        assert!(reader.read_unary().is_err());
    }

    #[test]
    fn verify_sentinel_scenario_s1() {
        // s = "" under k = 3: a single Rice(3, 256) codeword, padded to one word.
        let mut writer = BitWriter::new();
        writer.write_gr(3, 256);
        let bytes = writer.close();
        assert_eq!(bytes.len(), 4);

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_gr(3).unwrap(), 256);
    }

    #[test]
    fn verify_read_bits_zero_does_not_force_a_reload_at_end_of_stream() {
        // Land the cursor exactly on a word boundary (c == 32) after consuming every bit of a
        // single word, then read_bits(0) must not try to pull a word that isn't there.
        let mut writer = BitWriter::new();
        writer.write_bits(0xFFFF_FFFF, 32);
        let bytes = writer.close();

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(32).unwrap(), 0xFFFF_FFFF);
        assert_eq!(reader.read_bits(0).unwrap(), 0);
    }

    #[test]
    fn verify_read_gr_with_k_zero_at_end_of_stream() {
        // A k=0 Golomb-Rice code ends in read_bits(0); when the terminating unary bit lands on
        // the last bit of the final word this must not spuriously error.
        let mut writer = BitWriter::new();
        writer.write_bits(0, 31);
        writer.write_gr(0, 0);
        let bytes = writer.close();

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(31).unwrap(), 0);
        assert_eq!(reader.read_gr(0).unwrap(), 0);
    }
}
