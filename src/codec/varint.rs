//! The zig-zag varint primitive shared by every format version.

use byteorder::ReadBytesExt;
use std::io::{self, Read};

use super::decoder::DecodeError;

/// Longest possible encoding of a 64-bit value: nine full 7-bit groups plus one final bit.
pub const MAX_VARINT_LEN: usize = 10;

/// Map signed numbers to unsigned: 0 to 0, -1 to 1, 1 to 2, -2 to 3, etc.
#[inline]
pub fn zig_zag_encode(num: i64) -> u64 {
    // If num < 0, num >> 63 is all 1 and vice versa.
    ((num << 1) ^ (num >> 63)) as u64
}

/// Reverse of [`zig_zag_encode`].
#[inline]
pub fn zig_zag_decode(encoded: u64) -> i64 {
    ((encoded >> 1) as i64) ^ -((encoded & 1) as i64)
}

/// Write `input` to `buf` as a little-endian base-128 varint: 7 payload bits per byte, low
/// groups first, with the high bit set on every byte except the last. Returns the number of
/// bytes written (in `[1, 10]`).
///
/// `buf` must have room for the encoding; [`MAX_VARINT_LEN`] bytes is always enough.
#[inline]
pub fn varint_write(input: u64, buf: &mut [u8]) -> usize {
    let mut value = input;
    let mut i = 0;
    while value >= 0x80 {
        buf[i] = 0x80 | ((value as u8) & 0x7F);
        value >>= 7;
        i += 1;
    }
    buf[i] = value as u8;
    i + 1
}

/// Read one varint from `reader`, returning the decoded value and the number of bytes
/// consumed.
///
/// Fails with `MalformedVarint` if the reader ends before a terminating byte is found or if
/// the encoding does not fit in 64 bits.
pub fn varint_read<R: Read>(reader: &mut R) -> Result<(u64, usize), DecodeError> {
    let mut value = 0_u64;
    for i in 0..MAX_VARINT_LEN {
        let b = reader.read_u8().map_err(map_read_error)?;

        if i == MAX_VARINT_LEN - 1 {
            // only bit 63 of the value is left; a continuation marker or any payload beyond
            // that one bit would exceed 64 bits
            if b > 1 {
                return Err(DecodeError::MalformedVarint);
            }
            value |= u64::from(b) << 63;
        } else {
            value |= low_7_bits(b) << (7 * i as u32);
        }

        if !is_high_bit_set(b) {
            return Ok((value, i + 1));
        }
    }

    Err(DecodeError::MalformedVarint)
}

/// Running out of bytes mid-value means the payload was truncated, not that i/o failed.
fn map_read_error(e: io::Error) -> DecodeError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        DecodeError::MalformedVarint
    } else {
        DecodeError::IoError(e)
    }
}

/// truncate byte to low 7 bits, cast to u64
#[inline]
fn low_7_bits(b: u8) -> u64 {
    u64::from(b & 0x7F)
}

#[inline]
fn is_high_bit_set(b: u8) -> bool {
    (b & 0x80) != 0
}
