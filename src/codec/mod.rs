//! Encoding and decoding of counts payloads.
//!
//! A counts payload is a sequence of zig-zag varints with no in-band terminator: a non-negative
//! value is the count at the next bucket index, a negative value skips that many zero-count
//! buckets. Decoding ends when the payload's byte length is exhausted or when every bucket
//! index has been accounted for; buckets the payload never mentions are zero.
//!
//! Format versions share this algorithm and differ only in their word size, the maximum number
//! of bytes one encoded value may occupy. The version in effect is declared out of band by the
//! outer container's encoding cookie; [`Version::from_cookie`] picks the matching codec.

use self::varint::MAX_VARINT_LEN;

pub mod varint;

mod decoder;
pub use self::decoder::DecodeError;

mod encoder;
pub use self::encoder::EncodeError;


const V2_COOKIE_BASE: u32 = 0x1c84_9303;
const V3_COOKIE_BASE: u32 = 0x1c84_9305;

const V2_WORD_SIZE: usize = 9;
const V3_WORD_SIZE: usize = MAX_VARINT_LEN;

// bits 4-7 of a cookie carry the version's declared word size
const V2_COOKIE: u32 = V2_COOKIE_BASE | ((V2_WORD_SIZE as u32) << 4);
const V3_COOKIE: u32 = V3_COOKIE_BASE | ((V3_WORD_SIZE as u32) << 4);

/// Format version of an encoded counts payload.
///
/// All versions use the same zig-zag varint and zero-run scheme and differ only in their word
/// size: the maximum number of bytes one encoded value may occupy, and with it the largest
/// encodable count. Which version a payload uses is declared by the encoding cookie its outer
/// container stores alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// Nine-byte words: 63 payload bits per value, counts up to `(1 << 62) - 1`.
    V2,
    /// Ten-byte words: the full 64-bit zig-zag range, i.e. any count up to `i64::max_value()`.
    V3,
}

impl Version {
    /// Look up the version a stored encoding cookie declares, or `None` if the cookie does not
    /// match any supported format.
    pub fn from_cookie(cookie: u32) -> Option<Version> {
        match cookie {
            V2_COOKIE => Some(Version::V2),
            V3_COOKIE => Some(Version::V3),
            _ => None,
        }
    }

    /// The encoding cookie declaring this version: the version's cookie base with the word
    /// size in bits 4-7.
    pub fn cookie(self) -> u32 {
        match self {
            Version::V2 => V2_COOKIE,
            Version::V3 => V3_COOKIE,
        }
    }

    /// Maximum number of bytes one encoded value may occupy in this version.
    pub fn word_size(self) -> usize {
        match self {
            Version::V2 => V2_WORD_SIZE,
            Version::V3 => V3_WORD_SIZE,
        }
    }

    /// The largest count this version can encode.
    pub fn max_count(self) -> u64 {
        self.codec().max_count()
    }

    /// The codec configured with this version's word size.
    pub fn codec(self) -> CountsCodec {
        CountsCodec {
            word_size: self.word_size(),
        }
    }
}

/// Encoder/decoder for counts payloads of one format version's word size.
///
/// Stateless: holds only the word size, so an instance is `Copy` and may be shared freely
/// across threads and calls. Obtained from [`Version::codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountsCodec {
    word_size: usize,
}

impl CountsCodec {
    /// Maximum number of bytes one encoded value may occupy.
    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// The largest count this codec can encode. Capped at `i64::max_value()` regardless of
    /// word size because the wire representation is a signed 64-bit value.
    pub fn max_count(&self) -> u64 {
        (self.max_zig_zag() >> 1).min(i64::max_value() as u64)
    }

    /// Number of bytes that is always enough to encode `count` values, or `None` if that
    /// cannot be represented in `usize`.
    pub fn max_encoded_size(&self, count: usize) -> Option<usize> {
        count.checked_mul(self.word_size)
    }

    /// Largest zig-zag value that fits in this codec's word size.
    fn max_zig_zag(&self) -> u64 {
        if self.word_size >= MAX_VARINT_LEN {
            u64::max_value()
        } else {
            (1_u64 << (7 * self.word_size as u32)) - 1
        }
    }
}
