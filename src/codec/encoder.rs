use super::varint::{varint_write, zig_zag_encode};
use super::CountsCodec;
use crate::core::counter::Counter;
use num_traits::ToPrimitive;
use std::{error, fmt};

/// Errors that can happen while encoding a counts payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A count exceeds the magnitude encodable in this format version's word size, and
    /// therefore cannot be serialized.
    ValueOutOfRange,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodeError::ValueOutOfRange => write!(
                f,
                "A count exceeds the magnitude encodable in this format version"
            ),
        }
    }
}

impl error::Error for EncodeError {}

impl CountsCodec {
    /// Encode `count` values drawn from `get_count` into `buf`, returning the number of bytes
    /// written.
    ///
    /// Every run of consecutive zero counts, including one at the end of the array, is folded
    /// into a single negative run marker, so the payload always accounts for exactly `count`
    /// positions and decoding it reports that total back. An all-zero array encodes as one
    /// marker; an empty array encodes as an empty payload.
    ///
    /// Fails before writing any byte of the offending value if a count cannot be represented
    /// within this version's word size. Bytes written up to that point are meaningless and
    /// must be discarded along with the error.
    ///
    /// # Panics
    ///
    /// `buf` must hold at least [`max_encoded_size`](CountsCodec::max_encoded_size)`(count)`
    /// bytes.
    pub fn encode<T, F>(
        &self,
        mut get_count: F,
        count: usize,
        buf: &mut [u8],
    ) -> Result<usize, EncodeError>
    where
        T: Counter,
        F: FnMut(usize) -> T,
    {
        let mut bytes_written = 0;
        let mut zero_run = 0_u64;

        for index in 0..count {
            let c = get_count(index);
            if c == T::zero() {
                zero_run += 1;
                continue;
            }

            if zero_run > 0 {
                bytes_written += self.write_run_marker(zero_run, &mut buf[bytes_written..])?;
                zero_run = 0;
            }

            let value = c.to_i64().ok_or(EncodeError::ValueOutOfRange)?;
            bytes_written += self.write_value(value, &mut buf[bytes_written..])?;
        }

        if zero_run > 0 {
            bytes_written += self.write_run_marker(zero_run, &mut buf[bytes_written..])?;
        }

        Ok(bytes_written)
    }

    fn write_run_marker(&self, zero_run: u64, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let run = zero_run.to_i64().ok_or(EncodeError::ValueOutOfRange)?;
        self.write_value(-run, buf)
    }

    /// Write one count-or-zeros value, first checking that it fits the word size.
    fn write_value(&self, count_or_zeros: i64, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let zz = zig_zag_encode(count_or_zeros);
        if zz > self.max_zig_zag() {
            return Err(EncodeError::ValueOutOfRange);
        }
        Ok(varint_write(zz, buf))
    }
}
