use super::varint::{varint_read, zig_zag_decode};
use super::CountsCodec;
use crate::core::counter::Counter;
use num_traits::ToPrimitive;
use std::io::{self, Read};
use std::{error, fmt};

/// Errors that can happen while decoding a counts payload.
#[derive(Debug)]
pub enum DecodeError {
    /// An i/o operation failed for a reason other than reaching the end of the payload.
    IoError(io::Error),
    /// The payload ended in the middle of an encoded value, or an encoded value occupied more
    /// bytes than the format version's word size allows.
    MalformedVarint,
    /// A zero-run length cannot be represented as a non-negative index count.
    RunLengthOverflow,
    /// A count exceeded what can be represented in the chosen counter type.
    UnsuitableCounterType,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::IoError(e) => write!(f, "An i/o operation failed: {}", e),
            DecodeError::MalformedVarint => write!(
                f,
                "The payload ended mid-value or a value exceeded the format's word size"
            ),
            DecodeError::RunLengthOverflow => write!(
                f,
                "A zero-run length cannot be represented as a non-negative index count"
            ),
            DecodeError::UnsuitableCounterType => write!(
                f,
                "A count exceeded what can be represented in the chosen counter type"
            ),
        }
    }
}

impl error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            DecodeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl CountsCodec {
    /// Decode a counts payload from `reader`, handing each explicitly encoded count to
    /// `set_count`.
    ///
    /// At most `byte_length` bytes are read and at most `max_index` bucket positions are
    /// accounted for; reaching either bound ends the decode cleanly. Both endings are normal:
    /// a payload may describe fewer positions than `max_index` (the rest are implicit zeros),
    /// and bytes may remain unread once every position is accounted for.
    ///
    /// `set_count` is invoked only for positions the payload encodes explicitly, with strictly
    /// increasing indices below `max_index`. Positions covered by a zero-run are skipped, so
    /// the target array must start out zeroed.
    ///
    /// Returns the next bucket index after the last position accounted for, which callers can
    /// compare against the expected logical length. A zero-run at the end of the payload may
    /// push this total past `max_index`; the sink is still never invoked at or beyond
    /// `max_index`.
    ///
    /// On error the counts applied so far remain in the target array; the caller must discard
    /// the whole result rather than trust it.
    pub fn decode<T, R, F>(
        &self,
        reader: &mut R,
        byte_length: usize,
        max_index: usize,
        mut set_count: F,
    ) -> Result<usize, DecodeError>
    where
        T: Counter,
        R: Read,
        F: FnMut(usize, T),
    {
        // never read past the declared payload length, whatever the bytes claim
        let mut payload = reader.by_ref().take(byte_length as u64);
        let mut dest_index = 0_usize;

        while payload.limit() > 0 && dest_index < max_index {
            let (zz, bytes_read) = varint_read(&mut payload)?;
            if bytes_read > self.word_size {
                return Err(DecodeError::MalformedVarint);
            }

            let count_or_zeros = zig_zag_decode(zz);

            if count_or_zeros < 0 {
                let zero_count = count_or_zeros
                    .checked_neg()
                    .and_then(|z| z.to_usize())
                    .ok_or(DecodeError::RunLengthOverflow)?;

                // the skipped positions keep their default zero; the sink is not called
                dest_index = dest_index
                    .checked_add(zero_count)
                    .ok_or(DecodeError::RunLengthOverflow)?;
            } else {
                let count =
                    T::from_i64(count_or_zeros).ok_or(DecodeError::UnsuitableCounterType)?;
                set_count(dest_index, count);
                dest_index += 1;
            }
        }

        Ok(dest_index)
    }
}
