//! A compact binary codec for the bucket-count array of a histogram.
//!
//! Histograms used for latency or throughput measurement can have tens of thousands of buckets,
//! and in practice the overwhelming majority of those buckets hold a count of zero. Persisting
//! such an array as fixed-width integers wastes space and bandwidth, so this crate encodes it as
//! a sequence of zig-zag base-128 varints in which a contiguous run of zero counts collapses
//! into a single negative varint whose magnitude is the run length. A payload representing tens
//! of thousands of buckets with a handful of occupied ones is typically a few dozen bytes.
//!
//! This crate owns only the counts payload. The container that wraps it (magic cookie, header
//! fields, compression, storage or transport) belongs to the caller; the one point of contact is
//! the encoding cookie, from which [`Version::from_cookie`] selects the codec variant to use.
//!
//! # Wire format
//!
//! A payload is a sequence of variable-length signed integers, zig-zag transformed and then
//! split into little-endian groups of 7 bits with the high bit of each byte marking
//! continuation. There is no in-band terminator: decoding stops when the payload's byte length
//! is exhausted or when every bucket index has been accounted for.
//!
//! - A non-negative decoded value is the count at the next bucket index.
//! - A negative decoded value skips that many consecutive zero-count buckets.
//!
//! Each supported format version declares a *word size*, the maximum number of bytes one
//! encoded value may occupy. The algorithm is identical across versions; only that bound
//! changes. See [`Version`].
//!
//! # Examples
//!
//! Encoding a count array and decoding it back:
//!
//! ```
//! use zerorun::Version;
//!
//! let counts: Vec<u64> = vec![0, 0, 0, 5, 0, 2];
//! let codec = Version::V2.codec();
//!
//! let mut buf = vec![0; codec.max_encoded_size(counts.len()).unwrap()];
//! let payload_len = codec
//!     .encode(|i| counts[i], counts.len(), &mut buf)
//!     .unwrap();
//! // four varints: -3, 5, -1, 2, each fitting in one byte
//! assert_eq!(4, payload_len);
//!
//! let mut restored = vec![0_u64; counts.len()];
//! let filled = codec
//!     .decode(
//!         &mut &buf[..payload_len],
//!         payload_len,
//!         restored.len(),
//!         |i, count: u64| restored[i] = count,
//!     )
//!     .unwrap();
//! assert_eq!(counts.len(), filled);
//! assert_eq!(counts, restored);
//! ```
//!
//! Selecting the decoder variant from a stored cookie, the way an outer container format would:
//!
//! ```
//! use zerorun::Version;
//!
//! let cookie = Version::V2.cookie();
//! // ... cookie is written ahead of the payload, read back at load time ...
//! let version = Version::from_cookie(cookie).expect("supported format");
//! assert_eq!(Version::V2, version);
//! assert_eq!(9, version.word_size());
//! ```
//!
//! # Ownership and concurrency
//!
//! The codec is stateless: a [`CountsCodec`] is a `Copy` descriptor holding only its word size,
//! and may be shared freely across threads. The byte cursor and the count array involved in a
//! call are owned by the caller for the duration of that call and are never retained.
//!
//! # Error handling
//!
//! Decoding a hostile or truncated payload fails with [`DecodeError`]; encoding a count too
//! large for the chosen format fails with [`EncodeError`]. Errors abort the call immediately
//! and are never patched over: values applied to the count sink before the failure are valid
//! as far as they go, but the caller must discard the whole result rather than trust a
//! partially-populated array.

mod core;

pub mod codec;

pub use crate::codec::{CountsCodec, DecodeError, EncodeError, Version};
pub use crate::core::counter::Counter;
