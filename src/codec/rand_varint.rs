//! This is used in tests (both unit tests and integration tests) to provide useful
//! distributions of random numbers.

use rand::distributions::uniform::Uniform;
use rand::distributions::Distribution;
use rand::Rng;

/// Smallest number in our varint encoding that takes the given number of bytes
pub fn smallest_number_in_n_byte_varint(byte_length: usize) -> u64 {
    assert!(byte_length >= 1 && byte_length <= 10);

    match byte_length {
        1 => 0,
        // one greater than the largest of the previous length
        _ => largest_number_in_n_byte_varint(byte_length - 1) + 1,
    }
}

/// Largest number in our varint encoding that takes the given number of bytes
pub fn largest_number_in_n_byte_varint(byte_length: usize) -> u64 {
    assert!(byte_length >= 1 && byte_length <= 10);

    match byte_length {
        10 => u64::max_value(),
        // 1 in every payload bit of this many 7-bit groups
        _ => (1_u64 << (7 * byte_length as u32)) - 1,
    }
}

// Evenly distributed random numbers end up biased heavily towards longer encoded byte lengths:
// there are a lot more large numbers than there are small (duh), but for exercising
// serialization code paths, we'd like many at all byte lengths. This is also arguably more
// representative of real data. This should emit values whose varint lengths are uniformly
// distributed across the whole length range (1 to 10).
pub struct RandomVarintEncodedLengthIter<R: Rng> {
    ranges: Vec<Uniform<u64>>,
    range_for_picking_range: Uniform<usize>,
    rng: R,
}

impl<R: Rng> RandomVarintEncodedLengthIter<R> {
    pub fn new(rng: R) -> RandomVarintEncodedLengthIter<R> {
        let ranges = (1..=10_usize)
            .map(|len| {
                Uniform::new_inclusive(
                    smallest_number_in_n_byte_varint(len),
                    largest_number_in_n_byte_varint(len),
                )
            })
            .collect::<Vec<_>>();

        RandomVarintEncodedLengthIter {
            range_for_picking_range: Uniform::new(0, ranges.len()),
            ranges,
            rng,
        }
    }
}

impl<R: Rng> Iterator for RandomVarintEncodedLengthIter<R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        // pick the length bucket we'll draw from
        let value_range = self.ranges[self.range_for_picking_range.sample(&mut self.rng)];

        Some(value_range.sample(&mut self.rng))
    }
}

#[test]
fn number_ranges_are_contiguous_and_cover_u64() {
    assert_eq!(0, smallest_number_in_n_byte_varint(1));

    for len in 2..=10 {
        let previous_largest = largest_number_in_n_byte_varint(len - 1);
        assert_eq!(previous_largest + 1, smallest_number_in_n_byte_varint(len));
        // each extra byte adds 7 payload bits, except the last, which adds the 64th bit
        let expected_bits = if len == 10 { 64 } else { 7 * len as u32 };
        assert_eq!(
            expected_bits,
            64 - largest_number_in_n_byte_varint(len).leading_zeros()
        );
    }
}
