use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use rand::distributions::uniform::{SampleUniform, Uniform};
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use zerorun::{Counter, Version};

#[test]
fn container_selects_codec_by_cookie() {
    // an outer container stores the encoding cookie ahead of the payload; reading it back
    // selects the decoder variant
    let counts: Vec<u64> = vec![0, 3, 0, 0, 0, 0, 9, 1];
    let version = Version::V3;
    let codec = version.codec();

    let mut container = Vec::new();
    container.write_u32::<BigEndian>(version.cookie()).unwrap();

    let mut payload = vec![0; codec.max_encoded_size(counts.len()).unwrap()];
    let payload_len = codec.encode(|i| counts[i], counts.len(), &mut payload).unwrap();
    container.extend_from_slice(&payload[..payload_len]);

    let mut reader = container.as_slice();
    let cookie = reader.read_u32::<BigEndian>().unwrap();
    let decoder = Version::from_cookie(cookie).expect("supported format").codec();

    let mut restored = vec![0_u64; counts.len()];
    let filled = decoder
        .decode(&mut reader, payload_len, restored.len(), |i, count: u64| {
            restored[i] = count
        })
        .unwrap();

    assert_eq!(counts.len(), filled);
    assert_eq!(counts, restored);
}

#[test]
fn roundtrip_all_zeros() {
    let codec = Version::V2.codec();
    let mut buf = vec![0; codec.max_encoded_size(1000).unwrap()];
    let len = codec.encode(|_| 0_u64, 1000, &mut buf).unwrap();

    let mut restored = vec![0_u64; 1000];
    let filled = codec
        .decode(&mut &buf[..len], len, 1000, |i, count: u64| restored[i] = count)
        .unwrap();

    assert_eq!(1000, filled);
    assert!(restored.iter().all(|&c| c == 0));
}

#[test]
fn roundtrip_no_zeros() {
    let counts: Vec<u64> = (1..=512).collect();
    let codec = Version::V2.codec();
    let mut buf = vec![0; codec.max_encoded_size(counts.len()).unwrap()];
    let len = codec.encode(|i| counts[i], counts.len(), &mut buf).unwrap();

    let mut restored = vec![0_u64; counts.len()];
    let filled = codec
        .decode(&mut &buf[..len], len, counts.len(), |i, count: u64| {
            restored[i] = count
        })
        .unwrap();

    assert_eq!(counts.len(), filled);
    assert_eq!(counts, restored);
}

#[test]
fn roundtrip_random_u64_v2() {
    do_roundtrip_random::<u64>(Version::V2, Version::V2.max_count());
}

#[test]
fn roundtrip_random_u64_v3() {
    do_roundtrip_random::<u64>(Version::V3, Version::V3.max_count());
}

#[test]
fn roundtrip_random_u32() {
    do_roundtrip_random::<u32>(Version::V2, u32::max_value());
}

#[test]
fn roundtrip_random_u16() {
    do_roundtrip_random::<u16>(Version::V2, u16::max_value());
}

#[test]
fn roundtrip_random_u8() {
    do_roundtrip_random::<u8>(Version::V2, u8::max_value());
}

fn do_roundtrip_random<T>(version: Version, max_count: T)
where
    T: Counter + Debug + SampleUniform,
{
    let codec = version.codec();
    let mut rng = rand::rngs::SmallRng::from_entropy();
    let range = Uniform::new_inclusive(T::zero(), max_count);

    for _ in 0..50 {
        let len = rng.gen_range(1..1_000);
        let counts: Vec<T> = (0..len)
            .map(|_| {
                // mostly-sparse arrays, the shape this encoding is for
                if rng.gen_bool(0.2) {
                    range.sample(&mut rng)
                } else {
                    T::zero()
                }
            })
            .collect();

        let mut buf = vec![0; codec.max_encoded_size(len).unwrap()];
        let bytes_written = codec.encode(|i| counts[i], len, &mut buf).unwrap();

        let mut restored = vec![T::zero(); len];
        let filled = codec
            .decode(
                &mut &buf[..bytes_written],
                bytes_written,
                len,
                |i, count: T| restored[i] = count,
            )
            .unwrap();

        assert_eq!(len, filled);
        assert_eq!(counts, restored);

        let total = counts
            .iter()
            .fold(0_u64, |acc, c| acc.saturating_add(c.as_u64()));
        let restored_total = restored
            .iter()
            .fold(0_u64, |acc, c| acc.saturating_add(c.as_u64()));
        assert_eq!(total, restored_total);
    }
}
