//! Property tests over random vectors.
use proptest::prelude::*;

use vex_codecs::{decode, encode, encode_compressed};
use vex_core::{clamp_value, VectorDecoder};

const MAX_PROPTEST_CASES: u32 = 2000;

/// Vectors biased toward zero runs and small values, with some wide values.
fn sparse_vector() -> impl Strategy<Value = Vec<u16>> {
    let chunk = prop_oneof![
        4 => (1usize..20).prop_map(|n| vec![0u16; n]),
        3 => (1u16..=253).prop_map(|v| vec![v]),
        1 => (254u16..=u16::MAX).prop_map(|v| vec![v]),
    ];
    prop::collection::vec(chunk, 0..64).prop_map(|chunks| chunks.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(MAX_PROPTEST_CASES))]

    /// Any in-range vector survives both framings unchanged.
    #[test]
    fn roundtrip_any_vector(values in prop::collection::vec(any::<u16>(), 0..256)) {
        prop_assert_eq!(decode(&encode(&values)).unwrap(), values.clone());
        prop_assert_eq!(decode(&encode_compressed(&values)).unwrap(), values);
    }

    #[test]
    fn roundtrip_sparse_vector(values in sparse_vector()) {
        let plain = encode(&values);
        let compressed = encode_compressed(&values);
        prop_assert_eq!(decode(&plain).unwrap(), values.clone());
        prop_assert_eq!(decode(&compressed).unwrap(), values.clone());
        prop_assert!(compressed.len() <= plain.len());
    }

    /// Out-of-range input decodes to its clamped value.
    #[test]
    fn clamping_matches_clamp_value(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let expected: Vec<u16> = values.iter().map(|&v| clamp_value(v)).collect();
        prop_assert_eq!(decode(&encode(&values)).unwrap(), expected.clone());
        prop_assert_eq!(decode(&encode_compressed(&values)).unwrap(), expected);
    }

    #[test]
    fn decoded_len_matches_decode(values in sparse_vector()) {
        let stream = encode_compressed(&values);
        let decoder = VectorDecoder::open(&stream).unwrap();
        prop_assert_eq!(decoder.decoded_len().unwrap(), values.len());
    }

    /// Arbitrary bytes after a valid header never panic the decoder.
    #[test]
    fn arbitrary_payload_never_panics(
        header in prop::sample::select(vec![0x10u8, 0x1C]),
        payload in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        let mut stream = vec![header];
        stream.extend(payload);
        let _ = decode(&stream);
    }
}
