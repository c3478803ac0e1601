use hearth_slug::{LEGACY_THRESHOLD, OBFUSCATION_KEY, SlugCodec, decode_str, encode};
use proptest::prelude::*;

/// Ids whose encoding the decoder would read as a legacy format instead.
fn is_ambiguous(id: u64) -> bool {
    let slug = encode(id as i64);
    (id ^ OBFUSCATION_KEY) < LEGACY_THRESHOLD || slug.bytes().all(|b| b.is_ascii_digit())
}

proptest! {
    #[test]
    fn database_ids_round_trip(id in 1i64..1_500_000_000) {
        prop_assume!(!is_ambiguous(id as u64));
        prop_assert_eq!(decode_str(&encode(id)), Some(id as u64));
    }

    #[test]
    fn wide_ids_round_trip(id in (1u64 << 32)..(i64::MAX as u64)) {
        prop_assume!(!is_ambiguous(id));
        prop_assert_eq!(decode_str(&encode(id as i64)), Some(id));
    }

    #[test]
    fn encoded_slugs_are_lowercase_base36(id in 0i64..i64::MAX) {
        let slug = encode(id);
        prop_assert!(!slug.is_empty());
        prop_assert!(slug.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn decoding_is_case_and_whitespace_insensitive(id in 1i64..1_500_000_000) {
        prop_assume!(!is_ambiguous(id as u64));
        let slug = format!("  {}\t", encode(id).to_uppercase());
        prop_assert_eq!(decode_str(&slug), Some(id as u64));
    }

    #[test]
    fn decode_never_panics(input in "\\PC{0,24}") {
        let _ = decode_str(&input);
    }

    #[test]
    fn legacy_base36_ids_pass_through(id in 1u64..LEGACY_THRESHOLD) {
        let legacy = format_base36(id);
        prop_assume!(!legacy.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(decode_str(&legacy), Some(id));
    }

    #[test]
    fn other_keys_round_trip(key in 1_000_000u64..(1u64 << 31), id in 1i64..1_000_000) {
        let codec = SlugCodec::new(key);
        let slug = codec.encode(id);
        let obfuscated = (id as u64) ^ key;
        prop_assume!(obfuscated >= LEGACY_THRESHOLD && !slug.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(codec.decode_str(&slug), Some(id as u64));
    }
}

#[test]
fn worked_examples() {
    assert_eq!(decode_str("29"), Some(29));
    assert_eq!(decode_str("t"), Some(29));
    assert_eq!(decode_str(&encode(29)), Some(29));
}

#[test]
fn boundary_id_is_a_known_mismatch() {
    // obfuscated form sits just under the legacy threshold
    let id = OBFUSCATION_KEY ^ (LEGACY_THRESHOLD - 1);
    assert!(is_ambiguous(id));
    assert_eq!(decode_str(&encode(id as i64)), Some(LEGACY_THRESHOLD - 1));
}

fn format_base36(mut value: u64) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(std::char::from_digit((value % 36) as u32, 36).unwrap());
        value /= 36;
        if value == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}
