//! Property tests for the cipher laws.
//!
//! These tests verify the algebra the ciphers promise over the whole
//! legal range:
//! - Encrypt/decrypt round-trips for arbitrary in-range text and keys
//! - Caesar key normalization (the key space has period RANGE_SIZE)
//! - Output stays within the legal range for in-range input
//! - The validator accepts exactly the in-range strings

mod proptest_tests {
    use proptest::prelude::*;

    use figleaf::core::cipher::{
        decrypt_bellaso, decrypt_caesar, encrypt_bellaso, encrypt_caesar,
    };
    use figleaf::core::constants::RANGE_SIZE;
    use figleaf::core::validation::is_in_range;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn caesar_roundtrip_any_key(t in "[ -_]{0,200}", k in any::<i32>()) {
            let encrypted = encrypt_caesar(&t, k);
            prop_assert_eq!(decrypt_caesar(&encrypted, k), t);
        }

        #[test]
        fn caesar_output_stays_in_range(t in "[ -_]{0,200}", k in any::<i32>()) {
            prop_assert!(is_in_range(&encrypt_caesar(&t, k)));
            prop_assert!(is_in_range(&decrypt_caesar(&t, k)));
        }

        #[test]
        fn caesar_key_period_is_range_size(t in "[ -_]{0,100}", k in -1_000_000..1_000_000i32) {
            prop_assert_eq!(encrypt_caesar(&t, k), encrypt_caesar(&t, k + RANGE_SIZE));
        }

        #[test]
        fn caesar_identity_key(t in "[ -_]{0,200}") {
            prop_assert_eq!(encrypt_caesar(&t, 0), t.clone());
            prop_assert_eq!(encrypt_caesar(&t, RANGE_SIZE), t);
        }

        #[test]
        fn caesar_preserves_length(t in "[ -_]{0,200}", k in any::<i32>()) {
            prop_assert_eq!(encrypt_caesar(&t, k).len(), t.len());
        }

        #[test]
        fn bellaso_roundtrip(t in "[ -_]{0,200}", key in "[ -_]{1,24}") {
            let encrypted = encrypt_bellaso(&t, &key).unwrap();
            prop_assert_eq!(decrypt_bellaso(&encrypted, &key).unwrap(), t);
        }

        #[test]
        fn bellaso_output_stays_in_range(t in "[ -_]{0,200}", key in "[ -_]{1,24}") {
            prop_assert!(is_in_range(&encrypt_bellaso(&t, &key).unwrap()));
            prop_assert!(is_in_range(&decrypt_bellaso(&t, &key).unwrap()));
        }

        #[test]
        fn validator_accepts_range_strings(t in "[ -_]{0,200}") {
            prop_assert!(is_in_range(&t));
        }

        #[test]
        fn validator_rejects_any_single_violation(
            t in "[ -_]{0,50}",
            bad in prop::char::ranges(vec!['\u{0}'..='\u{1F}', '`'..='\u{10FFFF}'].into()),
            idx in 0usize..=50,
        ) {
            let mut s = t.clone();
            s.insert(idx.min(t.len()), bad);
            prop_assert!(!is_in_range(&s));
        }
    }
}
