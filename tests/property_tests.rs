//! Property-based tests over generated radixes, fractions, tokens and dialects.
//!
//! These complement the scenario tests in `integration_tests.rs` by checking
//! the invariants every fixture relies on across a wide range of inputs.

use num_bigint::BigUint;
use numeric_fixtures::decimal::{fraction_digits, Fraction, MAX_FRACTION_DIGITS};
use numeric_fixtures::generator::{case_permutations, separator_permutations};
use numeric_fixtures::radix::to_digits;
use numeric_fixtures::{Dialect, Fixture, Metadata, NumericKind, SignPolicy, Value, Variants};
use proptest::prelude::*;

fn sign_policy() -> impl Strategy<Value = SignPolicy> {
    prop_oneof![
        Just(SignPolicy::None),
        Just(SignPolicy::Optional),
        Just(SignPolicy::NoPositive),
        Just(SignPolicy::Required),
    ]
}

prop_compose! {
    fn dialect()(
        radix in 2u32..=10,
        exponent_base in proptest::option::of(2u32..=10),
        separator in proptest::option::of(prop_oneof![Just('_'), Just('\'')]),
        prefix in proptest::option::of(prop_oneof![Just('x'), Just('b'), Just('o')]),
        suffix in proptest::option::of(prop_oneof![Just('h'), Just('#')]),
        mantissa_sign in sign_policy(),
        exponent_sign in sign_policy(),
        no_exponent in any::<bool>(),
    ) -> Dialect {
        Dialect::builder()
            .with_mantissa_radix(radix)
            .with_exponent_base(exponent_base)
            .with_digit_separator(separator)
            .with_base_prefix(prefix)
            .with_base_suffix(suffix)
            .with_mantissa_sign(mantissa_sign)
            .with_exponent_sign(exponent_sign)
            .with_no_exponent(no_exponent)
            .build()
            .unwrap()
    }
}

proptest! {
    #[test]
    fn prop_digits_parse_back(value in any::<i64>(), radix in 2u32..=36) {
        let text = to_digits(value, radix).unwrap();
        prop_assert_eq!(i64::from_str_radix(&text, radix).unwrap(), value);
    }

    #[test]
    fn prop_fraction_digits_are_minimal_or_capped(
        (numer, denom) in (1u64..10_000).prop_flat_map(|denom| (0..denom, Just(denom))),
        radix in 2u32..=16,
    ) {
        let fraction = Fraction::new(numer, denom).unwrap();
        let digits = fraction_digits(&fraction, radix);
        prop_assert!((1..=MAX_FRACTION_DIGITS).contains(&digits));

        if numer > 0 && digits < MAX_FRACTION_DIGITS {
            let scaled = BigUint::from(numer) * BigUint::from(radix).pow(digits);
            prop_assert_eq!(scaled % BigUint::from(denom), BigUint::from(0u32));
        }
    }

    #[test]
    fn prop_case_permutations_flip_one_letter(token in "[A-Za-z0-9_]{0,12}") {
        let variants = case_permutations(&token).unwrap();
        let letters = token.chars().filter(char::is_ascii_alphabetic).count();
        prop_assert_eq!(variants.len(), letters);

        for variant in &variants {
            prop_assert_eq!(variant.to_ascii_lowercase(), token.to_ascii_lowercase());
            let changed = variant.chars().zip(token.chars()).filter(|(a, b)| a != b).count();
            prop_assert_eq!(changed, 1);
        }
    }

    #[test]
    fn prop_separator_permutations_are_internal(token in "[A-Za-z0-9]{1,12}", count in 1usize..4) {
        let variants = separator_permutations(&token, '_', count);
        prop_assert_eq!(variants.len(), token.len() - 1);

        let run = "_".repeat(count);
        for variant in &variants {
            prop_assert!(!variant.starts_with('_'));
            prop_assert!(!variant.ends_with('_'));
            prop_assert!(variant.contains(&run));
            prop_assert_eq!(variant.replace('_', ""), token.clone());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_every_dialect_generates_consistent_cases(dialect in dialect()) {
        let fixture = Fixture::generate(&dialect, Metadata::new("Generated", "any")).unwrap();
        prop_assert!(!fixture.is_empty());

        for kind in NumericKind::ALL {
            for case in fixture.cases(kind) {
                prop_assert_eq!(case.actual().len(), case.expected().len());
                if let Variants::Many(values) = case.expected() {
                    prop_assert!(values.windows(2).all(|pair| pair[0] == pair[1]));
                }
                // expectations never carry digit separators
                if let Some(separator) = dialect.digit_separator() {
                    prop_assert!(case.expected().iter().all(|value| !value.contains(separator)));
                }
            }
        }
    }

    #[test]
    fn prop_metadata_collapses_radix_exactly_when_uniform(dialect in dialect()) {
        let table = Metadata::new("Generated", "any").table(&dialect).unwrap();
        let radix = Value::from(dialect.mantissa_radix());

        if dialect.has_uniform_radix() {
            prop_assert_eq!(table.get("radix"), Some(&radix));
            prop_assert!(!table.contains_key("mantissa-radix"));
            prop_assert!(!table.contains_key("exponent-base"));
            prop_assert!(!table.contains_key("exponent-radix"));
        } else {
            prop_assert!(!table.contains_key("radix"));
            prop_assert_eq!(table.get("mantissa-radix"), Some(&radix));
            prop_assert_eq!(
                table.get("exponent-base"),
                Some(&Value::from(dialect.exponent_base()))
            );
        }
    }

    #[test]
    fn prop_persisted_text_has_no_escapes(dialect in dialect()) {
        let fixture = Fixture::generate(&dialect, Metadata::new("Generated", "any")).unwrap();
        let text = fixture.to_string().unwrap();
        prop_assert!(!text.contains('\x1b'));
        prop_assert_eq!(text.matches("  # TEST ").count(), fixture.len());
    }
}
