//! Property tests for argument resolution.

use std::path::PathBuf;

use proptest::prelude::*;

use mdpage::{ConvertError, Invocation, resolve};

/// Tokens that are neither flags nor values of a flag.
fn positional() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}\\.(md|html|txt)").unwrap()
}

/// Unknown flags that the resolver ignores.
fn unknown_flag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("--verbose".to_string()),
        Just("-x".to_string()),
        Just("--no-such-flag".to_string()),
    ]
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![3 => positional(), 1 => unknown_flag()]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `-o custom.html` anywhere in the list decides the output.
    #[test]
    fn property_output_flag_wins_in_any_position(
        tokens in proptest::collection::vec(token(), 0..6),
        at in any::<prop::sample::Index>(),
    ) {
        let mut args = tokens;
        let position = at.index(args.len() + 1);
        args.insert(position, "custom.html".to_string());
        args.insert(position, "-o".to_string());

        let resolution = resolve(&args).unwrap();
        let Invocation::Convert(config) = resolution.invocation else {
            panic!("expected a conversion");
        };
        prop_assert_eq!(config.output, PathBuf::from("custom.html"));
        prop_assert!(config.output_flag_set);
    }

    /// PROPERTY: a trailing `-o` is always a missing-value error.
    #[test]
    fn property_trailing_output_flag_fails(
        tokens in proptest::collection::vec(token(), 0..6),
    ) {
        let mut args = tokens;
        args.push("-o".to_string());

        let result = resolve(&args);
        prop_assert!(
            matches!(result, Err(ConvertError::MissingArgumentValue { .. })),
            "unexpected result: {:?}",
            result
        );
    }

    /// PROPERTY: unknown flags never change the resolved paths.
    #[test]
    fn property_unknown_flags_do_not_affect_paths(
        positionals in proptest::collection::vec(positional(), 0..3),
        flags in proptest::collection::vec(unknown_flag(), 1..4),
    ) {
        let mut noisy = flags.clone();
        noisy.extend(positionals.iter().cloned());

        let plain = resolve(&positionals).unwrap().invocation;
        let with_flags = resolve(&noisy).unwrap().invocation;
        prop_assert_eq!(plain, with_flags);
    }
}
