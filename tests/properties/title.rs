//! Property tests for title extraction.

use proptest::prelude::*;

use mdpage::{DEFAULT_TITLE, extract_title};

/// Lines that can never match the heading pattern.
fn body_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("([A-Za-z0-9*_ ][A-Za-z0-9 *_#.,]{0,40})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the first `# Title` line yields its trimmed text.
    #[test]
    fn property_first_heading_is_title(
        before in proptest::collection::vec(body_line(), 0..6),
        title in "[A-Za-z0-9][A-Za-z0-9 ]{0,30}",
        padding in "[ \t]{0,3}",
        after in proptest::collection::vec(body_line(), 0..6),
    ) {
        let mut lines = before;
        lines.push(format!("#{padding}{title}{padding}"));
        lines.extend(after);
        let markdown = lines.join("\n");

        prop_assert_eq!(extract_title(&markdown), title.trim());
    }

    /// PROPERTY: documents without a heading line get the fallback title.
    #[test]
    fn property_no_heading_uses_fallback(
        lines in proptest::collection::vec(body_line(), 0..12),
    ) {
        prop_assert_eq!(extract_title(&lines.join("\n")), DEFAULT_TITLE);
    }

    /// PROPERTY: extraction never panics on arbitrary input.
    #[test]
    fn property_extract_title_never_panics(markdown in "(?s).{0,256}") {
        let _ = extract_title(&markdown);
    }
}
