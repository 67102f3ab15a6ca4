#![forbid(unsafe_code)]

//! HTML entity escaping for text that ends up inside markup.
//!
//! Only the three characters that can open a tag or an entity are touched:
//!
//! | Input | Output  |
//! |-------|---------|
//! | `&`   | `&amp;` |
//! | `<`   | `&lt;`  |
//! | `>`   | `&gt;`  |
//!
//! Quotes are left alone, so the output is safe for element content but not
//! for attribute values.
//!
//! # Performance
//!
//! - **Fast path**: a single `memchr3` scan. If none of the three bytes occur,
//!   the input is returned borrowed with zero allocation.
//! - **Slow path**: copy the runs between matches into one pre-sized buffer.
//!   Linear in input size, one allocation.
//!
//! # Usage
//!
//! ```
//! use lsu_text::escape::escape_html;
//! use std::borrow::Cow;
//!
//! let plain = escape_html("plain text");
//! assert!(matches!(plain, Cow::Borrowed(_)));
//!
//! let markup = escape_html("<a>&b</a>");
//! assert_eq!(markup, "&lt;a&gt;&amp;b&lt;/a&gt;");
//! ```

use std::borrow::Cow;

use memchr::{memchr3, memchr3_iter};

/// Escape `&`, `<` and `>` as HTML entities.
///
/// Already escaped input is escaped again (`&amp;` becomes `&amp;amp;`); the
/// function has no notion of pre-existing entities.
#[inline]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if memchr3(b'&', b'<', b'>', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }

    Cow::Owned(escape_slow(input))
}

fn escape_slow(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut output = String::with_capacity(input.len() + input.len() / 4);
    let mut last = 0;

    // All three needles are ASCII, so every match index is a char boundary.
    for pos in memchr3_iter(b'&', b'<', b'>', bytes) {
        output.push_str(&input[last..pos]);
        output.push_str(entity(bytes[pos]));
        last = pos + 1;
    }
    output.push_str(&input[last..]);

    output
}

#[inline]
const fn entity(b: u8) -> &'static str {
    match b {
        b'&' => "&amp;",
        b'<' => "&lt;",
        _ => "&gt;",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_plain_text() {
        let input = "Nothing to see here";
        let result = escape_html(input);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, input);
    }

    #[test]
    fn fast_path_unicode() {
        let input = "Gr\u{fc}\u{df}e \u{4e16}\u{754c} \u{1f600}";
        let result = escape_html(input);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, input);
    }

    #[test]
    fn fast_path_empty() {
        assert!(matches!(escape_html(""), Cow::Borrowed("")));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<a>&b</a>"), "&lt;a&gt;&amp;b&lt;/a&gt;");
    }

    #[test]
    fn escapes_single_tag() {
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn ampersand_not_confused_with_new_entities() {
        // `<` turns into `&lt;`; that ampersand must not be escaped again.
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html("&<"), "&amp;&lt;");
    }

    #[test]
    fn existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn quotes_untouched() {
        assert_eq!(escape_html("\"it's\" <q>"), "\"it's\" &lt;q&gt;");
    }

    #[test]
    fn unicode_around_matches() {
        assert_eq!(
            escape_html("\u{e9}<\u{1f600}>\u{4e16}"),
            "\u{e9}&lt;\u{1f600}&gt;\u{4e16}"
        );
    }

    #[test]
    fn match_at_both_ends() {
        assert_eq!(escape_html(">mid&"), "&gt;mid&amp;");
    }

    mod proptest_escape {
        use super::*;
        use proptest::prelude::*;

        /// Reference implementation: sequential replacement, `&` first.
        fn replace_chain(input: &str) -> String {
            input
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
        }

        proptest! {
            #[test]
            fn matches_replace_chain(input in ".*") {
                let escaped = escape_html(&input);
                let expected = replace_chain(&input);
                prop_assert_eq!(escaped.as_ref(), expected.as_str());
            }

            #[test]
            fn output_has_no_angle_brackets(input in "[<>&a-z ]*") {
                let result = escape_html(&input);
                prop_assert!(!result.contains('<'));
                prop_assert!(!result.contains('>'));
            }

            #[test]
            fn borrowed_iff_nothing_to_escape(input in ".*") {
                let needs_escape = input.contains(['&', '<', '>']);
                let result = escape_html(&input);
                prop_assert_eq!(matches!(result, Cow::Owned(_)), needs_escape);
            }
        }
    }
}
