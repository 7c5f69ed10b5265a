//! Name sanitization
//!
//! Names are filtered twice: once on every keystroke, and once more at submit
//! time, where surrounding whitespace is also trimmed.

/// Whitespace as the host browser's regex `\s` class defines it.
///
/// Differs from `char::is_whitespace`: NEL (U+0085) is not whitespace here,
/// the byte order mark (U+FEFF) is.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || is_js_whitespace(c)
}

/// Keystroke-time sanitization.
///
/// Drops every character that is not an ASCII letter or whitespace, then
/// truncates to `max_len` characters. Applying it twice yields the same
/// string as applying it once.
pub fn sanitize_name(raw: &str, max_len: usize) -> String {
    raw.chars().filter(|c| is_name_char(*c)).take(max_len).collect()
}

/// Submit-time sanitization: strip non-letters again and trim.
///
/// An empty result means the name degenerated (e.g. was all whitespace) and
/// the submit must be refused.
pub fn finalize_name(name: &str) -> String {
    let filtered: String = name.chars().filter(|c| is_name_char(*c)).collect();
    filtered.trim_matches(is_js_whitespace).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_digits_and_punctuation() {
        assert_eq!(sanitize_name("J0hn!!", 20), "Jhn");
        assert_eq!(sanitize_name("Mary-Jane O'Neil", 20), "MaryJane ONeil");
    }

    #[test]
    fn keeps_whitespace() {
        assert_eq!(sanitize_name("Anne Marie", 20), "Anne Marie");
        assert_eq!(sanitize_name("  x  ", 20), "  x  ");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(sanitize_name("José", 20), "Jos");
        assert_eq!(sanitize_name("Ørjan", 20), "rjan");
    }

    #[test]
    fn truncates_to_limit() {
        assert_eq!(sanitize_name("Bartholomew", 4), "Bart");
        assert_eq!(sanitize_name("Bartholomew", 0), "");
    }

    #[test]
    fn truncation_counts_characters_after_filtering() {
        assert_eq!(sanitize_name("1a2b3c4d", 3), "abc");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = [
            "",
            "J0hn!!",
            "   ",
            "Ünïcödé names",
            "tab\tseparated\nlines",
            "A very long name that exceeds the configured limit",
            "12345",
        ];
        for limit in [0, 1, 5, 20] {
            for s in samples {
                let once = sanitize_name(s, limit);
                assert_eq!(sanitize_name(&once, limit), once, "input {s:?} limit {limit}");
            }
        }
    }

    #[test]
    fn valid_input_is_unchanged() {
        for s in ["John", "Doe", "Anne Marie", "  padded  ", "abcdefghijklmnopqrst"] {
            assert_eq!(sanitize_name(s, 20), s);
        }
    }

    #[test]
    fn finalize_trims_and_filters() {
        assert_eq!(finalize_name("  John  "), "John");
        assert_eq!(finalize_name("J0hn"), "Jhn");
        assert_eq!(finalize_name(" \t "), "");
        assert_eq!(finalize_name("!!"), "");
    }

    #[test]
    fn next_line_is_stripped_like_other_controls() {
        assert_eq!(sanitize_name("A\u{0085}B", 20), "AB");
        assert_eq!(finalize_name("A\u{0085}B"), "AB");
        assert_eq!(finalize_name("\u{0085}John\u{0085}"), "John");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(sanitize_name("A\u{FEFF}B", 20), "A\u{FEFF}B");
        assert_eq!(finalize_name("\u{FEFF}John\u{FEFF}"), "John");
        assert_eq!(finalize_name("\u{FEFF}"), "");
    }

    #[test]
    fn browser_whitespace_set() {
        for c in ['\t', '\u{000B}', '\u{00A0}', '\u{2005}', '\u{3000}', '\u{FEFF}'] {
            assert!(is_js_whitespace(c), "{c:?}");
        }
        for c in ['\u{0085}', '\u{200B}', 'a', '0'] {
            assert!(!is_js_whitespace(c), "{c:?}");
        }
    }

    #[test]
    fn finalize_keeps_inner_whitespace() {
        assert_eq!(finalize_name(" Anne  Marie "), "Anne  Marie");
    }
}
