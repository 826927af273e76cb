//! Digit-aware ("natural") ordering keys for names.
//!
//! Plain string comparison puts `"q10"` before `"q2"`. The key built here
//! zero-pads every run of digits to at least [`MIN_DIGIT_WIDTH`] characters so
//! that ordinary lexicographic comparison of keys orders embedded numbers by
//! value. The original length of each digit run is appended after a
//! [`RUN_LENGTH_SEPARATOR`], which keeps `"a0"` ahead of `"a00"` even though
//! both pad to the same digits.
//!
//! Keys are not meant to be human readable.

use std::cmp::Ordering;
use std::fmt::Write;

/// Minimum width digit runs are left-padded to with `'0'`.
pub const MIN_DIGIT_WIDTH: usize = 8;

/// Separator between a padded digit run and its original length.
pub const RUN_LENGTH_SEPARATOR: char = ':';

/// Build the natural-order key of `text`.
///
/// ```
/// use qdiag::natural_order_key;
///
/// assert_eq!(natural_order_key("q12"), "q00000012:2");
/// assert!(natural_order_key("a2") < natural_order_key("a10"));
/// assert!(natural_order_key("a0") < natural_order_key("a00"));
/// ```
pub fn natural_order_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len() + MIN_DIGIT_WIDTH + 2);
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        let on_digits = is_digit(first);
        let end = rest
            .find(|c: char| is_digit(c) != on_digits)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        if on_digits {
            push_digit_run(&mut key, run);
        } else {
            key.push_str(run);
        }
        rest = tail;
    }

    key
}

/// Compare two names in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_order_key(a).cmp(&natural_order_key(b))
}

#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn push_digit_run(key: &mut String, run: &str) {
    // Runs are ASCII, so byte length is the character count.
    let len = run.len();
    for _ in len..MIN_DIGIT_WIDTH {
        key.push('0');
    }
    key.push_str(run);
    key.push(RUN_LENGTH_SEPARATOR);
    // Writing into a String cannot fail.
    let _ = write!(key, "{len}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_digit_text_passes_through() {
        assert_eq!(natural_order_key(""), "");
        assert_eq!(natural_order_key("abc"), "abc");
        assert_eq!(natural_order_key("q_a-b"), "q_a-b");
    }

    #[test]
    fn test_digit_runs_are_padded() {
        assert_eq!(natural_order_key("7"), "00000007:1");
        assert_eq!(natural_order_key("a10b3"), "a00000010:2b00000003:1");
        assert_eq!(natural_order_key("00"), "00000000:2");
    }

    #[test]
    fn test_long_digit_runs_are_not_truncated() {
        assert_eq!(natural_order_key("x123456789"), "x123456789:9");
    }

    #[test]
    fn test_natural_ordering() {
        assert_eq!(natural_cmp("a2", "a10"), Ordering::Less);
        assert_eq!(natural_cmp("a9", "a10"), Ordering::Less);
        assert_eq!(natural_cmp("a0", "a00"), Ordering::Less);
        assert_eq!(natural_cmp("a10", "a10"), Ordering::Equal);
        assert_eq!(natural_cmp("b1", "a2"), Ordering::Greater);
    }

    #[test]
    fn test_sorting_names() {
        let mut names = vec!["q10", "q2", "q1", "a", "q02", "q"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["a", "q", "q1", "q2", "q02", "q10"]);
    }

    #[test]
    fn test_unicode_text_is_preserved() {
        assert_eq!(natural_order_key("α1β"), "α00000001:1β");
    }
}
