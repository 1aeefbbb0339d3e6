//! String transforms.
//!
//! All functions count `char`s rather than bytes, so multi-byte input
//! never splits inside a code point. Grapheme clusters are not considered.

use regex::Captures;

use crate::pattern;

/// Uppercase the first character of `input`.
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Remove every whitespace character from `input`.
#[must_use]
pub fn remove_whitespace(input: &str) -> String {
    pattern::WHITESPACE.replace_all(input, "").into_owned()
}

/// Remove every decimal digit from `input`.
#[must_use]
pub fn remove_digits(input: &str) -> String {
    pattern::DIGITS.replace_all(input, "").into_owned()
}

/// Remove every ASCII letter from `input`.
#[must_use]
pub fn remove_letters(input: &str) -> String {
    pattern::LETTERS.replace_all(input, "").into_owned()
}

/// Remove every character outside `[A-Za-z0-9]` from `input`.
#[must_use]
pub fn remove_non_alphanumeric(input: &str) -> String {
    pattern::NON_ALPHANUMERIC.replace_all(input, "").into_owned()
}

/// Truncate `input` to at most `max_chars` characters.
#[must_use]
pub fn truncate(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}

/// The leftmost `count` characters of `input`.
#[must_use]
pub fn left(input: &str, count: usize) -> String {
    input.chars().take(count).collect()
}

/// The rightmost `count` characters of `input`.
#[must_use]
pub fn right(input: &str, count: usize) -> String {
    let total = input.chars().count();
    input.chars().skip(total.saturating_sub(count)).collect()
}

/// Pad the left side of `input` with `pad` up to `width` characters.
///
/// Input already at least `width` characters long is returned unchanged.
#[must_use]
pub fn pad_left(input: &str, width: usize, pad: char) -> String {
    let missing = width.saturating_sub(input.chars().count());
    std::iter::repeat_n(pad, missing).chain(input.chars()).collect()
}

/// Pad the right side of `input` with `pad` up to `width` characters.
#[must_use]
pub fn pad_right(input: &str, width: usize, pad: char) -> String {
    let missing = width.saturating_sub(input.chars().count());
    input.chars().chain(std::iter::repeat_n(pad, missing)).collect()
}

/// Reverse the characters of `input`.
#[must_use]
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Count non-overlapping occurrences of `needle` in `input`.
///
/// An empty needle occurs zero times.
#[must_use]
pub fn count_occurrences(input: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    input.matches(needle).count()
}

/// Convert `input` to `snake_case`.
///
/// Whitespace runs become underscores and lower-to-upper boundaries are
/// split, so both `"Foo BarTest"` and `"fooBarTest"` yield
/// `"foo_bar_test"`.
#[must_use]
pub fn to_snake_case(input: &str) -> String {
    let spaced = pattern::WHITESPACE.replace_all(input, "_");
    pattern::LOWER_UPPER_BOUNDARY
        .replace_all(&spaced, "${1}_${2}")
        .to_lowercase()
}

/// Convert `input` to `kebab-case`.
#[must_use]
pub fn to_kebab_case(input: &str) -> String {
    let spaced = pattern::WHITESPACE.replace_all(input, "-");
    pattern::LOWER_UPPER_BOUNDARY
        .replace_all(&spaced, "${1}-${2}")
        .to_lowercase()
}

/// Convert `input` to `camelCase`.
///
/// Dash, underscore, and space separators collapse into an uppercase
/// boundary, then a leading uppercase letter is lowered:
///
/// ```rust
/// use medley::transform::string::to_camel_case;
///
/// assert_eq!(to_camel_case("foo-bar_baz qux"), "fooBarBazQux");
/// assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
/// ```
#[must_use]
pub fn to_camel_case(input: &str) -> String {
    let collapsed = collapse_separators(input);
    pattern::FIRST_UPPER
        .replace(&collapsed, |caps: &Captures<'_>| {
            caps.get(0)
                .map_or_else(String::new, |m| m.as_str().to_lowercase())
        })
        .into_owned()
}

/// Convert `input` to `PascalCase`.
#[must_use]
pub fn to_pascal_case(input: &str) -> String {
    let collapsed = collapse_separators(input);
    pattern::FIRST_LOWER
        .replace(&collapsed, |caps: &Captures<'_>| {
            caps.get(0)
                .map_or_else(String::new, |m| m.as_str().to_uppercase())
        })
        .into_owned()
}

/// Replace each separator run and the character after it with that
/// character uppercased. Trailing separators have no following character
/// and are left alone.
fn collapse_separators(input: &str) -> String {
    pattern::SEPARATOR_AND_CHAR
        .replace_all(input, |caps: &Captures<'_>| {
            caps.get(0)
                .and_then(|m| m.as_str().chars().last())
                .map_or_else(String::new, |ch| ch.to_uppercase().collect())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::{
        capitalize, count_occurrences, left, pad_left, pad_right, remove_digits, remove_letters,
        remove_non_alphanumeric, remove_whitespace, reverse, right, to_camel_case, to_kebab_case,
        to_pascal_case, to_snake_case, truncate,
    };

    #[test]
    fn capitalize_uppercases_only_the_first_letter() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn whitespace_removal_covers_tabs_and_newlines() {
        assert_eq!(remove_whitespace(" a b \t c \n "), "abc");
    }

    #[test]
    fn character_class_stripping() {
        assert_eq!(remove_digits("a1b2c3"), "abc");
        assert_eq!(remove_letters("a1b2c3"), "123");
        assert_eq!(remove_non_alphanumeric("a1!b2@c3"), "a1b2c3");
    }

    #[test]
    fn truncate_leaves_short_input_alone() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ab", 3), "ab");
    }

    #[test]
    fn left_and_right_count_chars() {
        assert_eq!(left("abc", 2), "ab");
        assert_eq!(right("abc", 2), "bc");
        assert_eq!(right("abc", 5), "abc");
    }

    #[test]
    fn padding_counts_chars_not_bytes() {
        assert_eq!(pad_left("1", 3, '0'), "001");
        assert_eq!(pad_right("1", 3, '0'), "100");
        assert_eq!(pad_left("übe", 4, ' '), " übe");
        assert_eq!(pad_left("long", 2, '0'), "long");
    }

    #[test]
    fn reverse_is_char_wise() {
        assert_eq!(reverse("abc"), "cba");
    }

    #[test]
    fn occurrences_do_not_overlap() {
        assert_eq!(count_occurrences("aabbaaa", "aa"), 2);
        assert_eq!(count_occurrences("abcabc", "d"), 0);
        assert_eq!(count_occurrences("abc", ""), 0);
    }

    #[test]
    fn snake_and_kebab_split_boundaries() {
        assert_eq!(to_snake_case("Foo BarTest"), "foo_bar_test");
        assert_eq!(to_kebab_case("Foo BarTest"), "foo-bar-test");
    }

    #[test]
    fn camel_and_pascal_collapse_separators() {
        assert_eq!(to_camel_case("foo-bar_baz qux"), "fooBarBazQux");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_pascal_case("foo-bar_baz qux"), "FooBarBazQux");
        assert_eq!(to_pascal_case("helloWorld"), "HelloWorld");
    }
}
