//! Brand keyword substitution for artwork names.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Brand terms and their generic replacements. Keys are lowercase.
pub const KEYWORD_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("iphone", "phone"),
    ("ipad", "tablet"),
    ("airpods", "earbuds"),
];

/// Matches any brand term as a whole word, ignoring case.
static KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = KEYWORD_SUBSTITUTIONS
        .iter()
        .map(|(from, _)| regex::escape(from))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
});

/// Replaces brand keywords with generic terms.
///
/// Matching is case-insensitive and bounded by word characters, so `iPhone`
/// is replaced but `iphone7` is not. Replacements are always lowercase.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(apply_keyword_substitutions("Buy iPhone case"), "Buy phone case");
/// assert_eq!(apply_keyword_substitutions("iphone7 case"), "iphone7 case");
/// ```
pub fn apply_keyword_substitutions(text: &str) -> String {
    KEYWORD_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let matched = caps[0].to_ascii_lowercase();
            KEYWORD_SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == matched)
                .map(|(_, to)| (*to).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_iphone_case_insensitive() {
        assert_eq!(apply_keyword_substitutions("Buy iPhone case"), "Buy phone case");
        assert_eq!(apply_keyword_substitutions("IPHONE"), "phone");
    }

    #[test]
    fn test_replaces_all_keywords() {
        assert_eq!(
            apply_keyword_substitutions("iPad sleeve and AirPods cover"),
            "tablet sleeve and earbuds cover"
        );
    }

    #[test]
    fn test_no_partial_word_match() {
        assert_eq!(apply_keyword_substitutions("iphone7 case"), "iphone7 case");
        assert_eq!(apply_keyword_substitutions("myipad"), "myipad");
        assert_eq!(apply_keyword_substitutions("airpods_pro"), "airpods_pro");
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert_eq!(apply_keyword_substitutions("iPhone-15 case"), "phone-15 case");
        assert_eq!(apply_keyword_substitutions("(ipad)"), "(tablet)");
    }

    #[test]
    fn test_multiple_occurrences() {
        assert_eq!(
            apply_keyword_substitutions("iphone iphone iPhone"),
            "phone phone phone"
        );
    }

    #[test]
    fn test_untouched_text() {
        assert_eq!(apply_keyword_substitutions("Sunset Poster"), "Sunset Poster");
        assert_eq!(apply_keyword_substitutions(""), "");
    }
}
