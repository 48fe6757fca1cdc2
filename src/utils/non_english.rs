//! Removal of non-English label prefixes from spreadsheet names.
//!
//! Upstream exports prefix the English name with a translated label, e.g.
//! `日本語 Hello World`. Only the trailing ASCII part is kept.

/// Drops everything up to and including the last non-ASCII character.
///
/// Input without non-ASCII characters is returned unchanged, untrimmed. A
/// string made only of non-ASCII characters becomes empty, which callers treat
/// as "no usable name".
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_non_english("日本語 Hello World"), "Hello World");
/// assert_eq!(clean_non_english(" Plain ASCII "), " Plain ASCII ");
/// ```
pub fn clean_non_english(text: &str) -> String {
    let Some((index, last)) = text.char_indices().rev().find(|(_, c)| !c.is_ascii()) else {
        return text.to_string();
    };

    let tail = text[index + last.len_utf8()..].trim();
    let ascii: String = tail
        .chars()
        .map(|c| if c.is_ascii() { c } else { ' ' })
        .collect();

    ascii.trim().to_string()
}
