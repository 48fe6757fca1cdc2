//! Minimal tab-separated writer and reader for export files.
//!
//! Fields are never quoted. Characters that would break the row structure
//! (tabs, carriage returns, newlines) are replaced with a space on write.

use std::borrow::Cow;

/// Replaces field-breaking characters with a single space each.
pub fn sanitize_field(field: &str) -> Cow<'_, str> {
    if field.contains(['\t', '\r', '\n']) {
        Cow::Owned(field.replace(['\t', '\r', '\n'], " "))
    } else {
        Cow::Borrowed(field)
    }
}

/// Serializes a header and rows; every line, including the last, ends in `\n`.
pub fn write_tsv<R, F>(header: &[&str], rows: R) -> String
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = F>,
    F: AsRef<str>,
{
    let mut out = String::new();
    push_line(&mut out, header.iter());

    for row in rows {
        push_line(&mut out, row.into_iter());
    }

    out
}

fn push_line<I, F>(out: &mut String, fields: I)
where
    I: Iterator<Item = F>,
    F: AsRef<str>,
{
    let mut first = true;
    for field in fields {
        if !first {
            out.push('\t');
        }
        out.push_str(&sanitize_field(field.as_ref()));
        first = false;
    }
    out.push('\n');
}

/// Splits TSV text into rows of fields on single tabs.
///
/// Blank lines are skipped; a trailing `\r` on each line is dropped.
pub fn read_tsv(text: &str) -> Vec<Vec<&str>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').collect())
        .collect()
}
