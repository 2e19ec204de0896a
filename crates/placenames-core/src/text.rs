// crates/placenames-core/src/text.rs
//! Text helpers shared by the parser and the ranker.
//!
//! Two different normalizations live here and they are not interchangeable:
//! [`clean_value`] collapses internal whitespace (the parser needs that for
//! labels), while [`normalize_text`] only trims and lower-cases (the ranker's
//! matching primitive). Lengths are counted in `char`s throughout.

use std::cmp::Ordering;

/// Whitespace as far as field text is concerned: Unicode white space plus
/// the byte-order mark, which exported descriptions sometimes start with.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// [`str::trim`] that also strips a byte-order mark.
#[inline]
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Collapse every whitespace run to a single space and trim.
///
/// ```rust
/// use placenames_core::text::clean_value;
///
/// assert_eq!(clean_value("  Sir \t Douglas\n Mawson "), "Sir Douglas Mawson");
/// ```
pub fn clean_value(s: &str) -> String {
    s.split(is_space)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim and lower-case. Internal whitespace is left alone.
///
/// ```rust
/// use placenames_core::text::normalize_text;
///
/// assert_eq!(normalize_text("  Cook  Street "), "cook  street");
/// ```
pub fn normalize_text(s: &str) -> String {
    trim_space(s).to_lowercase()
}

/// [`normalize_text`] for an optional attribute; absent becomes `""`.
#[inline]
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize_text).unwrap_or_default()
}

/// Transliterate to ASCII and lower-case (e.g. `Ngunnawal Pl` stays, `Émile` -> `emile`).
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Number of characters (not bytes).
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `n` characters of `s`, never splitting a character.
pub fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Locale-like string ordering for display names.
///
/// Compares in three levels, the way a collator does: base letters
/// (accent- and case-folded), then accents, then case with lower case first.
/// Strings only compare `Equal` when they are identical.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_key(a)
        .cmp(&fold_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}
