// crates/placenames-core/src/description.rs
//! # Description Parser
//!
//! DESCRIPTION fields are semi-structured text: some records carry
//! `Label: value` lines (`Feature name:`, `Commemorated name:`, `Biography:`,
//! ...), others are plain prose. [`parse_description`] extracts what it can
//! and never fails; unstructured input simply yields empty fields and the
//! whole text as the biography.

use crate::text::{char_len, clean_value, take_chars, trim_space};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Returned by [`build_named_after_label`] when no subject is known.
/// Callers treat it as "skip the summary lookup".
pub const NOT_SPECIFIED: &str = "Not specified";

/// Preview length for result cards.
pub const DEFAULT_PREVIEW_LEN: usize = 340;

/// Preview length for map popups.
pub const POPUP_PREVIEW_LEN: usize = 220;

pub const ELLIPSIS: &str = "...";

// Labels shorter than this or at least this long are prose, not labels.
const MIN_KEY_LEN: usize = 2;
const MAX_KEY_LEN: usize = 40;

/// The labelled fields surfaced to the presentation layer, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldLabel {
    #[serde(rename = "Feature name")]
    FeatureName,
    #[serde(rename = "Commemorated name")]
    CommemoratedName,
    #[serde(rename = "Given names")]
    GivenNames,
    #[serde(rename = "Title")]
    Title,
    #[serde(rename = "Alias")]
    Alias,
}

impl FieldLabel {
    pub const ALL: [FieldLabel; 5] = [
        FieldLabel::FeatureName,
        FieldLabel::CommemoratedName,
        FieldLabel::GivenNames,
        FieldLabel::Title,
        FieldLabel::Alias,
    ];

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldLabel::FeatureName => "Feature name",
            FieldLabel::CommemoratedName => "Commemorated name",
            FieldLabel::GivenNames => "Given names",
            FieldLabel::Title => "Title",
            FieldLabel::Alias => "Alias",
        }
    }

    /// Lower-cased key as it appears before the colon.
    fn key(self) -> &'static str {
        match self {
            FieldLabel::FeatureName => "feature name",
            FieldLabel::CommemoratedName => "commemorated name",
            FieldLabel::GivenNames => "given names",
            FieldLabel::Title => "title",
            FieldLabel::Alias => "alias",
        }
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelledValue {
    pub label: FieldLabel,
    pub value: String,
}

/// Structured view of one DESCRIPTION.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDescription {
    pub feature_name: String,
    pub commemorated_name: String,
    /// The `Biography:` field, or the whole cleaned text when there is none.
    pub biography: String,
    /// Non-empty, non-"none" labelled fields in [`FieldLabel::ALL`] order.
    pub labelled_values: Vec<LabelledValue>,
}

impl ParsedDescription {
    /// Value of a labelled field, `""` if it was absent, empty or "none".
    pub fn label_value(&self, label: FieldLabel) -> &str {
        self.labelled_values
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value.as_str())
            .unwrap_or("")
    }
}

/// Parse a DESCRIPTION text. Total: any input yields a value.
///
/// # Examples
///
/// ```rust
/// use placenames_core::description::{parse_description, FieldLabel};
///
/// let parsed = parse_description(
///     "Feature name: Mawson Park\nCommemorated Name: Sir Mawson\nBiography: A noted explorer.",
/// );
/// assert_eq!(parsed.feature_name, "Mawson Park");
/// assert_eq!(parsed.commemorated_name, "Sir Mawson");
/// assert_eq!(parsed.biography, "A noted explorer.");
/// assert_eq!(parsed.labelled_values.len(), 2);
/// assert_eq!(parsed.label_value(FieldLabel::Title), "");
/// ```
pub fn parse_description(text: &str) -> ParsedDescription {
    let fields = collect_fields(text);
    let field = |key: &str| fields.get(key).cloned().unwrap_or_default();

    let biography = fields
        .get("biography")
        .cloned()
        .unwrap_or_else(|| clean_value(text));

    let labelled_values = FieldLabel::ALL
        .iter()
        .map(|&label| LabelledValue {
            label,
            value: field(label.key()),
        })
        .filter(|entry| !entry.value.is_empty() && !entry.value.eq_ignore_ascii_case("none"))
        .collect();

    ParsedDescription {
        feature_name: field(FieldLabel::FeatureName.key()),
        commemorated_name: field(FieldLabel::CommemoratedName.key()),
        biography,
        labelled_values,
    }
}

/// `key: value` lines, keys lower-cased. Later lines overwrite earlier ones.
fn collect_fields(text: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    for line in text.lines().map(trim_space).filter(|l| !l.is_empty()) {
        let Some((raw_key, raw_value)) = line.split_once(':') else {
            continue;
        };

        let key = clean_value(raw_key).to_lowercase();
        let value = clean_value(raw_value);

        let key_len = char_len(&key);
        if key_len < MIN_KEY_LEN || key_len >= MAX_KEY_LEN || value.is_empty() {
            continue;
        }
        fields.insert(key, value);
    }

    fields
}

/// Inputs of [`build_named_after_label`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NamedAfter<'a> {
    pub commemorated_name: &'a str,
    pub given_names: &'a str,
    pub title: &'a str,
    pub fallback_name: &'a str,
}

/// `title given_names commemorated_name`, skipping empty pieces.
///
/// Falls back to `fallback_name`, then to [`NOT_SPECIFIED`]; the result is
/// never empty.
///
/// ```rust
/// use placenames_core::description::{build_named_after_label, NamedAfter};
///
/// let label = build_named_after_label(&NamedAfter {
///     title: "Sir",
///     given_names: "Douglas",
///     commemorated_name: "Mawson",
///     fallback_name: "X",
/// });
/// assert_eq!(label, "Sir Douglas Mawson");
/// assert_eq!(build_named_after_label(&NamedAfter::default()), "Not specified");
/// ```
pub fn build_named_after_label(parts: &NamedAfter<'_>) -> String {
    let full_name = [parts.title, parts.given_names, parts.commemorated_name]
        .iter()
        .map(|piece| clean_value(piece))
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if !full_name.is_empty() {
        return full_name;
    }
    let fallback = clean_value(parts.fallback_name);
    if !fallback.is_empty() {
        return fallback;
    }
    NOT_SPECIFIED.to_string()
}

/// Cleaned text cut to `max_len` characters, with [`ELLIPSIS`] when cut.
///
/// The cut is a raw character count, not word-aware; the kept part is
/// trimmed before the ellipsis is appended.
pub fn format_biography_preview(text: &str, max_len: usize) -> String {
    let cleaned = clean_value(text);
    if char_len(&cleaned) <= max_len {
        return cleaned;
    }
    format!("{}{ELLIPSIS}", take_chars(&cleaned, max_len).trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let parsed = parse_description("");
        assert_eq!(parsed, ParsedDescription::default());
    }

    #[test]
    fn crlf_lines_are_split() {
        let parsed = parse_description("Title: Dame\r\nGiven names: Enid\r\n");
        assert_eq!(parsed.label_value(FieldLabel::Title), "Dame");
        assert_eq!(parsed.label_value(FieldLabel::GivenNames), "Enid");
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let parsed = parse_description("\u{feff}Title: Sir\nGiven names: Hubert\nBiography: Aviator.");
        assert_eq!(parsed.label_value(FieldLabel::Title), "Sir");
        assert_eq!(parsed.label_value(FieldLabel::GivenNames), "Hubert");
        assert_eq!(parsed.biography, "Aviator.");

        let prose = parse_description("\u{feff}Named for an early settler.");
        assert_eq!(prose.biography, "Named for an early settler.");
    }

    #[test]
    fn keys_are_whitespace_collapsed_and_lower_cased() {
        let parsed = parse_description("  COMMEMORATED    name :  Lyons  ");
        assert_eq!(parsed.commemorated_name, "Lyons");
    }

    #[test]
    fn short_and_long_keys_are_prose() {
        let long_key = "x".repeat(40);
        let text = format!("A: one\n{long_key}: two\nTime was 10:30 am");
        let parsed = parse_description(&text);
        assert!(parsed.labelled_values.is_empty());
        assert_eq!(parsed.biography, clean_value(&text));
    }

    #[test]
    fn thirty_nine_char_key_is_accepted() {
        let key = "k".repeat(39);
        let fields = collect_fields(&format!("{key}: v"));
        assert_eq!(fields.get(&key).map(String::as_str), Some("v"));
    }

    #[test]
    fn empty_value_is_rejected() {
        let parsed = parse_description("Title:   \nBiography:");
        assert!(parsed.labelled_values.is_empty());
        assert_eq!(parsed.biography, "Title: Biography:");
    }

    #[test]
    fn later_duplicate_wins() {
        let parsed = parse_description("Title: Sir\nTitle: Dame");
        assert_eq!(parsed.label_value(FieldLabel::Title), "Dame");
    }

    #[test]
    fn value_keeps_later_colons() {
        let parsed = parse_description("Biography: Born 1882: died 1958.");
        assert_eq!(parsed.biography, "Born 1882: died 1958.");
    }

    #[test]
    fn none_values_are_filtered_case_insensitively() {
        let parsed = parse_description("Alias: NONE\nTitle: none\nGiven names: Nonesuch");
        assert_eq!(parsed.labelled_values.len(), 1);
        assert_eq!(parsed.labelled_values[0].label, FieldLabel::GivenNames);
    }

    #[test]
    fn labelled_values_follow_fixed_order() {
        let parsed = parse_description("Alias: Al\nTitle: Dr\nFeature name: X Street");
        let labels: Vec<_> = parsed.labelled_values.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![FieldLabel::FeatureName, FieldLabel::Title, FieldLabel::Alias]
        );
    }

    #[test]
    fn label_builder_cleans_pieces() {
        let label = build_named_after_label(&NamedAfter {
            title: "  ",
            given_names: " Walter  Burley ",
            commemorated_name: "Griffin",
            fallback_name: "",
        });
        assert_eq!(label, "Walter Burley Griffin");
    }

    #[test]
    fn preview_cut_is_char_based() {
        let text = "é".repeat(10);
        assert_eq!(format_biography_preview(&text, 4), "éééé...");
        assert_eq!(format_biography_preview(&text, 10), text);
    }

    #[test]
    fn preview_trims_before_ellipsis() {
        assert_eq!(format_biography_preview("abc def", 4), "abc...");
    }
}
