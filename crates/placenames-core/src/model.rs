// crates/placenames-core/src/model.rs
//! The Feature Record: one place-name entry as delivered by the layer.
//!
//! The serde shape mirrors the service (`{"attributes": {...}, "geometry": {...}}`
//! with upper-case attribute names), so a captured response deserializes
//! directly and a ranked list serializes back into the same shape.
//!
//! Attributes are loosely typed upstream. Every string attribute accepts a
//! string, a number or `null`; anything else degrades to "absent".

use crate::description::{
    build_named_after_label, parse_description, FieldLabel, NamedAfter, ParsedDescription,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Display text for a feature without a category.
pub const UNCATEGORISED: &str = "Uncategorised";
/// Display text for a feature without a division.
pub const UNASSIGNED: &str = "Unassigned";

/// One feature of the layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

/// Attribute table row. Field names follow the layer schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "OBJECTID", default, deserialize_with = "de_object_id")]
    pub object_id: i64,
    #[serde(rename = "NAME", default, deserialize_with = "de_opt_string")]
    pub name: Option<String>,
    #[serde(rename = "CATEGORY_NAME", default, deserialize_with = "de_opt_string")]
    pub category_name: Option<String>,
    #[serde(rename = "OTHER_NAME", default, deserialize_with = "de_opt_string")]
    pub other_name: Option<String>,
    #[serde(rename = "DIVISION_CODE", default, deserialize_with = "de_opt_string")]
    pub division_code: Option<String>,
    #[serde(rename = "DESCRIPTION", default, deserialize_with = "de_opt_string")]
    pub description: Option<String>,
    #[serde(
        rename = "GAZETTAL_INFORMATION",
        default,
        deserialize_with = "de_opt_string"
    )]
    pub gazettal_information: Option<String>,
}

/// Point geometry in WGS84: `x` is longitude, `y` is latitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl Geometry {
    /// `(lat, lng)` when both coordinates are present, finite and in range.
    pub fn point(&self) -> Option<(f64, f64)> {
        let (lng, lat) = (self.x?, self.y?);
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some((lat, lng))
    }
}

/// An open value set (category, division) with an explicit unknown bucket.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Facet {
    Named(String),
    Unspecified,
}

impl Facet {
    /// Trimmed non-empty text becomes `Named`, everything else `Unspecified`.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Facet::Named(v.to_string()),
            _ => Facet::Unspecified,
        }
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            Facet::Named(v) => Some(v),
            Facet::Unspecified => None,
        }
    }
}

impl From<&str> for Facet {
    fn from(value: &str) -> Self {
        Facet::from_attr(Some(value))
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::Named(v) => f.write_str(v),
            Facet::Unspecified => f.write_str("(unspecified)"),
        }
    }
}

impl Feature {
    pub fn object_id(&self) -> i64 {
        self.attributes.object_id
    }

    /// NAME, or `""` when absent.
    pub fn name(&self) -> &str {
        self.attributes.name.as_deref().unwrap_or("")
    }

    /// NAME for headings; `"Unknown"` when absent or empty.
    pub fn display_name(&self) -> &str {
        match self.name() {
            "" => "Unknown",
            n => n,
        }
    }

    pub fn other_name(&self) -> Option<&str> {
        self.attributes.other_name.as_deref()
    }

    pub fn description(&self) -> &str {
        self.attributes.description.as_deref().unwrap_or("")
    }

    pub fn gazettal_information(&self) -> Option<&str> {
        self.attributes.gazettal_information.as_deref()
    }

    pub fn category(&self) -> Facet {
        Facet::from_attr(self.attributes.category_name.as_deref())
    }

    /// Category for display, `"Uncategorised"` when absent.
    pub fn category_label(&self) -> &str {
        match self.attributes.category_name.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORISED,
        }
    }

    pub fn division(&self) -> Facet {
        Facet::from_attr(self.attributes.division_code.as_deref())
    }

    /// `(lat, lng)` if the feature has a usable point.
    pub fn point(&self) -> Option<(f64, f64)> {
        self.geometry.as_ref().and_then(Geometry::point)
    }

    /// A map link for the feature's point.
    pub fn map_url(&self) -> Option<String> {
        self.point()
            .map(|(lat, lng)| format!("https://www.google.com/maps?q={lat},{lng}"))
    }

    /// Parse DESCRIPTION. Recomputed on every call.
    pub fn parsed_description(&self) -> ParsedDescription {
        parse_description(self.description())
    }

    /// Inputs for the "named after" label, taken from an already parsed description.
    pub fn named_after_parts<'a>(&'a self, parsed: &'a ParsedDescription) -> NamedAfter<'a> {
        NamedAfter {
            commemorated_name: &parsed.commemorated_name,
            given_names: parsed.label_value(FieldLabel::GivenNames),
            title: parsed.label_value(FieldLabel::Title),
            fallback_name: self.fallback_name(),
        }
    }

    /// Best human-readable subject this place is named after.
    ///
    /// Never empty; [`crate::description::NOT_SPECIFIED`] when nothing is known.
    pub fn named_after(&self) -> String {
        let parsed = self.parsed_description();
        build_named_after_label(&self.named_after_parts(&parsed))
    }

    /// `(primary, fallback)` terms for a summary lookup.
    ///
    /// The fallback is the bare commemorated name, then OTHER_NAME.
    pub fn summary_terms(&self) -> (String, String) {
        let parsed = self.parsed_description();
        let primary = build_named_after_label(&self.named_after_parts(&parsed));
        let fallback = first_non_empty(&[
            Some(parsed.commemorated_name.as_str()),
            self.other_name(),
        ])
        .to_string();
        (primary, fallback)
    }

    fn fallback_name(&self) -> &str {
        first_non_empty(&[self.other_name(), self.attributes.name.as_deref()])
    }
}

fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> &'a str {
    candidates
        .iter()
        .flatten()
        .find(|s| !s.is_empty())
        .copied()
        .unwrap_or("")
}

// -----------------------------------------------------------------------------
// Lenient attribute decoding
// -----------------------------------------------------------------------------

fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn de_object_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(value: serde_json::Value) -> Feature {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn decodes_service_shape() {
        let f = feature(json!({
            "attributes": {
                "OBJECTID": 42,
                "NAME": "Mawson Drive",
                "CATEGORY_NAME": "Street",
                "OTHER_NAME": null,
                "DIVISION_CODE": 12,
                "DESCRIPTION": "Commemorated name: Mawson"
            },
            "geometry": { "x": 149.1, "y": -35.3 }
        }));
        assert_eq!(f.object_id(), 42);
        assert_eq!(f.name(), "Mawson Drive");
        assert_eq!(f.other_name(), None);
        assert_eq!(f.division(), Facet::Named("12".into()));
        assert_eq!(f.point(), Some((-35.3, 149.1)));
        assert!(f.gazettal_information().is_none());
    }

    #[test]
    fn missing_everything_degrades() {
        let f = feature(json!({}));
        assert_eq!(f.object_id(), 0);
        assert_eq!(f.name(), "");
        assert_eq!(f.display_name(), "Unknown");
        assert_eq!(f.category(), Facet::Unspecified);
        assert_eq!(f.category_label(), UNCATEGORISED);
        assert_eq!(f.point(), None);
        assert_eq!(f.named_after(), "Not specified");
    }

    #[test]
    fn object_id_accepts_strings() {
        let f = feature(json!({ "attributes": { "OBJECTID": " 7 " } }));
        assert_eq!(f.object_id(), 7);
    }

    #[test]
    fn geometry_out_of_range_is_rejected() {
        let g = Geometry { x: Some(200.0), y: Some(-35.0) };
        assert_eq!(g.point(), None);
        let g = Geometry { x: Some(149.0), y: None };
        assert_eq!(g.point(), None);
        let g = Geometry { x: Some(f64::NAN), y: Some(1.0) };
        assert_eq!(g.point(), None);
        let g = Geometry { x: Some(-180.0), y: Some(90.0) };
        assert_eq!(g.point(), Some((90.0, -180.0)));
    }

    #[test]
    fn facet_trims_and_buckets_blank() {
        assert_eq!(Facet::from_attr(Some("  Park ")), Facet::Named("Park".into()));
        assert_eq!(Facet::from_attr(Some("   ")), Facet::Unspecified);
        assert!(Facet::Named("Zzz".into()) < Facet::Unspecified);
    }

    #[test]
    fn named_after_uses_title_given_and_commemorated() {
        let f = feature(json!({ "attributes": {
            "NAME": "Mawson Drive",
            "DESCRIPTION": "Title: Sir\nGiven names: Douglas\nCommemorated name: Mawson"
        }}));
        assert_eq!(f.named_after(), "Sir Douglas Mawson");
        let (primary, fallback) = f.summary_terms();
        assert_eq!(primary, "Sir Douglas Mawson");
        assert_eq!(fallback, "Mawson");
    }

    #[test]
    fn named_after_falls_back_to_other_name_then_name() {
        let f = feature(json!({ "attributes": { "NAME": "Ainslie", "OTHER_NAME": "" } }));
        assert_eq!(f.named_after(), "Ainslie");
        let f = feature(json!({ "attributes": { "NAME": "Ainslie", "OTHER_NAME": "Mount Ainslie" } }));
        assert_eq!(f.named_after(), "Mount Ainslie");
    }

    #[test]
    fn none_given_names_are_not_used() {
        let f = feature(json!({ "attributes": {
            "DESCRIPTION": "Given names: None\nCommemorated name: Cook"
        }}));
        assert_eq!(f.named_after(), "Cook");
    }

    #[test]
    fn map_url_uses_lat_then_lng() {
        let f = feature(json!({ "geometry": { "x": 149.5, "y": -35.25 } }));
        assert_eq!(
            f.map_url().as_deref(),
            Some("https://www.google.com/maps?q=-35.25,149.5")
        );
    }
}
