// crates/placenames-core/src/stats.rs
//! Aggregate statistics over a loaded dataset.

use crate::config::STATS_TOP_N;
use crate::model::Feature;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A value and how many features carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// Counts shown by the statistics view.
///
/// Distributions are ordered by descending count; equal counts keep the
/// order in which the value was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub total_features: usize,
    pub total_categories: usize,
    pub total_divisions: usize,
    pub category_distribution: Vec<NameCount>,
    pub top_divisions: Vec<NameCount>,
    pub top_commemorated_names: Vec<NameCount>,
}

impl DatasetStats {
    pub fn from_features(features: &[Feature]) -> Self {
        if features.is_empty() {
            return Self::default();
        }

        let category_distribution =
            count_values(features.iter().map(|f| f.attributes.category_name.as_deref()));
        let mut top_divisions =
            count_values(features.iter().map(|f| f.attributes.division_code.as_deref()));
        let total_divisions = top_divisions.len();
        top_divisions.truncate(STATS_TOP_N);

        let commemorated: Vec<String> = features
            .iter()
            .map(|f| f.parsed_description().commemorated_name)
            .collect();
        let mut top_commemorated_names = count_values(
            commemorated
                .iter()
                .map(|name| Some(name.as_str()))
                .filter(|name| !name.is_some_and(|n| n.trim().eq_ignore_ascii_case("none"))),
        );
        top_commemorated_names.truncate(STATS_TOP_N);

        Self {
            total_features: features.len(),
            total_categories: category_distribution.len(),
            total_divisions,
            category_distribution,
            top_divisions,
            top_commemorated_names,
        }
    }
}

/// Count trimmed, non-empty values.
fn count_values<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<NameCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<NameCount> = Vec::new();

    for value in values.flatten().map(str::trim).filter(|v| !v.is_empty()) {
        match slots.get(value) {
            Some(&slot) => out[slot].count += 1,
            None => {
                slots.insert(value, out.len());
                out.push(NameCount {
                    name: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable: ties keep first-seen order
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attributes;

    fn feature(category: Option<&str>, division: Option<&str>, desc: &str) -> Feature {
        Feature {
            attributes: Attributes {
                category_name: category.map(Into::into),
                division_code: division.map(Into::into),
                description: Some(desc.into()),
                ..Attributes::default()
            },
            geometry: None,
        }
    }

    #[test]
    fn empty_dataset() {
        assert_eq!(DatasetStats::from_features(&[]), DatasetStats::default());
    }

    #[test]
    fn counts_and_orders() {
        let data = vec![
            feature(Some("Street"), Some("Cook"), "Commemorated name: Cook"),
            feature(Some("Park"), Some("Cook"), "Commemorated name: None"),
            feature(Some(" Street "), None, "Commemorated name: Mawson"),
            feature(None, Some("Ainslie"), "Commemorated name: Cook"),
            feature(Some(""), Some("Ainslie"), "prose only"),
        ];
        let stats = DatasetStats::from_features(&data);
        assert_eq!(stats.total_features, 5);
        assert_eq!(stats.total_categories, 2);
        assert_eq!(
            stats.category_distribution,
            vec![
                NameCount { name: "Street".into(), count: 2 },
                NameCount { name: "Park".into(), count: 1 },
            ]
        );
        assert_eq!(stats.total_divisions, 2);
        assert_eq!(stats.top_divisions[0].name, "Cook");
        assert_eq!(
            stats.top_commemorated_names,
            vec![
                NameCount { name: "Cook".into(), count: 2 },
                NameCount { name: "Mawson".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn numeric_division_codes_count_as_text_in_first_seen_order() {
        let data: Vec<Feature> = serde_json::from_value(serde_json::json!([
            { "attributes": { "DIVISION_CODE": "Reid" } },
            { "attributes": { "DIVISION_CODE": 7 } },
            { "attributes": { "DIVISION_CODE": 3 } },
            { "attributes": { "DIVISION_CODE": null } },
        ]))
        .unwrap();
        let stats = DatasetStats::from_features(&data);
        assert_eq!(stats.total_divisions, 3);
        let names: Vec<&str> = stats.top_divisions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Reid", "7", "3"]);
    }

    #[test]
    fn top_lists_are_capped() {
        let data: Vec<_> = (0..40)
            .map(|i| feature(None, Some(&format!("D{i}")), ""))
            .collect();
        let stats = DatasetStats::from_features(&data);
        assert_eq!(stats.total_divisions, 40);
        assert_eq!(stats.top_divisions.len(), STATS_TOP_N);
    }
}
