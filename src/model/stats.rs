//! Per-column statistics as written by `qsv stats --stats-jsonl`

use serde::{Deserialize, Deserializer, Serialize};

/// Statistics for one column
///
/// Only `field`, `type`, `nullcount` and `cardinality` are always present;
/// everything else depends on the column type and the options `stats` ran
/// with, so a missing key is kept as `None` rather than zero. Unknown keys
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsRecord {
    /// Column name
    pub field: String,
    /// Inferred type (String, Integer, Float, Date, DateTime, Boolean, NULL)
    #[serde(rename = "type", alias = "data_type")]
    pub data_type: String,
    #[serde(default)]
    pub is_ascii: bool,
    #[serde(default)]
    pub sum: Option<f64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub min: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub max: Option<String>,
    #[serde(default)]
    pub range: Option<f64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub min_length: Option<u64>,
    #[serde(default)]
    pub max_length: Option<u64>,
    #[serde(default)]
    pub sum_length: Option<u64>,
    #[serde(default)]
    pub avg_length: Option<f64>,
    #[serde(default)]
    pub stddev_length: Option<f64>,
    #[serde(default)]
    pub variance_length: Option<f64>,
    #[serde(default)]
    pub cv_length: Option<f64>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub sem: Option<f64>,
    #[serde(default)]
    pub stddev: Option<f64>,
    #[serde(default)]
    pub variance: Option<f64>,
    #[serde(default)]
    pub cv: Option<f64>,
    pub nullcount: u64,
    #[serde(default)]
    pub max_precision: Option<u64>,
    #[serde(default)]
    pub sparsity: Option<f64>,
    #[serde(default)]
    pub mad: Option<f64>,
    #[serde(default)]
    pub lower_outer_fence: Option<f64>,
    #[serde(default)]
    pub lower_inner_fence: Option<f64>,
    #[serde(default)]
    pub q1: Option<f64>,
    #[serde(default)]
    pub q2_median: Option<f64>,
    #[serde(default)]
    pub q3: Option<f64>,
    #[serde(default)]
    pub iqr: Option<f64>,
    #[serde(default)]
    pub upper_inner_fence: Option<f64>,
    #[serde(default)]
    pub upper_outer_fence: Option<f64>,
    #[serde(default)]
    pub skewness: Option<f64>,
    pub cardinality: u64,
    #[serde(default)]
    pub uniqueness_ratio: Option<f64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub mode: Option<String>,
    #[serde(default)]
    pub mode_count: Option<u64>,
    #[serde(default)]
    pub mode_occurrences: Option<u64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub antimode: Option<String>,
    #[serde(default)]
    pub antimode_count: Option<u64>,
    #[serde(default)]
    pub antimode_occurrences: Option<u64>,
}

impl StatsRecord {
    /// Whether every value in the column was null
    pub fn is_all_null(&self) -> bool {
        self.data_type == "NULL"
    }

    /// Whether every non-null value is distinct
    pub fn is_unique(&self) -> bool {
        self.uniqueness_ratio == Some(1.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Accept a string or a JSON number, keeping numbers in their textual form
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    }))
}
