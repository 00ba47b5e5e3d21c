//! Product records and the metadata blob sent when saving one.

use serde::{Deserialize, Deserializer, Serialize};

use crate::entity::{Entity, MediaRelation};
use crate::types::Timestamp;

pub type ProductEntity = Entity<ProductAttributes>;

/// Attributes of a product as stored by the CMS.
///
/// Prices and barcodes travel as strings but older records hold plain
/// numbers, so both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributes {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub base_price: Option<String>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub unique_name: String,
    #[serde(default)]
    pub image: MediaRelation,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub published_at: Option<Timestamp>,
}

/// JSON metadata part of a product create/update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub price: String,
    pub base_price: String,
    pub unit: String,
    pub stock: Option<i64>,
    pub product_id: String,
    pub unique_name: String,
}

/// Composite search key `"{name} - {unit}"`.
///
/// Both parts are trimmed; an empty unit yields just the name.
pub fn unique_name(name: &str, unit: &str) -> String {
    let (name, unit) = (name.trim(), unit.trim());
    if unit.is_empty() {
        name.to_string()
    } else {
        format!("{name} - {unit}")
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
