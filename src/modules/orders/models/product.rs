use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Image rendition of a product for one thumbnail size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    /// Location on the server's disk, when known
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Physical size of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub unit: String,
}

impl Dimensions {
    /// "L × W × H unit", skipping unset measures; empty when none are set
    pub fn formatted(&self) -> String {
        let measures: Vec<&str> = [&self.length, &self.width, &self.height]
            .into_iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect();

        if measures.is_empty() {
            return String::new();
        }

        let joined = measures.join(" × ");
        if self.unit.is_empty() {
            joined
        } else {
            format!("{} {}", joined, self.unit)
        }
    }
}

/// Product snapshot attached to a line item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub sku: String,
    pub weight: Option<String>,
    pub dimensions: Option<Dimensions>,
    /// Free-text attributes keyed by sanitized name
    pub attributes: BTreeMap<String, String>,
    /// Taxonomy terms keyed by taxonomy name (`pa_<attribute>`)
    pub terms: BTreeMap<String, Vec<String>>,
    /// Renditions keyed by thumbnail size name
    pub images: BTreeMap<String, ProductImage>,
    /// Full-size attachment of the product (or its parent), used when a
    /// rendition has no usable server path
    pub attachment_path: Option<PathBuf>,
}

/// Normalizes an attribute name the way attribute keys are stored
pub fn sanitize_title(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() || ch == '_' {
            slug.extend(ch.to_lowercase());
            last_dash = false;
        } else if !last_dash && !slug.is_empty() {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Taxonomy name backing a global attribute
pub fn attribute_taxonomy_name(name: &str) -> String {
    format!("pa_{}", sanitize_title(name))
}
