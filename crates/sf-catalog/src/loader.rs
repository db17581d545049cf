//! Category snapshot loading.
//!
//! The category data source delivers a list of records, each optionally
//! carrying one level of subcategories. Records are converted into the tagged
//! [`Category`] model here, which is also where the two-level cap is enforced:
//! nested subcategories are dropped and reported as anomalies.
//!
//! # Record shape
//!
//! ```json
//! [
//!   { "id": 1, "slug": "all", "name": "All" },
//!   { "id": 2, "slug": "electronics", "name": "Electronics", "color": "#FFB347",
//!     "subcategories": { "docs": [ { "id": 3, "slug": "phones", "name": "Phones" } ] } },
//!   { "id": 4, "slug": "garden", "name": "Garden", "subcategories": null }
//! ]
//! ```
//!
//! `subcategories` may be a plain list or the paginated `{ "docs": [...] }`
//! shape. An explicit `null` means the children were not fetched, which
//! produces [`Category::Pending`]. A missing field means no children.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::category::{Category, CategoryInfo, LeafCategory};
use crate::tree::CategoryTree;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// Error returned when a category snapshot cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error reading the snapshot file.
    #[error("Failed to read category snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Snapshot is not valid JSON.
    #[error("Invalid JSON category snapshot: {0}")]
    Json(#[from] serde_json::Error),
    /// Snapshot is not valid YAML.
    #[error("Invalid YAML category snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Snapshot file extension is neither JSON nor YAML.
    #[error("Unsupported snapshot format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Snapshot top level is not a list of category records.
    #[error("Category snapshot must be a list of categories, got {0}")]
    InvalidShape(&'static str),
}

/// Category record as delivered by the data source.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryRecord {
    /// Opaque identifier (string or integer in the source).
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    /// `None` when absent, `Some(None)` when explicitly null.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub subcategories: Option<Option<SubcategoryRecords>>,
}

/// Subcategory list in either of the shapes the data source produces.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SubcategoryRecords {
    List(Vec<CategoryRecord>),
    Paginated { docs: Vec<CategoryRecord> },
}

impl SubcategoryRecords {
    fn into_vec(self) -> Vec<CategoryRecord> {
        match self {
            Self::List(records) | Self::Paginated { docs: records } => records,
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::List(records) | Self::Paginated { docs: records } => records.is_empty(),
        }
    }
}

impl CategoryRecord {
    fn into_info(self) -> (CategoryInfo, Option<Option<SubcategoryRecords>>) {
        let info = CategoryInfo {
            id: self.id,
            slug: self.slug,
            name: self.name,
            color: self.color,
        };
        (info, self.subcategories)
    }

    /// Whether this record nests below the two-level cap.
    fn has_nested_children(&self) -> bool {
        matches!(&self.subcategories, Some(Some(children)) if !children.is_empty())
    }
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Int(n) => n.to_string(),
    })
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Warn about slugs that cannot be used as URL path segments verbatim.
fn check_slug(slug: &str, seen: &mut HashSet<String>, parent: Option<&str>) {
    if !SLUG_RE.is_match(slug) {
        tracing::warn!(slug, parent, "Category slug is not URL-safe");
    }
    if !seen.insert(slug.to_owned()) {
        tracing::warn!(slug, parent, "Duplicate category slug among siblings");
    }
}

impl CategoryTree {
    /// Build a tree from data source records.
    ///
    /// Subcategories that carry their own subcategories are truncated to
    /// depth two; each truncation is logged and counted in
    /// [`CategoryTree::truncated_depth_count`].
    #[must_use]
    pub fn from_records(records: Vec<CategoryRecord>) -> Self {
        let mut truncated = 0;
        let mut top_slugs = HashSet::new();
        let mut categories = Vec::with_capacity(records.len());

        for record in records {
            check_slug(&record.slug, &mut top_slugs, None);
            let (info, subcategories) = record.into_info();

            let category = match subcategories {
                None => Category::Leaf(LeafCategory(info)),
                Some(None) => Category::Pending(LeafCategory(info)),
                Some(Some(children)) => {
                    let mut child_slugs = HashSet::new();
                    let mut leaves = Vec::new();
                    for child in children.into_vec() {
                        check_slug(&child.slug, &mut child_slugs, Some(info.slug.as_str()));
                        if child.has_nested_children() {
                            truncated += 1;
                            tracing::warn!(
                                parent = %info.slug,
                                subcategory = %child.slug,
                                "Subcategory has nested subcategories; truncating to two levels"
                            );
                        }
                        leaves.push(LeafCategory(child.into_info().0));
                    }
                    Category::with_children(info, leaves)
                }
            };
            categories.push(category);
        }

        tracing::debug!(
            category_count = categories.len(),
            truncated,
            "Category tree loaded"
        );

        Self::with_truncation(categories, truncated)
    }
}

/// Name a non-list top level for error reporting.
fn shape_name(value: &serde_json::Value) -> Option<&'static str> {
    match value {
        serde_json::Value::Array(_) => None,
        serde_json::Value::Null => Some("null"),
        serde_json::Value::Bool(_) => Some("a boolean"),
        serde_json::Value::Number(_) => Some("a number"),
        serde_json::Value::String(_) => Some("a string"),
        serde_json::Value::Object(_) => Some("an object"),
    }
}

/// Parse a JSON category snapshot.
pub fn parse_json(content: &str) -> Result<CategoryTree, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if let Some(shape) = shape_name(&value) {
        return Err(CatalogError::InvalidShape(shape));
    }
    let records: Vec<CategoryRecord> = serde_json::from_value(value)?;
    Ok(CategoryTree::from_records(records))
}

/// Parse a YAML category snapshot.
pub fn parse_yaml(content: &str) -> Result<CategoryTree, CatalogError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    let shape = match &value {
        serde_yaml::Value::Sequence(_) => None,
        serde_yaml::Value::Null => Some("null"),
        serde_yaml::Value::Mapping(_) => Some("a mapping"),
        _ => Some("a scalar"),
    };
    if let Some(shape) = shape {
        return Err(CatalogError::InvalidShape(shape));
    }
    let records: Vec<CategoryRecord> = serde_yaml::from_value(value)?;
    Ok(CategoryTree::from_records(records))
}

/// Load a category snapshot file.
///
/// The format is chosen by extension: `.json`, `.yaml`, or `.yml`.
pub fn load_snapshot(path: &Path) -> Result<CategoryTree, CatalogError> {
    let parse: fn(&str) -> Result<CategoryTree, CatalogError> =
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => parse_json,
            Some("yaml" | "yml") => parse_yaml,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SNAPSHOT: &str = r##"[
        { "id": 1, "slug": "all", "name": "All" },
        { "id": 2, "slug": "electronics", "name": "Electronics", "color": "#FFB347",
          "subcategories": [
            { "id": 3, "slug": "phones", "name": "Phones" },
            { "id": 4, "slug": "laptops", "name": "Laptops" }
          ] },
        { "id": "5", "slug": "books", "name": "Books", "subcategories": [] }
    ]"##;

    fn slugs(tree: &CategoryTree) -> Vec<&str> {
        tree.categories().iter().map(Category::slug).collect()
    }

    #[test]
    fn test_parse_json_builds_tagged_tree() {
        let tree = parse_json(SNAPSHOT).unwrap();

        assert_eq!(slugs(&tree), vec!["all", "electronics", "books"]);
        assert!(matches!(tree.get("all"), Some(Category::Leaf(_))));
        assert!(matches!(tree.get("books"), Some(Category::Leaf(_))));

        let electronics = tree.get("electronics").unwrap();
        assert_eq!(electronics.color(), Some("#FFB347"));
        let children: Vec<_> = electronics.children().iter().map(LeafCategory::slug).collect();
        assert_eq!(children, vec!["phones", "laptops"]);
        assert!(!tree.is_truncated());
    }

    #[test]
    fn test_parse_json_numeric_and_string_ids() {
        let tree = parse_json(SNAPSHOT).unwrap();

        assert_eq!(tree.get("all").unwrap().info().id, "1");
        assert_eq!(tree.get("books").unwrap().info().id, "5");
    }

    #[test]
    fn test_parse_json_paginated_subcategories() {
        let json = r#"[
            { "id": 1, "slug": "fashion", "name": "Fashion",
              "subcategories": { "docs": [ { "id": 2, "slug": "shoes", "name": "Shoes" } ] } }
        ]"#;

        let tree = parse_json(json).unwrap();

        let children = tree.get("fashion").unwrap().children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].slug(), "shoes");
    }

    #[test]
    fn test_parse_json_null_subcategories_is_pending() {
        let json = r#"[ { "id": 1, "slug": "garden", "name": "Garden", "subcategories": null } ]"#;

        let tree = parse_json(json).unwrap();

        assert!(matches!(tree.get("garden"), Some(Category::Pending(_))));
    }

    #[test]
    fn test_parse_json_truncates_nested_subcategories() {
        let json = r#"[
            { "id": 1, "slug": "electronics", "name": "Electronics", "subcategories": [
                { "id": 2, "slug": "phones", "name": "Phones", "subcategories": [
                    { "id": 3, "slug": "android", "name": "Android" }
                ] },
                { "id": 4, "slug": "laptops", "name": "Laptops", "subcategories": [] }
            ] }
        ]"#;

        let tree = parse_json(json).unwrap();

        assert!(tree.is_truncated());
        assert_eq!(tree.truncated_depth_count(), 1);
        let children: Vec<_> = tree
            .get("electronics")
            .unwrap()
            .children()
            .iter()
            .map(LeafCategory::slug)
            .collect();
        assert_eq!(children, vec!["phones", "laptops"]);
    }

    #[test]
    fn test_parse_json_object_is_invalid_shape() {
        let result = parse_json(r#"{ "docs": [] }"#);

        assert!(matches!(result, Err(CatalogError::InvalidShape("an object"))));
    }

    #[test]
    fn test_parse_json_malformed() {
        let result = parse_json("[ { \"slug\": ");

        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_parse_json_duplicate_slugs_kept() {
        let json = r#"[
            { "id": 1, "slug": "books", "name": "Books" },
            { "id": 2, "slug": "books", "name": "More Books" }
        ]"#;

        let tree = parse_json(json).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get("books").unwrap().name(), "Books");
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r"
- id: 1
  slug: all
  name: All
- id: 2
  slug: electronics
  name: Electronics
  subcategories:
    - id: 3
      slug: phones
      name: Phones
";

        let tree = parse_yaml(yaml).unwrap();

        assert_eq!(slugs(&tree), vec!["all", "electronics"]);
        assert_eq!(tree.get("electronics").unwrap().children().len(), 1);
    }

    #[test]
    fn test_parse_yaml_mapping_is_invalid_shape() {
        let result = parse_yaml("slug: all\nname: All\n");

        assert!(matches!(result, Err(CatalogError::InvalidShape("a mapping"))));
    }

    #[test]
    fn test_load_snapshot_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let tree = load_snapshot(&path).unwrap();

        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_load_snapshot_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_snapshot(&path).unwrap_err();

        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_snapshot_unsupported_extension() {
        let result = load_snapshot(Path::new("catalog.csv"));

        assert!(matches!(result, Err(CatalogError::UnsupportedFormat(_))));
    }
}
