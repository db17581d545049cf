//! Category node types.
//!
//! The taxonomy is capped at two levels. Top-level entries are tagged by
//! whether they carry children, so "no subcategories" and "subcategories not
//! fetched" are distinct states rather than an ambiguous optional field.

use serde::Serialize;

/// Reserved slug for the root pseudo-category that matches every product.
pub const ALL_SLUG: &str = "all";

/// Fields shared by every category regardless of depth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Opaque unique identifier from the data source.
    pub id: String,
    /// URL-safe identifier, unique among siblings.
    pub slug: String,
    /// Display label.
    pub name: String,
    /// Optional accent color (presentation only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Category without children.
///
/// Every subcategory is a leaf; top-level categories are leaves when they
/// have no subcategories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LeafCategory(pub CategoryInfo);

impl LeafCategory {
    /// Slug of this category.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.0.slug
    }

    /// Display name of this category.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }
}

/// Top-level category with at least one subcategory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParentCategory {
    #[serde(flatten)]
    pub info: CategoryInfo,
    /// Direct children, in display order. Never empty.
    pub children: Vec<LeafCategory>,
}

impl ParentCategory {
    /// Slug of this category.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.info.slug
    }

    /// Find a direct child by slug.
    #[must_use]
    pub fn child(&self, slug: &str) -> Option<&LeafCategory> {
        self.children.iter().find(|child| child.slug() == slug)
    }
}

/// Top-level category node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Category {
    /// Category with no subcategories.
    Leaf(LeafCategory),
    /// Category with one or more subcategories.
    Parent(ParentCategory),
    /// Category whose subcategories were not fetched by the data source.
    Pending(LeafCategory),
}

impl Category {
    /// Shared record fields.
    #[must_use]
    pub fn info(&self) -> &CategoryInfo {
        match self {
            Self::Leaf(leaf) | Self::Pending(leaf) => &leaf.0,
            Self::Parent(parent) => &parent.info,
        }
    }

    /// Slug of this category.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.info().slug
    }

    /// Display name of this category.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info().name
    }

    /// Accent color, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.info().color.as_deref()
    }

    /// Direct children. Empty for leaf and pending categories.
    #[must_use]
    pub fn children(&self) -> &[LeafCategory] {
        match self {
            Self::Parent(parent) => &parent.children,
            Self::Leaf(_) | Self::Pending(_) => &[],
        }
    }

    /// Whether selecting this category descends instead of navigating.
    #[must_use]
    pub fn has_children(&self) -> bool {
        matches!(self, Self::Parent(_))
    }

    /// Whether this is the reserved root pseudo-category.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.slug() == ALL_SLUG
    }

    /// Build a top-level category, tagging it by its children.
    ///
    /// An empty child list produces [`Category::Leaf`].
    #[must_use]
    pub fn with_children(info: CategoryInfo, children: Vec<LeafCategory>) -> Self {
        if children.is_empty() {
            Self::Leaf(LeafCategory(info))
        } else {
            Self::Parent(ParentCategory { info, children })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(slug: &str) -> CategoryInfo {
        CategoryInfo {
            id: format!("id-{slug}"),
            slug: slug.to_owned(),
            name: slug.to_uppercase(),
            color: None,
        }
    }

    #[test]
    fn test_with_children_empty_is_leaf() {
        let category = Category::with_children(info("books"), Vec::new());

        assert!(matches!(category, Category::Leaf(_)));
        assert!(!category.has_children());
        assert!(category.children().is_empty());
    }

    #[test]
    fn test_with_children_non_empty_is_parent() {
        let category =
            Category::with_children(info("electronics"), vec![LeafCategory(info("phones"))]);

        assert!(category.has_children());
        assert_eq!(category.children().len(), 1);
        assert_eq!(category.children()[0].slug(), "phones");
    }

    #[test]
    fn test_pending_has_no_children() {
        let category = Category::Pending(LeafCategory(info("garden")));

        assert!(!category.has_children());
        assert_eq!(category.slug(), "garden");
    }

    #[test]
    fn test_is_all() {
        assert!(Category::Leaf(LeafCategory(info("all"))).is_all());
        assert!(!Category::Leaf(LeafCategory(info("books"))).is_all());
    }

    #[test]
    fn test_parent_child_lookup() {
        let parent = ParentCategory {
            info: info("electronics"),
            children: vec![LeafCategory(info("phones")), LeafCategory(info("laptops"))],
        };

        assert_eq!(parent.child("laptops").map(LeafCategory::name), Some("LAPTOPS"));
        assert!(parent.child("tablets").is_none());
    }

    #[test]
    fn test_category_serialization_is_tagged() {
        let category =
            Category::with_children(info("electronics"), vec![LeafCategory(info("phones"))]);

        let json = serde_json::to_value(&category).unwrap();

        assert_eq!(json["kind"], "parent");
        assert_eq!(json["slug"], "electronics");
        assert_eq!(json["children"][0]["slug"], "phones");
        assert!(json.get("color").is_none());
    }
}
