//! Product filter resolution.
//!
//! Selecting a category in the storefront lists products tagged with that
//! category or any of its direct children. Since the taxonomy has at most two
//! levels the expansion never recurses.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::category::{ALL_SLUG, Category};
use crate::tree::CategoryTree;

/// Filter handed to the product query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "slugs", rename_all = "snake_case")]
pub enum ProductFilter {
    /// Every product matches.
    Unconstrained,
    /// Products whose category slug is in the set match. An empty set matches nothing.
    Slugs(BTreeSet<String>),
}

impl ProductFilter {
    /// Filter that matches nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::Slugs(BTreeSet::new())
    }

    /// Whether a product assigned to `category_slug` passes this filter.
    #[must_use]
    pub fn matches(&self, category_slug: &str) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::Slugs(slugs) => slugs.contains(category_slug),
        }
    }

    /// Whether this filter rejects every product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Slugs(slugs) if slugs.is_empty())
    }

    /// Matching slugs, or `None` when unconstrained.
    #[must_use]
    pub fn slugs(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Unconstrained => None,
            Self::Slugs(slugs) => Some(slugs),
        }
    }
}

/// Resolve the selected top-level category into a product filter.
///
/// - `None` or the reserved `"all"` slug: unconstrained.
/// - Unknown slug: empty filter, so an unrelated catalog is never shown.
/// - Known slug: the slug itself plus the slugs of its direct children.
pub fn resolve(tree: &CategoryTree, selected: Option<&str>) -> ProductFilter {
    let Some(slug) = selected else {
        return ProductFilter::Unconstrained;
    };
    if slug == ALL_SLUG {
        return ProductFilter::Unconstrained;
    }

    if tree.is_truncated() {
        tracing::warn!(
            truncated = tree.truncated_depth_count(),
            "Category tree deeper than two levels; nested subcategories are ignored"
        );
    }

    let Some(category) = tree.get(slug) else {
        tracing::debug!(slug, "Unknown category; filter matches nothing");
        return ProductFilter::none();
    };

    if let Category::Pending(_) = category {
        tracing::warn!(slug, "Subcategories not loaded; filtering by category only");
    }

    let mut slugs = BTreeSet::new();
    slugs.insert(category.slug().to_owned());
    slugs.extend(category.children().iter().map(|child| child.slug().to_owned()));

    ProductFilter::Slugs(slugs)
}

/// Resolve a subcategory listing scoped to its parent.
///
/// Matches only `child` when it is a direct child of `parent`, otherwise
/// nothing.
pub fn resolve_scoped(tree: &CategoryTree, parent: &str, child: &str) -> ProductFilter {
    let found = tree
        .get(parent)
        .and_then(|category| category.children().iter().find(|c| c.slug() == child));

    match found {
        Some(leaf) => ProductFilter::Slugs(BTreeSet::from([leaf.slug().to_owned()])),
        None => {
            tracing::debug!(parent, child, "Unknown subcategory; filter matches nothing");
            ProductFilter::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{CategoryInfo, LeafCategory};
    use pretty_assertions::assert_eq;

    fn info(slug: &str) -> CategoryInfo {
        CategoryInfo {
            id: slug.to_owned(),
            slug: slug.to_owned(),
            name: slug.to_owned(),
            color: None,
        }
    }

    fn leaf(slug: &str) -> LeafCategory {
        LeafCategory(info(slug))
    }

    fn sample_tree() -> CategoryTree {
        CategoryTree::new(vec![
            Category::Leaf(leaf("all")),
            Category::with_children(info("electronics"), vec![leaf("phones"), leaf("laptops")]),
            Category::Leaf(leaf("books")),
            Category::Pending(leaf("garden")),
        ])
    }

    fn slug_set(slugs: &[&str]) -> ProductFilter {
        ProductFilter::Slugs(slugs.iter().map(|&s| s.to_owned()).collect())
    }

    #[test]
    fn test_resolve_none_is_unconstrained() {
        let filter = resolve(&sample_tree(), None);

        assert_eq!(filter, ProductFilter::Unconstrained);
        assert!(filter.matches("anything"));
        assert!(filter.slugs().is_none());
    }

    #[test]
    fn test_resolve_none_on_empty_tree_is_unconstrained() {
        assert_eq!(
            resolve(&CategoryTree::default(), None),
            ProductFilter::Unconstrained
        );
    }

    #[test]
    fn test_resolve_all_is_unconstrained() {
        assert_eq!(
            resolve(&sample_tree(), Some("all")),
            ProductFilter::Unconstrained
        );
    }

    #[test]
    fn test_resolve_parent_includes_children() {
        let filter = resolve(&sample_tree(), Some("electronics"));

        assert_eq!(filter, slug_set(&["electronics", "phones", "laptops"]));
        assert!(filter.matches("phones"));
        assert!(!filter.matches("books"));
    }

    #[test]
    fn test_resolve_leaf_is_singleton() {
        assert_eq!(resolve(&sample_tree(), Some("books")), slug_set(&["books"]));
    }

    #[test]
    fn test_resolve_pending_is_singleton() {
        assert_eq!(resolve(&sample_tree(), Some("garden")), slug_set(&["garden"]));
    }

    #[test]
    fn test_resolve_unknown_is_empty() {
        let filter = resolve(&sample_tree(), Some("nonexistent"));

        assert!(filter.is_empty());
        assert!(!filter.matches("nonexistent"));
        assert!(!filter.matches("books"));
    }

    #[test]
    fn test_resolve_subcategory_slug_at_top_level_is_empty() {
        // Only top-level slugs resolve; subcategory pages use resolve_scoped
        assert!(resolve(&sample_tree(), Some("phones")).is_empty());
    }

    #[test]
    fn test_resolve_scoped_known_child() {
        assert_eq!(
            resolve_scoped(&sample_tree(), "electronics", "laptops"),
            slug_set(&["laptops"])
        );
    }

    #[test]
    fn test_resolve_scoped_wrong_parent_is_empty() {
        assert!(resolve_scoped(&sample_tree(), "books", "laptops").is_empty());
        assert!(resolve_scoped(&sample_tree(), "missing", "laptops").is_empty());
    }

    #[test]
    fn test_resolve_truncated_tree_still_resolves_two_levels() {
        let json = r#"[
            { "id": 1, "slug": "electronics", "name": "Electronics", "subcategories": [
                { "id": 2, "slug": "phones", "name": "Phones", "subcategories": [
                    { "id": 3, "slug": "android", "name": "Android" }
                ] }
            ] }
        ]"#;
        let tree = crate::loader::parse_json(json).unwrap();

        let filter = resolve(&tree, Some("electronics"));

        assert_eq!(filter, slug_set(&["electronics", "phones"]));
        assert!(!filter.matches("android"));
    }

    #[test]
    fn test_filter_serialization() {
        let json = serde_json::to_value(resolve(&sample_tree(), Some("books"))).unwrap();
        assert_eq!(json["type"], "slugs");
        assert_eq!(json["slugs"][0], "books");

        let json = serde_json::to_value(ProductFilter::Unconstrained).unwrap();
        assert_eq!(json["type"], "unconstrained");
    }
}
