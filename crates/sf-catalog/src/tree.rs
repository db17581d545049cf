//! In-memory category taxonomy.
//!
//! Top-level categories are stored in display order with a slug index for
//! O(1) lookups. The tree is read-only after construction and shared between
//! the sidebar and the category bar without locking.

use std::collections::HashMap;

use crate::category::Category;

/// Two-level category taxonomy snapshot.
#[derive(Clone, Debug, Default)]
pub struct CategoryTree {
    categories: Vec<Category>,
    slug_index: HashMap<String, usize>,
    truncated_depth_count: usize,
}

impl CategoryTree {
    /// Create a tree from top-level categories in display order.
    ///
    /// When two top-level categories share a slug, lookups return the first.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self::with_truncation(categories, 0)
    }

    /// Create a tree recording how many over-deep levels were dropped by the loader.
    #[must_use]
    pub(crate) fn with_truncation(categories: Vec<Category>, truncated_depth_count: usize) -> Self {
        let mut slug_index = HashMap::with_capacity(categories.len());
        for (i, category) in categories.iter().enumerate() {
            slug_index.entry(category.slug().to_owned()).or_insert(i);
        }

        Self {
            categories,
            slug_index,
            truncated_depth_count,
        }
    }

    /// Top-level categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a top-level category by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Category> {
        self.position(slug).map(|i| &self.categories[i])
    }

    /// Display index of a top-level category.
    #[must_use]
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.slug_index.get(slug).copied()
    }

    /// Number of top-level categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Whether the source data nested deeper than two levels.
    ///
    /// Nested subcategories are dropped on load; this flag lets consumers
    /// surface the anomaly.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated_depth_count > 0
    }

    /// Number of subcategories whose own children were dropped on load.
    #[must_use]
    pub fn truncated_depth_count(&self) -> usize {
        self.truncated_depth_count
    }
}
