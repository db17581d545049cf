//! Category sidebar drill-down.
//!
//! The sidebar shows top-level categories first. Selecting a category with
//! subcategories descends one level; selecting a leaf emits a single
//! [`NavigationIntent`] and closes the sidebar. Closing always resets to the
//! top level, so reopening never resumes a previous drill-down.
//!
//! # Architecture
//!
//! [`NavigationState`] is a value type transitioned by pure functions that
//! return the next state and an optional intent. [`Sidebar`] is the single
//! mutable owner: it holds visibility, applies transitions, and forwards
//! intents to the [`Router`].

use std::sync::Arc;

use sf_catalog::{Category, CategoryTree, LeafCategory, ParentCategory};

use crate::intent::{NavigationIntent, Router};

/// Header color when no drilled category provides an accent.
const DEFAULT_HEADER_COLOR: &str = "white";

/// Drill-down position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NavigationState {
    /// Showing top-level categories.
    #[default]
    Root,
    /// Showing the children of a parent category.
    Drilled(ParentCategory),
}

/// Outcome of a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after the selection.
    pub state: NavigationState,
    /// Intent to forward to the router, if the selection was terminal.
    pub intent: Option<NavigationIntent>,
}

impl Transition {
    fn stay(state: NavigationState) -> Self {
        Self {
            state,
            intent: None,
        }
    }

    fn navigate(intent: NavigationIntent) -> Self {
        Self {
            state: NavigationState::Root,
            intent: Some(intent),
        }
    }
}

/// Entry displayed in the sidebar list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarEntry<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub color: Option<&'a str>,
    /// Selecting this entry descends instead of navigating.
    pub has_children: bool,
}

impl<'a> SidebarEntry<'a> {
    fn from_category(category: &'a Category) -> Self {
        Self {
            slug: category.slug(),
            name: category.name(),
            color: category.color(),
            has_children: category.has_children(),
        }
    }

    fn from_leaf(leaf: &'a LeafCategory) -> Self {
        Self {
            slug: leaf.slug(),
            name: leaf.name(),
            color: leaf.0.color.as_deref(),
            has_children: false,
        }
    }
}

impl NavigationState {
    /// Select the entry with `slug` from the currently displayed set.
    ///
    /// Selections that are not displayed are ignored: the state is returned
    /// unchanged and no intent is produced.
    #[must_use]
    pub fn select(self, tree: &CategoryTree, slug: &str) -> Transition {
        match self {
            Self::Root => {
                let Some(category) = tree.get(slug) else {
                    tracing::warn!(slug, "Ignoring selection of category not in sidebar");
                    return Transition::stay(Self::Root);
                };
                match category {
                    Category::Parent(parent) => {
                        tracing::debug!(slug, "Sidebar drilled into category");
                        Transition::stay(Self::Drilled(parent.clone()))
                    }
                    Category::Leaf(_) | Category::Pending(_) if category.is_all() => {
                        Transition::navigate(NavigationIntent::Root)
                    }
                    Category::Leaf(_) | Category::Pending(_) => {
                        Transition::navigate(NavigationIntent::Category {
                            category: slug.to_owned(),
                        })
                    }
                }
            }
            Self::Drilled(parent) => {
                if parent.child(slug).is_none() {
                    tracing::warn!(
                        parent = parent.slug(),
                        slug,
                        "Ignoring selection of subcategory not in sidebar"
                    );
                    return Transition::stay(Self::Drilled(parent));
                }
                Transition::navigate(NavigationIntent::CategoryAndSubcategory {
                    category: parent.slug().to_owned(),
                    subcategory: slug.to_owned(),
                })
            }
        }
    }

    /// Return to the top level.
    #[must_use]
    pub fn back(self) -> Self {
        Self::Root
    }

    /// Reset on sidebar close.
    #[must_use]
    pub fn close(self) -> Self {
        Self::Root
    }

    /// Entries currently displayed.
    #[must_use]
    pub fn displayed<'a>(&'a self, tree: &'a CategoryTree) -> Vec<SidebarEntry<'a>> {
        match self {
            Self::Root => tree
                .categories()
                .iter()
                .map(SidebarEntry::from_category)
                .collect(),
            Self::Drilled(parent) => parent
                .children
                .iter()
                .map(SidebarEntry::from_leaf)
                .collect(),
        }
    }

    /// Parent category being shown, if drilled.
    #[must_use]
    pub fn drilled(&self) -> Option<&ParentCategory> {
        match self {
            Self::Root => None,
            Self::Drilled(parent) => Some(parent),
        }
    }
}

/// Sidebar owned by the rendering layer.
pub struct Sidebar<R> {
    tree: Arc<CategoryTree>,
    router: R,
    open: bool,
    state: NavigationState,
    default_header_color: String,
}

impl<R: Router> Sidebar<R> {
    /// Create a closed sidebar over `tree`.
    #[must_use]
    pub fn new(tree: Arc<CategoryTree>, router: R) -> Self {
        Self {
            tree,
            router,
            open: false,
            state: NavigationState::Root,
            default_header_color: DEFAULT_HEADER_COLOR.to_owned(),
        }
    }

    /// Override the header color used when no drilled category has an accent.
    #[must_use]
    pub fn with_header_color(mut self, color: impl Into<String>) -> Self {
        self.default_header_color = color.into();
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Flip visibility (the "View All" control).
    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Change visibility. Every visibility change resets drill-down.
    pub fn set_open(&mut self, open: bool) {
        self.state = std::mem::take(&mut self.state).close();
        self.open = open;
    }

    /// Current drill-down position.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Entries currently displayed.
    #[must_use]
    pub fn entries(&self) -> Vec<SidebarEntry<'_>> {
        self.state.displayed(&self.tree)
    }

    /// Whether the back control is shown.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.state.drilled().is_some()
    }

    /// Header color: the drilled category's accent, else the default.
    #[must_use]
    pub fn header_color(&self) -> &str {
        self.state
            .drilled()
            .and_then(|parent| parent.info.color.as_deref())
            .unwrap_or(self.default_header_color.as_str())
    }

    /// Select an entry by slug.
    ///
    /// A terminal selection forwards exactly one intent to the router and
    /// closes the sidebar. Returns the forwarded intent.
    pub fn select(&mut self, slug: &str) -> Option<NavigationIntent> {
        if !self.open {
            tracing::warn!(slug, "Ignoring selection while sidebar is closed");
            return None;
        }

        let transition = std::mem::take(&mut self.state).select(&self.tree, slug);
        self.state = transition.state;

        let intent = transition.intent?;
        self.router.navigate(intent.clone());
        self.close();
        Some(intent)
    }

    /// Return to the top level.
    pub fn back(&mut self) {
        self.state = std::mem::take(&mut self.state).back();
    }
}
