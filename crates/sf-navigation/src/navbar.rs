//! Top navbar active item.

use serde::Serialize;

/// Static navbar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavbarItem {
    pub href: String,
    pub label: String,
}

impl NavbarItem {
    #[must_use]
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Index of the item whose `href` equals `pathname`.
///
/// Matching is exact: `/about/team` does not activate `/about`.
#[must_use]
pub fn active_navbar_item(items: &[NavbarItem], pathname: &str) -> Option<usize> {
    items.iter().position(|item| item.href == pathname)
}
