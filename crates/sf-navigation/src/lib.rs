//! Category sidebar navigation for the storefront.
//!
//! This crate provides:
//! - [`NavigationState`]: pure drill-down transitions over a [`CategoryTree`](sf_catalog::CategoryTree)
//! - [`Sidebar`]: the single mutable owner of sidebar visibility and drill-down state
//! - [`NavigationIntent`] and the [`Router`] collaborator that receives it
//! - Route path helpers linking intents to product filters
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use sf_catalog::parse_json;
//! use sf_navigation::{NavigationIntent, RecordingRouter, Sidebar};
//!
//! let tree = parse_json(r#"[
//!     { "id": 1, "slug": "electronics", "name": "Electronics",
//!       "subcategories": [ { "id": 2, "slug": "phones", "name": "Phones" } ] }
//! ]"#).unwrap();
//!
//! let router = Arc::new(RecordingRouter::default());
//! let mut sidebar = Sidebar::new(Arc::new(tree), Arc::clone(&router));
//! sidebar.open();
//! sidebar.select("electronics");
//! sidebar.select("phones");
//!
//! assert_eq!(
//!     router.last(),
//!     Some(NavigationIntent::CategoryAndSubcategory {
//!         category: "electronics".to_owned(),
//!         subcategory: "phones".to_owned(),
//!     })
//! );
//! assert!(!sidebar.is_open());
//! ```

mod intent;
mod navbar;
mod route;
mod sidebar;

pub use intent::{NavigationIntent, RecordingRouter, Router};
pub use navbar::{NavbarItem, active_navbar_item};
pub use route::{RouteError, filter_for_route, parse_route, route_path};
pub use sidebar::{NavigationState, Sidebar, SidebarEntry, Transition};
