//! Category taxonomy and product filter resolution for the storefront.
//!
//! This crate provides:
//! - [`CategoryTree`]: the two-level category taxonomy loaded once per page
//! - [`resolve`]: turning a selected category into the slug set a product query matches
//! - Snapshot loading from the category data source ([`load_snapshot`])
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use sf_catalog::{load_snapshot, resolve};
//!
//! let tree = load_snapshot(Path::new("catalog.json"))?;
//!
//! // Parent category listing includes its direct children
//! let filter = resolve(&tree, Some("electronics"));
//! assert!(filter.matches("phones"));
//! # Ok(())
//! # }
//! ```

mod category;
mod filter;
mod loader;
mod tree;

pub use category::{ALL_SLUG, Category, CategoryInfo, LeafCategory, ParentCategory};
pub use filter::{ProductFilter, resolve, resolve_scoped};
pub use loader::{CatalogError, CategoryRecord, load_snapshot, parse_json, parse_yaml};
pub use tree::CategoryTree;
