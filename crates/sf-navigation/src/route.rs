//! Route paths for navigation intents.
//!
//! The router formats intents as `/`, `/{category}`, and
//! `/{category}/{subcategory}`. Segments are percent-encoded so slugs that
//! slipped past the data source's URL-safety rules still produce valid paths.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use sf_catalog::{CategoryTree, ProductFilter, resolve, resolve_scoped};

use crate::intent::NavigationIntent;

/// Path segment unreserved characters: A-Z a-z 0-9 - . _ ~
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Error returned when a path is not a catalog route.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    /// Path does not start with `/`.
    #[error("Route must start with '/': {0}")]
    Relative(String),
    /// Path has more than two segments.
    #[error("Route has too many segments: {0}")]
    TooDeep(String),
    /// Segment is empty (e.g. `//phones`).
    #[error("Route has an empty segment: {0}")]
    EmptySegment(String),
    /// Segment is not valid UTF-8 after decoding.
    #[error("Route segment is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string()
}

fn decode(segment: &str, path: &str) -> Result<String, RouteError> {
    if segment.is_empty() {
        return Err(RouteError::EmptySegment(path.to_owned()));
    }
    percent_decode_str(segment)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| RouteError::InvalidEncoding(path.to_owned()))
}

/// Format the path for an intent.
#[must_use]
pub fn route_path(intent: &NavigationIntent) -> String {
    match intent {
        NavigationIntent::Root => "/".to_owned(),
        NavigationIntent::Category { category } => format!("/{}", encode(category)),
        NavigationIntent::CategoryAndSubcategory {
            category,
            subcategory,
        } => format!("/{}/{}", encode(category), encode(subcategory)),
    }
}

/// Parse a path back into the intent that produced it.
///
/// A single trailing slash is accepted.
pub fn parse_route(path: &str) -> Result<NavigationIntent, RouteError> {
    let Some(rest) = path.strip_prefix('/') else {
        return Err(RouteError::Relative(path.to_owned()));
    };
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    if rest.is_empty() {
        return Ok(NavigationIntent::Root);
    }

    let segments: Vec<&str> = rest.split('/').collect();
    match segments.as_slice() {
        [category] => Ok(NavigationIntent::Category {
            category: decode(category, path)?,
        }),
        [category, subcategory] => Ok(NavigationIntent::CategoryAndSubcategory {
            category: decode(category, path)?,
            subcategory: decode(subcategory, path)?,
        }),
        _ => Err(RouteError::TooDeep(path.to_owned())),
    }
}

/// Product filter for the listing page at a route.
#[must_use]
pub fn filter_for_route(tree: &CategoryTree, intent: &NavigationIntent) -> ProductFilter {
    match intent {
        NavigationIntent::Root => ProductFilter::Unconstrained,
        NavigationIntent::Category { category } => resolve(tree, Some(category.as_str())),
        NavigationIntent::CategoryAndSubcategory {
            category,
            subcategory,
        } => resolve_scoped(tree, category, subcategory),
    }
}
