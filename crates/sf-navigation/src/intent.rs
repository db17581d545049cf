//! Navigation intents and the router that receives them.

use std::sync::{Arc, Mutex};

use serde::Serialize;

/// Where a terminal sidebar selection asks the router to go.
///
/// Each intent corresponds to one route shape: `/`, `/{category}`, or
/// `/{category}/{subcategory}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Storefront root (no category filter).
    Root,
    /// Top-level category listing.
    Category { category: String },
    /// Subcategory listing scoped to its parent.
    CategoryAndSubcategory {
        category: String,
        subcategory: String,
    },
}

/// Router collaborator.
///
/// Intents are fire-and-forget: no acknowledgment is awaited and nothing is
/// retried.
pub trait Router {
    /// Navigate to the target described by `intent`.
    fn navigate(&self, intent: NavigationIntent);
}

impl<R: Router + ?Sized> Router for &R {
    fn navigate(&self, intent: NavigationIntent) {
        (**self).navigate(intent);
    }
}

impl<R: Router + ?Sized> Router for Arc<R> {
    fn navigate(&self, intent: NavigationIntent) {
        (**self).navigate(intent);
    }
}

/// Router that records every intent it receives.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    intents: Mutex<Vec<NavigationIntent>>,
}

impl RecordingRouter {
    /// All intents received so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn intents(&self) -> Vec<NavigationIntent> {
        self.intents.lock().unwrap().clone()
    }

    /// Most recent intent.
    #[must_use]
    pub fn last(&self) -> Option<NavigationIntent> {
        self.intents.lock().unwrap().last().cloned()
    }
}

impl Router for RecordingRouter {
    fn navigate(&self, intent: NavigationIntent) {
        tracing::debug!(?intent, "Navigation intent received");
        self.intents.lock().unwrap().push(intent);
    }
}
