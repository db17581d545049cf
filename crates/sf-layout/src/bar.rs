//! Category bar recompute state.
//!
//! The rendering layer owns one [`CategoryBar`] and feeds it every resize or
//! content-change signal. Each signal recomputes the visible count from the
//! latest inputs; there is no queue, so the last signal wins.

use crate::overflow::compute_visible_count;

/// Visible-count state for the category bar.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBar {
    overflow_control_width: f64,
    item_widths: Vec<f64>,
    container_width: Option<f64>,
    visible_count: usize,
}

impl CategoryBar {
    /// Create an empty bar with the measured width of the overflow control.
    #[must_use]
    pub fn new(overflow_control_width: f64) -> Self {
        Self {
            overflow_control_width,
            item_widths: Vec::new(),
            container_width: None,
            visible_count: 0,
        }
    }

    /// Replace the measured item widths (a different category list was loaded).
    pub fn set_items(&mut self, item_widths: Vec<f64>) -> usize {
        self.item_widths = item_widths;
        self.recompute()
    }

    /// Record a new container width (viewport resize).
    pub fn resize(&mut self, container_width: f64) -> usize {
        self.container_width = Some(container_width);
        self.recompute()
    }

    /// Update the overflow control width (its label or font changed).
    pub fn set_overflow_control_width(&mut self, width: f64) -> usize {
        self.overflow_control_width = width;
        self.recompute()
    }

    fn recompute(&mut self) -> usize {
        // Until the container is measured every item is shown
        self.visible_count = match self.container_width {
            Some(container_width) => compute_visible_count(
                &self.item_widths,
                container_width,
                self.overflow_control_width,
            ),
            None => self.item_widths.len(),
        };

        tracing::debug!(
            visible = self.visible_count,
            items = self.item_widths.len(),
            container_width = self.container_width,
            "Category bar recomputed"
        );

        self.visible_count
    }

    /// Number of leading items shown inline.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_widths.len()
    }

    /// Whether any item is collapsed into the overflow control.
    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.visible_count < self.item_widths.len()
    }

    /// Whether the item at `index` is collapsed into the overflow control.
    #[must_use]
    pub fn is_hidden(&self, index: usize) -> bool {
        index >= self.visible_count && index < self.item_widths.len()
    }

    /// Whether the overflow control shows the active-category highlight.
    ///
    /// The highlight stands in for the active category when it is collapsed,
    /// and is suppressed while the pointer hovers the bar.
    #[must_use]
    pub fn view_all_highlighted(&self, active_index: Option<usize>, hovered: bool) -> bool {
        !hovered && active_index.is_some_and(|index| self.is_hidden(index))
    }
}
