//! Adaptive overflow layout for the storefront category bar.
//!
//! The category bar shows as many top-level categories as fit beside the
//! "View All" control; the rest collapse into it. Widths are measured by the
//! rendering layer and passed in, so everything here is plain arithmetic.
//!
//! - [`compute_visible_count`]: greedy prefix fit
//! - [`CategoryBar`]: recompute-on-signal owner with the active-item highlight
//! - [`ResizeDebouncer`]: optional coalescing of bursty resize signals
//!
//! # Example
//!
//! ```
//! use sf_layout::compute_visible_count;
//!
//! // 250px container, 50px "View All" control: 200px for items
//! assert_eq!(compute_visible_count(&[100.0, 100.0, 100.0], 250.0, 50.0), 2);
//! ```

mod bar;
mod debouncer;
mod overflow;

pub use bar::CategoryBar;
pub use debouncer::ResizeDebouncer;
pub use overflow::compute_visible_count;
