//! Shopping-cart search pipeline.
//!
//! Turns `(catalog, search state)` into a filtered view grouped by category.
//! The pipeline is a pure function; [`MemoizedSearch`] is an optional layer a
//! caller can put in front of it to skip recomputation for an unchanged state.

pub mod memo;
pub mod pipeline;
pub mod state;
pub mod view;

pub use memo::MemoizedSearch;
pub use pipeline::{filter, group_by_category, matches, search};
pub use state::SearchState;
pub use view::{CategoryGroup, GroupedView};
