//! Collapsible navigation tree shown in the sidebar.
//!
//! The tree data is a static [`NavEntry`](vista_types::NavEntry) slice.
//! [`NavTreeState`] owns the expansion set and cursor for one tree instance;
//! [`visible_rows`] is the pure walk that decides which rows are shown, and
//! [`NavTreeComponent`] turns those rows into styled list items.

mod nav_tree_component;
mod state;

pub use nav_tree_component::NavTreeComponent;
pub use state::{ExpansionState, Indicator, NavRow, NavTreeState, indent, visible_rows};
