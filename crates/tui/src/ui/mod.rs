//! UI rendering for the dashboard: components, layout, theme and runtime.

pub mod components;
pub mod main_component;
pub mod runtime;
#[cfg(test)]
pub(crate) mod test_support;
pub mod theme;
pub mod utils;
