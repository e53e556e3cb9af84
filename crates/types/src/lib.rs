//! Shared type definitions for the Vista dashboard.
//!
//! The navigation model lives in [`nav`], the panel records in
//! [`dashboard`]. Messages and effects flow between the runtime loop and
//! the UI components.

pub mod dashboard;
pub mod nav;

pub use dashboard::{OrderRecord, OrderStatus, RevenuePoint, StatTile, UpgradeOffer, UserRecord, UserStatus, format_currency};
pub use nav::{NavEntry, NavPath, find_path_by_label, parent_paths};

/// Application-level messages delivered to components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A leaf navigation entry was activated
    Navigate(String),
    /// Switch to the next theme in the catalog and persist the choice
    CycleTheme,
    /// Show or hide the help overlay
    ToggleHelp,
    /// Leave the application
    Quit,
}

/// Focusable regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Sidebar,
    Users,
    Orders,
}

impl Pane {
    const ORDER: [Pane; 3] = [Pane::Sidebar, Pane::Users, Pane::Orders];

    /// Next pane in tab order, wrapping at the end.
    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|pane| *pane == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    /// Previous pane in tab order, wrapping at the start.
    pub fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|pane| *pane == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_cycles_in_both_directions() {
        assert_eq!(Pane::Sidebar.next(), Pane::Users);
        assert_eq!(Pane::Orders.next(), Pane::Sidebar);
        assert_eq!(Pane::Sidebar.previous(), Pane::Orders);
        assert_eq!(Pane::Users.previous(), Pane::Sidebar);
    }
}
