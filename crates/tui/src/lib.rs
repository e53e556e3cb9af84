//! # Vista dashboard TUI
//!
//! A terminal admin dashboard built on Ratatui: a collapsible navigation
//! sidebar next to stats tiles, a revenue chart, a users list, an orders
//! table and an upgrade card.
//!
//! ## Architecture
//!
//! Each UI element is a stateless [`Component`](ui::components::Component)
//! controller; all state lives on [`App`](app::App). The runtime routes
//! input to the focused component and applies the returned effects.

mod app;
mod data;
pub mod outline;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use vista_types::NavEntry;
use vista_util::UserPreferences;

pub use ui::components::nav_tree::{ExpansionState, Indicator, NavRow, visible_rows};
pub use ui::theme::{ThemeDefinition, catalog::all as all_themes};

/// Options for a dashboard session.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Theme id or alias overriding env and preferences for this session
    pub theme_override: Option<String>,
    pub preferences: Arc<UserPreferences>,
}

/// The navigation tree shown in the sidebar.
pub fn nav_entries() -> &'static [NavEntry] {
    data::NAV_ENTRIES
}

/// Runs the dashboard until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up, drawn to or
/// restored.
pub async fn run(options: RunOptions) -> Result<()> {
    let preferred = options.preferences.preferred_theme();
    let loaded = ui::theme::load(options.theme_override.as_deref(), preferred.as_deref());
    info!(theme = loaded.definition.id, ansi_only = loaded.ansi_only, "starting dashboard");
    let app = app::App::new(loaded, options.preferences);
    ui::runtime::run_app(app).await
}
