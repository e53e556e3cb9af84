//! Theme styling for the dashboard.
//!
//! Defines the color palettes (Dracula, Nord), an ANSI 256-color fallback,
//! semantic theme roles, and helper builders for Ratatui widgets and
//! styles. Prefer these helpers over hard-coding colors.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::{Ansi256Theme, Ansi256ThemeHighContrast};
pub use catalog::ThemeDefinition;
pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use nord::{NordTheme, NordThemeHighContrast};
pub use roles::Theme;

/// Theme plus metadata describing how it was selected.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
    pub ansi_only: bool,
}

impl LoadedTheme {
    pub fn from_definition(definition: &'static ThemeDefinition, ansi_only: bool) -> Self {
        Self {
            definition,
            theme: definition.build(),
            ansi_only,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme.
///
/// Precedence: ANSI-only terminals always get an ANSI palette (honoring an
/// explicit ANSI choice), then the explicit override (CLI flag), then
/// `TUI_THEME`, then the persisted preference, then the default.
pub fn load(explicit: Option<&str>, preferred: Option<&str>) -> LoadedTheme {
    let capability = detect_color_capability();
    if matches!(capability, ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; restricting themes to the fallback palettes");
        let definition = explicit
            .and_then(catalog::resolve)
            .filter(|definition| definition.is_ansi_fallback)
            .unwrap_or_else(catalog::default_ansi);
        return LoadedTheme::from_definition(definition, true);
    }

    let env_choice = env::var("TUI_THEME").ok();
    let candidates = [explicit, env_choice.as_deref(), preferred];
    let definition = candidates
        .into_iter()
        .flatten()
        .find_map(catalog::resolve)
        .unwrap_or_else(catalog::default_truecolor);
    LoadedTheme::from_definition(definition, false)
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    if env::var("TUI_FORCE_TRUECOLOR")
        .ok()
        .map(|value| is_truthy(value.trim()))
        .unwrap_or(false)
    {
        return ColorCapability::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_choice_beats_env_and_preference() {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("truecolor")), ("TUI_THEME", Some("nord"))], || {
            let loaded = load(Some("dracula_hc"), Some("nord_hc"));
            assert_eq!(loaded.definition.id, "dracula_hc");
            assert!(!loaded.ansi_only);
        });
    }

    #[test]
    fn env_beats_preference() {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("truecolor")), ("TUI_THEME", Some("nord"))], || {
            assert_eq!(load(None, Some("dracula_hc")).definition.id, "nord");
        });
    }

    #[test]
    fn unknown_names_fall_through_to_preference() {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("24bit")), ("TUI_THEME", Some("sepia"))], || {
            assert_eq!(load(Some("bogus"), Some("nord_hc")).definition.id, "nord_hc");
        });
    }

    #[test]
    fn ansi_terminals_force_fallback_palette() {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("256")), ("TUI_THEME", None)], || {
            let loaded = load(Some("nord"), Some("dracula"));
            assert_eq!(loaded.definition.id, "ansi256");
            assert!(loaded.ansi_only);
            assert_eq!(load(Some("ansi256_hc"), None).definition.id, "ansi256_hc");
        });
    }
}
