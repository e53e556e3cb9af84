use super::{Ansi256Theme, Ansi256ThemeHighContrast, DraculaTheme, DraculaThemeHighContrast, NordTheme, NordThemeHighContrast, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Short description printed by `vista themes`.
    pub description: &'static str,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Indicates whether the definition represents a high-contrast variant.
    pub is_high_contrast: bool,
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes. Cycling walks this order.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        description: "High-contrast default tuned for dark terminals.",
        aliases: &["dracula"],
        is_high_contrast: false,
        is_ansi_fallback: false,
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "dracula_hc",
        label: "Dracula High Contrast",
        description: "Sharper borders and brighter copy for dim displays.",
        aliases: &["dracula_hc", "dracula-high-contrast", "dracula-hc", "draculahc"],
        is_high_contrast: true,
        is_ansi_fallback: false,
        factory: || Box::new(DraculaThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        description: "Calm polar blues with aurora semantic accents.",
        aliases: &["nord"],
        is_high_contrast: false,
        is_ansi_fallback: false,
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "nord_hc",
        label: "Nord High Contrast",
        description: "Nord surfaces with stronger borders and body text.",
        aliases: &["nord_hc", "nord-high-contrast", "nord-hc", "nordhc"],
        is_high_contrast: true,
        is_ansi_fallback: false,
        factory: || Box::new(NordThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        description: "Indexed fallback for 8-bit terminals.",
        aliases: &["ansi256", "ansi", "256"],
        is_high_contrast: false,
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
    ThemeDefinition {
        id: "ansi256_hc",
        label: "ANSI 256 High Contrast",
        description: "ANSI fallback with brighter borders and text.",
        aliases: &["ansi256_hc", "ansi256-high-contrast", "ansi256-hc", "ansi256hc"],
        is_high_contrast: true,
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256ThemeHighContrast::new()),
    },
];

/// Iterate over all available definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by canonical id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.trim().to_ascii_lowercase();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(&normalized) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(&normalized))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.is_ansi_fallback)
        .unwrap_or(&THEME_DEFINITIONS[0])
}

/// The definition following `current_id` among those with the same color
/// capability, wrapping at the end. Unknown ids restart at the first match.
pub fn next_after(current_id: &str, ansi_only: bool) -> &'static ThemeDefinition {
    let candidates: Vec<&'static ThemeDefinition> = THEME_DEFINITIONS
        .iter()
        .filter(|definition| definition.is_ansi_fallback == ansi_only)
        .collect();
    let Some(first) = candidates.first().copied() else {
        return default_truecolor();
    };
    candidates
        .iter()
        .position(|definition| definition.id.eq_ignore_ascii_case(current_id))
        .and_then(|index| candidates.get((index + 1) % candidates.len()).copied())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_aliases_case_insensitively() {
        assert_eq!(resolve("NORD-HC").map(|d| d.id), Some("nord_hc"));
        assert_eq!(resolve(" dracula ").map(|d| d.id), Some("dracula"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn cycling_stays_within_capability() {
        assert_eq!(next_after("dracula", false).id, "dracula_hc");
        assert_eq!(next_after("nord_hc", false).id, "dracula");
        assert_eq!(next_after("ansi256", true).id, "ansi256_hc");
        assert_eq!(next_after("ansi256_hc", true).id, "ansi256");
        assert_eq!(next_after("unknown", false).id, "dracula");
    }

    #[test]
    fn defaults_match_capability() {
        assert!(!default_truecolor().is_ansi_fallback);
        assert!(default_ansi().is_ansi_fallback);
    }
}
