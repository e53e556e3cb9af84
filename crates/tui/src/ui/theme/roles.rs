//! Semantic color roles and the style builders every palette shares.

use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Colors a palette assigns to each dashboard role.
///
/// Renderers never pick raw colors; they ask the active [`Theme`] for a
/// role so that cycling palettes restyles every panel at once.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    /// Fill behind the whole screen
    pub background: Color,
    /// Panel fill
    pub surface: Color,
    /// Header rows and the odd zebra stripe
    pub surface_muted: Color,
    /// Borders of unfocused panels
    pub border: Color,

    pub text: Color,
    /// Panel titles, roles, invoice ids
    pub text_secondary: Color,
    /// Hints, emails, chart labels
    pub text_muted: Color,

    /// Active nav entry, key hints, call-to-action button
    pub accent_primary: Color,
    /// Nav icons, badges, the visitors sparkline
    pub accent_secondary: Color,

    /// Positive deltas, paid orders, active users
    pub success: Color,
    /// Pending orders, invited users
    pub warning: Color,
    /// Negative deltas, refunds, suspended users
    pub error: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    /// Border of the focused pane
    pub focus: Color,
    /// Fill behind the help overlay, darker than `background`
    pub modal_bg: Color,

    /// Revenue bars
    pub chart_bar: Color,
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

/// A palette plus the styles derived from it.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        fg(self.roles().text)
    }

    fn text_secondary_style(&self) -> Style {
        fg(self.roles().text_secondary)
    }

    fn text_muted_style(&self) -> Style {
        fg(self.roles().text_muted)
    }

    /// Focused panes swap the border color for the focus color.
    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        fg(if focused { roles.focus } else { roles.border })
    }

    fn selection_style(&self) -> Style {
        let roles = self.roles();
        fg(roles.selection_fg).bg(roles.selection_bg)
    }

    fn modal_background_style(&self) -> Style {
        Style::default().bg(self.roles().modal_bg)
    }

    fn status_success(&self) -> Style {
        fg(self.roles().success)
    }

    fn status_warning(&self) -> Style {
        fg(self.roles().warning)
    }

    fn status_error(&self) -> Style {
        fg(self.roles().error)
    }

    fn accent_primary_style(&self) -> Style {
        fg(self.roles().accent_primary)
    }

    fn accent_secondary_style(&self) -> Style {
        fg(self.roles().accent_secondary)
    }

    /// Bold primary accent, used for the active nav entry and hint keys.
    fn accent_emphasis_style(&self) -> Style {
        self.accent_primary_style().add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{DraculaTheme, NordTheme};

    #[test]
    fn focused_border_uses_focus_color() {
        let theme = NordTheme::new();
        assert_eq!(theme.border_style(true).fg, Some(theme.roles().focus));
        assert_eq!(theme.border_style(false).fg, Some(theme.roles().border));
    }

    #[test]
    fn emphasis_is_bold_primary_accent() {
        let theme = DraculaTheme::new();
        let style = theme.accent_emphasis_style();
        assert_eq!(style.fg, Some(theme.roles().accent_primary));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
