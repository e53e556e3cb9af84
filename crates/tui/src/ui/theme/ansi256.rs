//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Approximates the Dracula palette with indexed colors so the dashboard
//! stays legible inside macOS Terminal and other 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

fn build_ansi256_roles() -> ThemeRoles {
    ThemeRoles {
        background: Color::Indexed(236),
        surface: Color::Indexed(236),
        surface_muted: Color::Indexed(239),
        border: Color::Indexed(239),

        text: Color::Indexed(255),
        text_secondary: Color::Indexed(250),
        text_muted: Color::Indexed(247),

        accent_primary: Color::Indexed(212),
        accent_secondary: Color::Indexed(117),

        success: Color::Indexed(84),
        warning: Color::Indexed(215),
        error: Color::Indexed(203),

        selection_bg: Color::Indexed(239),
        selection_fg: Color::Indexed(255),
        focus: Color::Indexed(117),
        modal_bg: Color::Indexed(232),

        chart_bar: Color::Indexed(141),
    }
}

/// ANSI 256-color approximation of the Dracula palette.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: build_ansi256_roles(),
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast variant for ANSI terminals.
#[derive(Debug, Clone)]
pub struct Ansi256ThemeHighContrast {
    roles: ThemeRoles,
}

impl Ansi256ThemeHighContrast {
    pub fn new() -> Self {
        let mut roles = build_ansi256_roles();
        roles.border = Color::Indexed(141);
        roles.text_secondary = Color::Indexed(117);
        roles.text_muted = Color::Indexed(250);
        roles.modal_bg = Color::Indexed(235);
        roles.chart_bar = Color::Indexed(212);
        Self { roles }
    }
}

impl Theme for Ansi256ThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
