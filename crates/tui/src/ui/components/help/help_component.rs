//! Key binding overlay toggled with `?`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Clear, Paragraph, Wrap},
};
use vista_types::Effect;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::centered_rect;

/// Key column and description for every binding, grouped by section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Tab / Shift+Tab", "Move focus between panes"),
            ("Ctrl+T", "Cycle theme"),
            ("x", "Dismiss the upgrade card"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
    (
        "Navigation",
        &[
            ("↑ ↓ / k j", "Move the cursor"),
            ("Home / End", "Jump to first or last row"),
            ("Enter / Space", "Toggle a section or open a page"),
            ("→ / l", "Expand section"),
            ("← / h", "Collapse section or go to parent"),
            ("Click", "Select and activate a row"),
        ],
    ),
    ("Users and orders", &[("↑ ↓ / k j", "Move the highlight")]),
];

const KEY_COLUMN: usize = 18;

#[derive(Debug, Default)]
pub struct HelpComponent;

impl HelpComponent {
    pub(crate) fn help_text(theme: &dyn Theme) -> Text<'static> {
        let mut lines = Vec::new();
        for (index, (section, bindings)) in SECTIONS.iter().enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::styled(
                section.to_uppercase(),
                theme.text_secondary_style().add_modifier(Modifier::BOLD),
            ));
            for (key, description) in bindings.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<KEY_COLUMN$}"), theme.accent_emphasis_style()),
                    Span::styled(*description, theme.text_primary_style()),
                ]));
            }
        }
        Text::from(lines)
    }
}

impl Component for HelpComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => vec![Effect::ToggleHelp],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let area = centered_rect(60, 70, rect);
        let block = th::block(theme, Some("Help  [Esc] Close"), true).style(theme.modal_background_style());

        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(Self::help_text(theme))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::test_support::render_lines;

    #[test]
    fn overlay_lists_bindings() {
        let mut app = test_app();
        let lines = render_lines(100, 40, |frame, area| HelpComponent.render(frame, area, &mut app));
        let text = lines.join("\n");
        assert!(text.contains("Help  [Esc] Close"));
        assert!(text.contains("Ctrl+T            Cycle theme"));
        assert!(text.contains("NAVIGATION"));
    }

    #[test]
    fn escape_requests_close() {
        let mut app = test_app();
        let effects = HelpComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Esc));
        assert_eq!(effects, vec![Effect::ToggleHelp]);
    }
}
