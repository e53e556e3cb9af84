//! Dismissible upgrade call-to-action card.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tracing::debug;
use vista_types::UpgradeOffer;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Clone)]
pub struct UpgradeState {
    offer: UpgradeOffer,
    visible: bool,
}

impl UpgradeState {
    pub fn new(offer: UpgradeOffer) -> Self {
        Self { offer, visible: true }
    }

    pub fn offer(&self) -> &UpgradeOffer {
        &self.offer
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hides the card for the rest of the session.
    pub fn dismiss(&mut self) {
        if self.visible {
            debug!("upgrade card dismissed");
        }
        self.visible = false;
    }
}

#[derive(Debug, Default)]
pub struct UpgradeComponent;

impl Component for UpgradeComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        if !app.upgrade.is_visible() {
            return;
        }
        let theme = &*app.ctx.theme;
        let offer = app.upgrade.offer();
        let block = th::block(theme, Some(offer.title), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, button_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        let body = Paragraph::new(offer.body)
            .style(theme.text_secondary_style())
            .wrap(Wrap { trim: true });
        frame.render_widget(body, body_area);

        let button = Line::from(vec![
            Span::styled(format!(" {} ", offer.cta), th::button_primary_style(theme)),
            Span::styled("  x ", theme.accent_emphasis_style().add_modifier(Modifier::BOLD)),
            Span::styled("dismiss", theme.text_muted_style()),
        ]);
        frame.render_widget(Paragraph::new(button), button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::test_support::render_lines;

    #[test]
    fn visible_card_shows_call_to_action() {
        let mut app = test_app();
        let lines = render_lines(40, 8, |frame, area| UpgradeComponent.render(frame, area, &mut app));
        let text = lines.join("\n");
        assert!(text.contains("Upgrade to Pro"));
        assert!(text.contains(" Upgrade now   x dismiss"));
    }

    #[test]
    fn dismissed_card_draws_nothing() {
        let mut app = test_app();
        app.upgrade.dismiss();
        let lines = render_lines(40, 8, |frame, area| UpgradeComponent.render(frame, area, &mut app));
        assert!(lines.iter().all(|line| line.trim().is_empty()));
    }
}
