use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};
use vista_types::{Effect, Pane, UserRecord, UserStatus};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

#[derive(Debug, Default)]
pub struct UsersComponent;

impl UsersComponent {
    fn status_style(status: UserStatus, theme: &dyn Theme) -> Style {
        match status {
            UserStatus::Active => theme.status_success(),
            UserStatus::Invited => theme.status_warning(),
            UserStatus::Suspended => theme.status_error(),
        }
    }

    fn user_item(user: &UserRecord, theme: &dyn Theme) -> ListItem<'static> {
        let avatar = format!(" {:<2} ", user.initials());
        let header = Line::from(vec![
            Span::styled(avatar, th::badge_style(theme)),
            Span::raw(" "),
            Span::styled(user.name, theme.text_primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", user.role), theme.text_secondary_style()),
        ]);
        let detail = Line::from(vec![
            Span::raw("     "),
            Span::styled(user.email, theme.text_muted_style()),
            Span::raw("  "),
            Span::styled(format!("● {}", user.status.label()), Self::status_style(user.status, theme)),
        ]);
        ListItem::new(vec![header, detail])
    }
}

impl Component for UsersComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.users.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.users.select_next(),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.focus == Pane::Users;
        let block = th::block(theme, Some("Recent users"), focused);

        let items: Vec<ListItem> = app.users.records().iter().map(|user| Self::user_item(user, theme)).collect();
        let mut list = List::new(items).block(block);
        if focused {
            list = list.highlight_style(theme.selection_style());
        }
        frame.render_stateful_widget(list, area, &mut app.users.list_state);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Highlight user ")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::test_support::render_lines;

    #[test]
    fn renders_initials_and_status() {
        let mut app = test_app();
        let lines = render_lines(60, 12, |frame, area| UsersComponent.render(frame, area, &mut app));
        let text = lines.join("\n");
        assert!(text.contains(" OM  Olivia Martin  Owner"));
        assert!(text.contains("● Invited"));
    }

    #[test]
    fn arrow_keys_move_highlight() {
        let mut app = test_app();
        UsersComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Down));
        assert_eq!(app.users.selected().map(|user| user.name), Some("Jackson Lee"));
    }
}
