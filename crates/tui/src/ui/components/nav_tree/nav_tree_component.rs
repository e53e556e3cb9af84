use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem},
};
use unicode_width::UnicodeWidthStr;
use vista_types::{Effect, Pane};

use super::state::{NavRow, indent};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Sidebar controller rendering [`NavTreeState`](super::NavTreeState) as an indented list.
#[derive(Debug, Default)]
pub struct NavTreeComponent;

impl NavTreeComponent {
    /// Builds the styled line for one row. Badges are right-aligned within `width`.
    pub(crate) fn row_line(row: &NavRow, theme: &dyn Theme, width: u16) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(6);
        spans.push(Span::raw(indent(row.depth)));
        let indicator = match row.indicator {
            Some(indicator) => format!("{} ", indicator.glyph()),
            None => "  ".to_string(),
        };
        spans.push(Span::styled(indicator, theme.text_muted_style()));
        spans.push(Span::styled(format!("{} ", row.icon), theme.accent_secondary_style()));

        let label_style = if row.active {
            theme.accent_emphasis_style()
        } else if row.is_parent() {
            theme.text_primary_style().add_modifier(Modifier::BOLD)
        } else {
            theme.text_primary_style()
        };
        spans.push(Span::styled(row.label, label_style));

        if let Some(badge) = row.badge {
            let used: usize = spans.iter().map(|span| span.content.width()).sum();
            let badge_text = format!(" {badge} ");
            let padding = usize::from(width).saturating_sub(used + badge_text.width()).max(1);
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(badge_text, th::badge_style(theme)));
        }
        Line::from(spans)
    }
}

impl Component for NavTreeComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.nav_tree;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => state.select_next(),
            KeyCode::Home => state.select_first(),
            KeyCode::End => state.select_last(),
            KeyCode::Right | KeyCode::Char('l') => state.expand_selected(),
            KeyCode::Left | KeyCode::Char('h') => state.collapse_selected(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                return state.activate_selected().into_iter().collect();
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = app.nav_tree.row_at(mouse.column, mouse.row) else {
                    return Vec::new();
                };
                app.nav_tree.select_index(index);
                app.nav_tree.activate_selected().into_iter().collect()
            }
            MouseEventKind::ScrollDown => {
                app.nav_tree.select_next();
                Vec::new()
            }
            MouseEventKind::ScrollUp => {
                app.nav_tree.select_previous();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.focus == Pane::Sidebar;
        let block = th::block(theme, Some("Navigation"), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items: Vec<ListItem> = app
            .nav_tree
            .rows()
            .iter()
            .map(|row| ListItem::new(Self::row_line(row, theme, inner.width)))
            .collect();

        let highlight = if focused {
            th::table_selected_style(theme)
        } else {
            theme.selection_style()
        };
        let list = List::new(items).highlight_style(highlight);
        frame.render_stateful_widget(list, inner, &mut app.nav_tree.list_state);
        app.nav_tree.last_inner_area = inner;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" ↑/↓", " Navigate "), (" Enter", " Toggle/Open "), (" ←/→", " Collapse/Expand ")],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::test_support::render_lines;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use vista_types::NavPath;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn collapsed_tree_hides_children() {
        let mut app = test_app();
        let lines = render_lines(40, 12, |frame, area| NavTreeComponent.render(frame, area, &mut app));
        let text = lines.join("\n");
        assert!(text.contains("▸ ◔ Analytics"));
        assert!(!text.contains("Overview"));
        assert!(text.contains("  ⌂ Dashboard"));
    }

    #[test]
    fn expanded_parent_shows_indented_children_and_badges() {
        let mut app = test_app();
        app.nav_tree.toggle_label("Analytics");
        let lines = render_lines(40, 12, |frame, area| NavTreeComponent.render(frame, area, &mut app));

        let parent = lines.iter().find(|line| line.contains("Analytics")).expect("parent row");
        assert!(parent.contains("▾ ◔ Analytics"));
        let child = lines.iter().find(|line| line.contains("Realtime")).expect("child row");
        assert!(child.contains("│    ◉ Realtime"));
        assert!(child.trim_end_matches('│').trim_end().ends_with("Live"));
    }

    #[test]
    fn identical_state_renders_identical_buffers() {
        let mut app = test_app();
        app.nav_tree.toggle_label("Commerce");
        let first = render_lines(40, 14, |frame, area| NavTreeComponent.render(frame, area, &mut app));
        let second = render_lines(40, 14, |frame, area| NavTreeComponent.render(frame, area, &mut app));
        assert_eq!(first, second);
    }

    #[test]
    fn enter_toggles_parents_and_opens_leaves() {
        let mut app = test_app();
        let mut component = NavTreeComponent;

        component.handle_key_events(&mut app, key(KeyCode::Down));
        assert!(component.handle_key_events(&mut app, key(KeyCode::Enter)).is_empty());
        assert!(app.nav_tree.expansion().is_expanded(&NavPath::root(1)));

        component.handle_key_events(&mut app, key(KeyCode::Down));
        let effects = component.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Navigate("Overview".into())]);
    }

    #[test]
    fn click_on_parent_row_toggles_it() {
        let mut app = test_app();
        render_lines(40, 12, |frame, area| NavTreeComponent.render(frame, area, &mut app));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        NavTreeComponent.handle_mouse_events(&mut app, click);
        assert_eq!(app.nav_tree.selected_row().map(|row| row.label), Some("Analytics"));
        assert!(app.nav_tree.expansion().is_expanded(&NavPath::root(1)));
    }
}
