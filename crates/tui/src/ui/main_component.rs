//! Root view composing the dashboard.
//!
//! `MainView` owns one controller per panel, routes input by the focused
//! pane and lays the panels out around the navigation sidebar.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use vista_types::{Effect, Msg, Pane};

use super::components::{
    Component, HelpComponent, NavTreeComponent, OrdersComponent, RevenueChartComponent, StatsComponent, UpgradeComponent,
    UsersComponent,
};
use super::theme::theme_helpers as th;
use super::utils::contains;
use crate::app::App;

const SIDEBAR_WIDTH: u16 = 32;
const STATS_HEIGHT: u16 = 4;
const UPGRADE_WIDTH: u16 = 34;

/// Screen regions for every panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DashboardAreas {
    pub sidebar: Rect,
    pub stats: Rect,
    pub revenue: Rect,
    pub users: Rect,
    pub orders: Rect,
    /// Absent once the upgrade card is dismissed
    pub upgrade: Option<Rect>,
    pub hints: Rect,
}

/// Splits the screen: sidebar on the left, hints on the bottom row, and the
/// panels stacked as stats / (revenue | users) / (orders | upgrade).
pub(crate) fn dashboard_layout(area: Rect, upgrade_visible: bool) -> DashboardAreas {
    let [body, hints] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    let [sidebar, main] = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)]).areas(body);
    let [stats, middle, bottom] =
        Layout::vertical([Constraint::Length(STATS_HEIGHT), Constraint::Fill(1), Constraint::Fill(1)]).areas(main);
    let [revenue, users] = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(middle);

    let (orders, upgrade) = if upgrade_visible {
        let [orders, upgrade] = Layout::horizontal([Constraint::Fill(1), Constraint::Length(UPGRADE_WIDTH)]).areas(bottom);
        (orders, Some(upgrade))
    } else {
        (bottom, None)
    };

    DashboardAreas {
        sidebar,
        stats,
        revenue,
        users,
        orders,
        upgrade,
        hints,
    }
}

#[derive(Debug, Default)]
pub struct MainView {
    nav_tree: NavTreeComponent,
    stats: StatsComponent,
    revenue: RevenueChartComponent,
    users: UsersComponent,
    orders: OrdersComponent,
    upgrade: UpgradeComponent,
    help: HelpComponent,
    /// Areas from the most recent draw, used for mouse hit testing
    areas: DashboardAreas,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_component(&mut self, focus: Pane) -> &mut dyn Component {
        match focus {
            Pane::Sidebar => &mut self.nav_tree,
            Pane::Users => &mut self.users,
            Pane::Orders => &mut self.orders,
        }
    }

    fn pane_at(&self, column: u16, row: u16) -> Option<Pane> {
        [
            (self.areas.sidebar, Pane::Sidebar),
            (self.areas.users, Pane::Users),
            (self.areas.orders, Pane::Orders),
        ]
        .into_iter()
        .find(|(area, _)| contains(*area, column, row))
        .map(|(_, pane)| pane)
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        app.update(msg);
        Vec::new()
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Terminals with keyboard enhancement also report releases and repeats.
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        if control && key.code == KeyCode::Char('c') {
            return vec![Effect::Quit];
        }
        if app.show_help {
            return self.help.handle_key_events(app, key);
        }

        match key.code {
            KeyCode::Char('q') => vec![Effect::Quit],
            KeyCode::Char('t') if control => vec![Effect::CycleTheme],
            KeyCode::Char('?') => vec![Effect::ToggleHelp],
            KeyCode::Char('x') => {
                app.upgrade.dismiss();
                Vec::new()
            }
            KeyCode::Tab => {
                app.focus_next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus_previous();
                Vec::new()
            }
            _ => self.focused_component(app.focus).handle_key_events(app, key),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.show_help {
            return Vec::new();
        }
        let Some(pane) = self.pane_at(mouse.column, mouse.row) else {
            return Vec::new();
        };
        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) && app.focus != pane {
            app.focus = pane;
        }
        match pane {
            Pane::Sidebar => self.nav_tree.handle_mouse_events(app, mouse),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Block::default().style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let areas = dashboard_layout(area, app.upgrade.is_visible());
        self.nav_tree.render(frame, areas.sidebar, app);
        self.stats.render(frame, areas.stats, app);
        self.revenue.render(frame, areas.revenue, app);
        self.users.render(frame, areas.users, app);
        self.orders.render(frame, areas.orders, app);
        if let Some(upgrade_area) = areas.upgrade {
            self.upgrade.render(frame, upgrade_area, app);
        }

        let hints_widget = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, areas.hints);
        self.areas = areas;

        if app.show_help {
            frame.render_widget(Block::default().style(app.ctx.theme.modal_background_style()).dim(), area);
            self.help.render(frame, area, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", theme.text_muted_style())];
        if app.show_help {
            hint_spans.extend(th::build_hint_spans(theme, &[(" Esc", " Close help ")]));
            return hint_spans;
        }

        let focused = match app.focus {
            Pane::Sidebar => self.nav_tree.get_hint_spans(app),
            Pane::Users => self.users.get_hint_spans(app),
            Pane::Orders => self.orders.get_hint_spans(app),
        };
        hint_spans.extend(focused);
        hint_spans.extend(th::build_hint_spans(
            theme,
            &[(" Tab", " Focus "), (" Ctrl+T", " Theme "), (" ?", " Help "), (" q", " Quit ")],
        ));
        if let Some(page) = app.last_opened.as_deref() {
            hint_spans.push(Span::styled(" · Opened: ", theme.text_muted_style()));
            hint_spans.push(Span::styled(page.to_string(), theme.accent_primary_style()));
        }
        hint_spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::test_support::render_lines;
    use vista_types::NavPath;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn dismissing_upgrade_gives_orders_full_width() {
        let area = Rect::new(0, 0, 140, 40);
        let with_card = dashboard_layout(area, true);
        let without_card = dashboard_layout(area, false);
        assert_eq!(with_card.upgrade.map(|rect| rect.width), Some(UPGRADE_WIDTH));
        assert!(without_card.upgrade.is_none());
        assert_eq!(without_card.orders.width, with_card.orders.width + UPGRADE_WIDTH);
    }

    #[test]
    fn layout_reserves_sidebar_and_hint_row() {
        let areas = dashboard_layout(Rect::new(0, 0, 140, 40), true);
        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.hints, Rect::new(0, 39, 140, 1));
        assert_eq!(areas.stats.height, STATS_HEIGHT);
    }

    #[test]
    fn global_keys_map_to_effects() {
        let mut app = test_app();
        let mut view = MainView::new();
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))), vec![Effect::Quit]);
        assert_eq!(
            view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            vec![Effect::CycleTheme]
        );
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('?'))), vec![Effect::ToggleHelp]);
    }

    #[test]
    fn tab_moves_focus_and_routes_keys() {
        let mut app = test_app();
        let mut view = MainView::new();
        view.handle_key_events(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Pane::Users);
        view.handle_key_events(&mut app, key(KeyCode::Down));
        assert_eq!(app.users.selected().map(|user| user.name), Some("Jackson Lee"));
        assert_eq!(app.nav_tree.selected_index(), Some(0));
        view.handle_key_events(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.focus, Pane::Sidebar);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut app = test_app();
        let mut view = MainView::new();
        view.handle_key_events(&mut app, key(KeyCode::Down));
        view.handle_key_events(&mut app, key(KeyCode::Enter));
        assert!(app.nav_tree.expansion().is_expanded(&NavPath::root(1)));

        let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(view.handle_key_events(&mut app, release).is_empty());
        assert!(app.nav_tree.expansion().is_expanded(&NavPath::root(1)));

        let tab_release = KeyEvent::new_with_kind(KeyCode::Tab, KeyModifiers::NONE, KeyEventKind::Release);
        view.handle_key_events(&mut app, tab_release);
        assert_eq!(app.focus, Pane::Sidebar);
    }

    #[test]
    fn open_help_swallows_keys_until_closed() {
        let mut app = test_app();
        let mut view = MainView::new();
        app.apply_effect(Effect::ToggleHelp);
        assert!(view.handle_key_events(&mut app, key(KeyCode::Tab)).is_empty());
        assert_eq!(app.focus, Pane::Sidebar);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Esc)), vec![Effect::ToggleHelp]);
    }

    #[test]
    fn full_render_shows_every_panel() {
        let mut app = test_app();
        let mut view = MainView::new();
        let lines = render_lines(140, 40, |frame, area| view.render(frame, area, &mut app));
        let text = lines.join("\n");
        for title in ["Navigation", "Total revenue", "Revenue", "Recent users", "Recent orders", "Upgrade to Pro"] {
            assert!(text.contains(title), "missing {title}");
        }
        assert!(lines.last().is_some_and(|line| line.starts_with("Hints:")));

        view.handle_key_events(&mut app, key(KeyCode::Char('x')));
        let lines = render_lines(140, 40, |frame, area| view.render(frame, area, &mut app));
        assert!(!lines.join("\n").contains("Upgrade to Pro"));
    }

    #[test]
    fn clicking_a_panel_focuses_it() {
        let mut app = test_app();
        let mut view = MainView::new();
        render_lines(140, 40, |frame, area| view.render(frame, area, &mut app));

        let users = view.areas.users;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: users.x + 2,
            row: users.y + 2,
            modifiers: KeyModifiers::NONE,
        };
        view.handle_mouse_events(&mut app, click);
        assert_eq!(app.focus, Pane::Users);
    }
}
