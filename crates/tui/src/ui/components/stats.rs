//! Headline metric tiles.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vista_types::StatTile;

use crate::app::App;
use crate::data;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

#[derive(Debug, Default)]
pub struct StatsComponent;

impl StatsComponent {
    /// Trend line such as `▲ 20.1% from last month`.
    pub(crate) fn delta_line(tile: &StatTile, theme: &dyn Theme) -> Line<'static> {
        let (arrow, style): (&str, Style) = if tile.delta_percent < 0.0 {
            ("▼", theme.status_error())
        } else {
            ("▲", theme.status_success())
        };
        Line::from(vec![
            Span::styled(format!("{arrow} {:.1}%", tile.delta_percent.abs()), style),
            Span::styled(" from last month", theme.text_muted_style()),
        ])
    }

    fn render_tile(frame: &mut Frame, area: Rect, tile: &StatTile, theme: &dyn Theme) {
        let block = th::block(theme, Some(tile.title), false);
        let lines = vec![
            Line::from(Span::styled(tile.value, theme.text_primary_style().add_modifier(Modifier::BOLD))),
            Self::delta_line(tile, theme),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for StatsComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let tiles = data::STATS;
        if tiles.is_empty() {
            return;
        }
        let columns = Layout::horizontal(tiles.iter().map(|_| Constraint::Fill(1))).split(area);
        for (tile, column) in tiles.iter().zip(columns.iter()) {
            Self::render_tile(frame, *column, tile, theme);
        }
    }
}
