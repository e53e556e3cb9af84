use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Row, Table},
};
use vista_types::{Effect, OrderStatus, Pane, format_currency};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(9),
    Constraint::Fill(2),
    Constraint::Fill(3),
    Constraint::Length(11),
    Constraint::Length(9),
];

#[derive(Debug, Default)]
pub struct OrdersComponent;

impl OrdersComponent {
    fn status_style(status: OrderStatus, theme: &dyn Theme) -> Style {
        match status {
            OrderStatus::Paid => theme.status_success(),
            OrderStatus::Pending => theme.status_warning(),
            OrderStatus::Refunded => theme.status_error(),
        }
    }
}

impl Component for OrdersComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.orders.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.orders.select_next(),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.focus == Pane::Orders;
        let title = format!("Recent orders · {}", format_currency(app.orders.total_cents()));
        let block = th::block(theme, Some(title.as_str()), focused);

        let header_style = th::table_header_style(theme);
        let header = Row::new(vec![
            Cell::from(Span::styled("Invoice", header_style)),
            Cell::from(Span::styled("Customer", header_style)),
            Cell::from(Span::styled("Product", header_style)),
            Cell::from(Line::styled("Amount", header_style).alignment(Alignment::Right)),
            Cell::from(Span::styled("Status", header_style)),
        ])
        .style(th::table_header_row_style(theme));

        let rows = app.orders.records().iter().enumerate().map(|(index, order)| {
            Row::new(vec![
                Cell::from(Span::styled(order.id, theme.text_secondary_style())),
                Cell::from(order.customer),
                Cell::from(Span::styled(order.product, theme.text_muted_style())),
                Cell::from(Line::from(format_currency(order.amount_cents)).alignment(Alignment::Right)),
                Cell::from(Span::styled(order.status.label(), Self::status_style(order.status, theme))),
            ])
            .style(th::table_row_style(theme, index))
        });

        let mut table = Table::new(rows, COLUMN_WIDTHS).header(header).block(block).column_spacing(1);
        if focused {
            table = table.row_highlight_style(th::table_selected_style(theme));
        }
        frame.render_stateful_widget(table, area, &mut app.orders.table_state);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Highlight order ")])
    }
}
