//! Monthly revenue bars and a visitors sparkline.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Sparkline},
};
use vista_types::RevenuePoint;

use crate::app::App;
use crate::data;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

const BAR_WIDTH: u16 = 4;
const BAR_GAP: u16 = 1;

#[derive(Debug, Default)]
pub struct RevenueChartComponent;

impl RevenueChartComponent {
    /// Compact value label, e.g. `4.2k`.
    pub(crate) fn short_amount(amount: u64) -> String {
        if amount >= 1_000 {
            format!("{:.1}k", amount as f64 / 1_000.0)
        } else {
            amount.to_string()
        }
    }

    /// Keeps the most recent months that fit in `width` columns.
    pub(crate) fn visible_points(points: &[RevenuePoint], width: u16) -> &[RevenuePoint] {
        let fit = usize::from(width.saturating_add(BAR_GAP) / (BAR_WIDTH + BAR_GAP));
        &points[points.len().saturating_sub(fit)..]
    }
}

impl Component for RevenueChartComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let [bars_area, spark_area] = Layout::vertical([Constraint::Fill(3), Constraint::Length(4)]).areas(area);

        let block = th::block(theme, Some("Revenue"), false);
        let inner_width = block.inner(bars_area).width;
        let bar_style = Style::default().fg(theme.roles().chart_bar);
        let bars: Vec<Bar> = Self::visible_points(data::REVENUE, inner_width)
            .iter()
            .map(|point| {
                Bar::default()
                    .value(point.amount)
                    .text_value(Self::short_amount(point.amount))
                    .label(Line::from(point.month))
                    .style(bar_style)
            })
            .collect();
        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(BAR_WIDTH)
            .bar_gap(BAR_GAP)
            .value_style(th::badge_style(theme))
            .label_style(theme.text_muted_style());
        frame.render_widget(chart, bars_area);

        let sparkline = Sparkline::default()
            .block(th::block(theme, Some("Visitors · 28 days"), false))
            .data(data::VISITORS.iter().copied())
            .style(theme.accent_secondary_style());
        frame.render_widget(sparkline, spark_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::test_support::render_lines;

    #[test]
    fn short_amount_abbreviates_thousands() {
        assert_eq!(RevenueChartComponent::short_amount(950), "950");
        assert_eq!(RevenueChartComponent::short_amount(4_200), "4.2k");
    }

    #[test]
    fn narrow_charts_keep_latest_months() {
        let points = RevenueChartComponent::visible_points(data::REVENUE, 15);
        assert_eq!(points.len(), 3);
        assert_eq!(points.last().map(|point| point.month), Some("Dec"));
        assert_eq!(RevenueChartComponent::visible_points(data::REVENUE, 200).len(), 12);
    }

    #[test]
    fn widest_terminal_keeps_every_month() {
        assert_eq!(RevenueChartComponent::visible_points(data::REVENUE, u16::MAX).len(), 12);
        assert!(RevenueChartComponent::visible_points(data::REVENUE, 0).is_empty());
    }

    #[test]
    fn renders_month_labels_and_sparkline_title() {
        let mut app = test_app();
        let lines = render_lines(70, 16, |frame, area| RevenueChartComponent.render(frame, area, &mut app));
        let text = lines.join("\n");
        assert!(text.contains("Revenue"));
        assert!(text.contains("Jan"));
        assert!(text.contains("Dec"));
        assert!(text.contains("Visitors · 28 days"));
    }
}
