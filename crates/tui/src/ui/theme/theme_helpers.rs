use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for table headers: secondary text, bold.
pub fn table_header_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.text_secondary_style().add_modifier(Modifier::BOLD)
}

/// Background style for the entire header row to avoid gaps between columns.
pub fn table_header_row_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default()
        .bg(theme.roles().surface_muted)
        .fg(theme.roles().text_secondary)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let dr = (r as f32 * f).round().clamp(0.0, 255.0) as u8;
            let dg = (g as f32 * f).round().clamp(0.0, 255.0) as u8;
            let db = (b as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(dr, dg, db)
        }
        other => other,
    }
}

/// Move an RGB color toward white by `amount` (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn lighten_rgb(color: Color, amount: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let a = amount.clamp(0.0, 1.0);
            let lift = |channel: u8| (channel as f32 + (255.0 - channel as f32) * a).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}

/// Returns alternating row styles for zebra striping (even/odd),
/// using slightly darker variants of the surface tones.
pub fn table_row_styles<T: Theme + ?Sized>(theme: &T) -> (Style, Style) {
    let ThemeRoles {
        surface,
        surface_muted,
        text,
        ..
    } = *theme.roles();
    let even = Style::default().bg(darken_rgb(surface, 0.60)).fg(text);
    let odd = Style::default().bg(darken_rgb(surface_muted, 0.60)).fg(text);
    (even, odd)
}

/// Row style for a given row index, alternating between the zebra tones.
pub fn table_row_style<T: Theme + ?Sized>(theme: &T, row_index: usize) -> Style {
    let (even, odd) = table_row_styles(theme);
    if row_index % 2 == 0 { even } else { odd }
}

/// Style for a selected row.
pub fn table_selected_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.selection_style().add_modifier(Modifier::BOLD)
}

/// Badge/tag style (filled accent, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { accent_secondary, .. } = *theme.roles();
    Style::default().bg(accent_secondary).fg(Color::Black)
}

/// Primary button style (filled accent background).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        accent_primary, background, ..
    } = *theme.roles();
    Style::default()
        .bg(accent_primary)
        .fg(background)
        .add_modifier(Modifier::BOLD)
}

/// Builds `key description` pairs for the hints bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::NordTheme;

    #[test]
    fn color_math_ignores_indexed_colors() {
        assert_eq!(darken_rgb(Color::Indexed(12), 0.5), Color::Indexed(12));
        assert_eq!(lighten_rgb(Color::Indexed(12), 0.5), Color::Indexed(12));
    }

    #[test]
    fn color_math_scales_channels() {
        assert_eq!(darken_rgb(Color::Rgb(100, 200, 50), 0.5), Color::Rgb(50, 100, 25));
        assert_eq!(lighten_rgb(Color::Rgb(0, 255, 55), 0.5), Color::Rgb(128, 255, 155));
    }

    #[test]
    fn zebra_rows_alternate() {
        let theme = NordTheme::new();
        assert_eq!(table_row_style(&theme, 0), table_row_style(&theme, 2));
        assert_ne!(table_row_style(&theme, 0), table_row_style(&theme, 1));
    }

    #[test]
    fn hint_spans_pair_keys_with_descriptions() {
        let theme = NordTheme::new();
        let spans = build_hint_spans(&theme, &[(" Tab", " Focus "), (" q", " Quit ")]);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].content, " Tab");
        assert_eq!(spans[3].content, " Quit ");
    }
}
