//! Rendering helpers for component tests.

use ratatui::{Frame, Terminal, backend::TestBackend, layout::Rect};

/// Draws into a `width` x `height` test terminal and returns each row as text.
pub(crate) fn render_lines(width: u16, height: u16, draw: impl FnOnce(&mut Frame, Rect)) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    let mut draw = Some(draw);
    terminal
        .draw(|frame| {
            let area = frame.area();
            if let Some(draw) = draw.take() {
                draw(frame, area);
            }
        })
        .expect("draw");
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}
