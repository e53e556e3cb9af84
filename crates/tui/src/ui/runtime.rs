//! Runtime: event loop and input routing for the TUI.
//!
//! - Owns the terminal lifecycle (raw mode, alternate screen, mouse capture).
//! - A blocking input task forwards `crossterm` events over a Tokio channel.
//! - Keys and mouse events are routed through [`MainView`]; the returned
//!   `Effect`s are applied to `App` before the next frame.
//! - A frame is drawn only after something changed.
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{signal, sync::mpsc};
use tracing::{debug, info, warn};
use vista_types::{Effect, Msg};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

type Backend = CrosstermBackend<Stdout>;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
const MOUSE_MOVE_THROTTLE: Duration = Duration::from_millis(16);

/// Spawn a blocking task that reads terminal input and forwards it.
///
/// `poll()` and `read()` stay on the same OS thread; the task ends once the
/// receiving side is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        let mut last_mouse_move = Instant::now();
        while !sender.is_closed() {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!(error = %error, "Failed to poll terminal input");
                    break;
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(error) => {
                    warn!(error = %error, "Failed to read terminal input");
                    break;
                }
            };
            let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
            if is_mouse_move {
                if last_mouse_move.elapsed() < MOUSE_MOVE_THROTTLE {
                    continue;
                }
                last_mouse_move = Instant::now();
            }
            if sender.blocking_send(event).is_err() {
                break;
            }
        }
        debug!("input thread stopped");
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
///
/// Raw mode is switched back off when any later step fails.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)).context("create terminal"));
    restore_on_error(terminal, || {
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })
}

fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal
        .draw(|frame| main_view.render(frame, frame.area(), app))
        .context("draw frame")?;
    Ok(())
}

/// Routes one input event to the view and returns the requested effects.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop and restores the terminal even when the loop fails.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app).await;
    let cleanup = cleanup_terminal(&mut terminal);
    info!(theme = app.ctx.active_theme_id, "dashboard closed");
    outcome.and(cleanup)
}

async fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();

    if let Ok((width, height)) = crossterm::terminal::size() {
        app.update(&Msg::Resize(width, height));
    }
    render(terminal, app, &mut main_view)?;

    loop {
        let next_event = tokio::select! {
            maybe_event = input_receiver.recv() => maybe_event,
            _ = signal::ctrl_c() => None,
        };
        // A closed input channel or Ctrl+C shuts down cleanly.
        let Some(event) = next_event else {
            break;
        };

        let needs_render = changes_view(&event);
        for effect in handle_input_event(app, &mut main_view, event) {
            app.apply_effect(effect);
        }

        if app.should_quit {
            break;
        }
        if needs_render {
            render(terminal, app, &mut main_view)?;
        }
    }
    Ok(())
}

/// Pointer motion, key releases and focus changes never alter what is drawn.
fn changes_view(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind == KeyEventKind::Press,
        Event::Mouse(mouse) => mouse.kind != MouseEventKind::Moved,
        Event::FocusGained | Event::FocusLost => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    #[test]
    fn pointer_motion_skips_redraw() {
        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!changes_view(&moved));
        assert!(!changes_view(&Event::FocusLost));
        assert!(changes_view(&Event::Key(KeyEvent::from(KeyCode::Down))));
        assert!(changes_view(&Event::Resize(80, 24)));
        let release = KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!changes_view(&Event::Key(release)));
    }

    #[test]
    fn failed_setup_restores_terminal() {
        let mut restored = false;
        let failed: Result<()> = restore_on_error(Err(anyhow::anyhow!("no tty")), || restored = true);
        assert!(failed.is_err());
        assert!(restored);

        let mut restored = false;
        let ok = restore_on_error(Ok(7), || restored = true);
        assert_eq!(ok.ok(), Some(7));
        assert!(!restored);
    }
}
