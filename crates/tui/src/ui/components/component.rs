//! Component system for the dashboard.
//!
//! Components are self-contained UI elements. Their state lives on
//! [`App`](crate::app::App) so that each piece of UI state has exactly one
//! owner; the component itself is a stateless controller that handles
//! events, reports side effects and renders.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use vista_types::{Effect, Msg};

use crate::app::App;

/// A UI component with event handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: the runtime routes key and mouse events to the
///    component that owns the focused pane.
/// 2. **Messages**: application-wide messages (e.g. resize) reach every
///    component through `handle_message`.
/// 3. **Rendering**: `render` draws into the provided area. Implementations
///    should only mutate render bookkeeping (list offsets, hit areas).
pub(crate) trait Component {
    /// Handle an application-level message.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that land inside this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hints bar while the component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
