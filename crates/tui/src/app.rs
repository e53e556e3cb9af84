//! Application state for the dashboard.
//!
//! `App` owns every piece of UI state: the shared context (theme and
//! preferences), the focused pane and one state struct per component.
//! Nothing lives in process-wide statics.

use std::sync::Arc;

use tracing::{debug, info, warn};
use vista_types::{Effect, Msg, Pane};
use vista_util::UserPreferences;

use crate::data;
use crate::ui::components::nav_tree::NavTreeState;
use crate::ui::components::orders::OrdersState;
use crate::ui::components::upgrade::UpgradeState;
use crate::ui::components::users::UsersState;
use crate::ui::theme::{LoadedTheme, Theme, ThemeDefinition, catalog};

/// Cross-cutting context shared by all components.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active palette
    pub theme: Box<dyn Theme>,
    /// Canonical id of the active palette
    pub active_theme_id: &'static str,
    /// Whether the terminal only supports the ANSI palettes
    pub ansi_only: bool,
    /// Persisted user preferences
    pub preferences: Arc<UserPreferences>,
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    /// Pane receiving keyboard input
    pub focus: Pane,
    pub nav_tree: NavTreeState,
    pub users: UsersState,
    pub orders: OrdersState,
    pub upgrade: UpgradeState,
    /// Whether the help overlay is open
    pub show_help: bool,
    /// Label of the last activated navigation leaf
    pub last_opened: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(loaded_theme: LoadedTheme, preferences: Arc<UserPreferences>) -> Self {
        let LoadedTheme {
            definition,
            theme,
            ansi_only,
        } = loaded_theme;
        Self {
            ctx: SharedCtx {
                theme,
                active_theme_id: definition.id,
                ansi_only,
                preferences,
            },
            focus: Pane::default(),
            nav_tree: NavTreeState::new(data::NAV_ENTRIES),
            users: UsersState::new(data::USERS),
            orders: OrdersState::new(data::ORDERS),
            upgrade: UpgradeState::new(data::UPGRADE_OFFER),
            show_help: false,
            last_opened: None,
            should_quit: false,
        }
    }

    /// Applies application-wide messages before components see them.
    pub fn update(&mut self, msg: &Msg) {
        match msg {
            Msg::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
        }
    }

    /// Executes a side effect reported by a component.
    pub fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Navigate(label) => {
                info!(page = %label, "opened navigation entry");
                self.last_opened = Some(label);
            }
            Effect::CycleTheme => self.cycle_theme(),
            Effect::ToggleHelp => self.show_help = !self.show_help,
            Effect::Quit => self.should_quit = true,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Switches to the next palette and persists the choice.
    ///
    /// A failed write is logged; the new palette stays active for the session.
    pub fn cycle_theme(&mut self) {
        let next = catalog::next_after(self.ctx.active_theme_id, self.ctx.ansi_only);
        self.apply_theme(next);
        if let Err(error) = self.ctx.preferences.set_preferred_theme(Some(next.id.to_string())) {
            warn!(error = %error, theme = next.id, "Failed to persist theme preference");
        }
    }

    fn apply_theme(&mut self, definition: &'static ThemeDefinition) {
        info!(theme = definition.id, "switching theme");
        self.ctx.theme = definition.build();
        self.ctx.active_theme_id = definition.id;
    }
}
