use std::collections::BTreeSet;

use ratatui::{layout::Rect, widgets::ListState};
use serde::Serialize;
use tracing::debug;
use vista_types::{Effect, NavEntry, NavPath, find_path_by_label};

/// The set of node paths currently shown expanded.
///
/// Created empty, so every node starts collapsed. Only [`toggle`](Self::toggle)
/// mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<NavPath>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `path` if present, inserts it otherwise.
    pub fn toggle(&mut self, path: &NavPath) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.clone());
        }
    }

    pub fn is_expanded(&self, path: &NavPath) -> bool {
        self.expanded.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }
}

/// Expand/collapse indicator shown on rows that have children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Expanded,
    Collapsed,
}

impl Indicator {
    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Expanded => "▾",
            Indicator::Collapsed => "▸",
        }
    }
}

/// One visible row produced by walking the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavRow {
    pub path: NavPath,
    pub depth: usize,
    pub label: &'static str,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub active: bool,
    /// `None` for leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<Indicator>,
}

impl NavRow {
    pub fn is_parent(&self) -> bool {
        self.indicator.is_some()
    }

    pub fn is_expanded(&self) -> bool {
        self.indicator == Some(Indicator::Expanded)
    }
}

/// Leading whitespace for a row at `depth`.
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Flattens the tree into the rows currently visible under `expansion`.
///
/// The output depends only on the two inputs.
pub fn visible_rows(entries: &'static [NavEntry], expansion: &ExpansionState) -> Vec<NavRow> {
    let mut rows = Vec::new();
    render_entries(entries, None, 0, expansion, &mut rows);
    rows
}

fn render_entries(
    entries: &'static [NavEntry],
    parent: Option<&NavPath>,
    depth: usize,
    expansion: &ExpansionState,
    rows: &mut Vec<NavRow>,
) {
    for (index, entry) in entries.iter().enumerate() {
        let path = match parent {
            Some(parent) => parent.child(index),
            None => NavPath::root(index),
        };
        let expanded = expansion.is_expanded(&path);
        let indicator = match (entry.is_leaf(), expanded) {
            (true, _) => None,
            (false, true) => Some(Indicator::Expanded),
            (false, false) => Some(Indicator::Collapsed),
        };
        rows.push(NavRow {
            path: path.clone(),
            depth,
            label: entry.label,
            icon: entry.icon,
            badge: entry.badge,
            active: entry.active,
            indicator,
        });
        if indicator == Some(Indicator::Expanded) {
            render_entries(entry.children, Some(&path), depth + 1, expansion, rows);
        }
    }
}

/// State owned by one navigation tree instance: expansion set, cursor and
/// the geometry of the last render for mouse hit testing.
#[derive(Debug, Clone)]
pub struct NavTreeState {
    entries: &'static [NavEntry],
    expansion: ExpansionState,
    rows: Vec<NavRow>,
    selected: Option<NavPath>,
    pub list_state: ListState,
    /// Inner area of the last render, used to map mouse clicks to rows.
    pub last_inner_area: Rect,
}

impl NavTreeState {
    pub fn new(entries: &'static [NavEntry]) -> Self {
        let expansion = ExpansionState::new();
        let rows = visible_rows(entries, &expansion);
        let selected = rows.first().map(|row| row.path.clone());
        let mut state = Self {
            entries,
            expansion,
            rows,
            selected,
            list_state: ListState::default(),
            last_inner_area: Rect::default(),
        };
        state.sync_list_selection();
        state
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn rows(&self) -> &[NavRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        self.rows.iter().position(|row| &row.path == selected)
    }

    pub fn selected_row(&self) -> Option<&NavRow> {
        self.selected_index().and_then(|index| self.rows.get(index))
    }

    /// Flips the expansion of `path` and refreshes the visible rows.
    pub fn toggle_expanded(&mut self, path: &NavPath) {
        self.expansion.toggle(path);
        debug!(path = %path, expanded = self.expansion.is_expanded(path), "toggled navigation entry");
        self.rebuild_rows();
    }

    /// Toggles the first entry labelled `label` in document order. Unknown labels are ignored.
    pub fn toggle_label(&mut self, label: &str) {
        if let Some(path) = find_path_by_label(self.entries, label) {
            self.toggle_expanded(&path);
        }
    }

    pub fn select_index(&mut self, index: usize) {
        if let Some(row) = self.rows.get(index) {
            self.selected = Some(row.path.clone());
            self.sync_list_selection();
        }
    }

    /// Moves the cursor down, stopping at the last row.
    pub fn select_next(&mut self) {
        let next = self.selected_index().map_or(0, |index| (index + 1).min(self.rows.len().saturating_sub(1)));
        self.select_index(next);
    }

    /// Moves the cursor up, stopping at the first row.
    pub fn select_previous(&mut self) {
        let previous = self.selected_index().map_or(0, |index| index.saturating_sub(1));
        self.select_index(previous);
    }

    pub fn select_first(&mut self) {
        self.select_index(0);
    }

    pub fn select_last(&mut self) {
        self.select_index(self.rows.len().saturating_sub(1));
    }

    /// Enter/Space: toggles parents, reports leaves as navigation targets.
    pub fn activate_selected(&mut self) -> Option<Effect> {
        let row = self.selected_row()?.clone();
        if row.is_parent() {
            self.toggle_expanded(&row.path);
            None
        } else {
            Some(Effect::Navigate(row.label.to_string()))
        }
    }

    /// Right arrow: opens a collapsed parent.
    pub fn expand_selected(&mut self) {
        if let Some(row) = self.selected_row().cloned()
            && row.indicator == Some(Indicator::Collapsed)
        {
            self.toggle_expanded(&row.path);
        }
    }

    /// Left arrow: closes an expanded parent, otherwise jumps to the parent row.
    pub fn collapse_selected(&mut self) {
        let Some(row) = self.selected_row().cloned() else {
            return;
        };
        if row.is_expanded() {
            self.toggle_expanded(&row.path);
        } else if let Some(parent) = row.path.parent() {
            self.selected = Some(parent);
            self.sync_list_selection();
        }
    }

    /// Maps a terminal position to a visible row index using the last render geometry.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_inner_area;
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }
        let index = self.list_state.offset() + usize::from(row - area.y);
        (index < self.rows.len()).then_some(index)
    }

    fn rebuild_rows(&mut self) {
        self.rows = visible_rows(self.entries, &self.expansion);
        self.selected = match self.selected.take() {
            Some(path) if self.rows.iter().any(|row| row.path == path) => Some(path),
            Some(path) => path
                .ancestors()
                .find(|ancestor| self.rows.iter().any(|row| &row.path == ancestor))
                .or_else(|| self.rows.first().map(|row| row.path.clone())),
            None => self.rows.first().map(|row| row.path.clone()),
        };
        self.sync_list_selection();
    }

    fn sync_list_selection(&mut self) {
        let index = self.selected_index();
        self.list_state.select(index);
    }
}
