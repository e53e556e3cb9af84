use ratatui::widgets::ListState;
use vista_types::UserRecord;

/// Highlight state for the users panel.
#[derive(Debug, Clone)]
pub struct UsersState {
    records: &'static [UserRecord],
    pub list_state: ListState,
}

impl UsersState {
    pub fn new(records: &'static [UserRecord]) -> Self {
        let mut list_state = ListState::default();
        list_state.select((!records.is_empty()).then_some(0));
        Self { records, list_state }
    }

    pub fn records(&self) -> &'static [UserRecord] {
        self.records
    }

    pub fn selected(&self) -> Option<&'static UserRecord> {
        self.list_state.selected().and_then(|index| self.records.get(index))
    }

    /// Move the highlight down, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let next = self.list_state.selected().map_or(0, |index| (index + 1) % self.records.len());
        self.list_state.select(Some(next));
    }

    /// Move the highlight up, wrapping to the end.
    pub fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(0) | None => self.records.len() - 1,
            Some(index) => index - 1,
        };
        self.list_state.select(Some(previous));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::USERS;

    #[test]
    fn highlight_wraps_both_ways() {
        let mut state = UsersState::new(USERS);
        assert_eq!(state.selected().map(|user| user.name), Some("Olivia Martin"));
        state.select_previous();
        assert_eq!(state.selected().map(|user| user.name), Some("Sofia Davis"));
        state.select_next();
        assert_eq!(state.selected().map(|user| user.name), Some("Olivia Martin"));
    }

    #[test]
    fn empty_tables_have_no_highlight() {
        let mut state = UsersState::new(&[]);
        state.select_next();
        assert!(state.selected().is_none());
    }
}
