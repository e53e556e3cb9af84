use ratatui::widgets::TableState;
use vista_types::OrderRecord;

/// Highlight state for the orders table.
///
/// Unlike the users list the highlight clamps at both ends.
#[derive(Debug, Clone)]
pub struct OrdersState {
    records: &'static [OrderRecord],
    pub table_state: TableState,
}

impl OrdersState {
    pub fn new(records: &'static [OrderRecord]) -> Self {
        let mut table_state = TableState::default();
        table_state.select((!records.is_empty()).then_some(0));
        Self { records, table_state }
    }

    pub fn records(&self) -> &'static [OrderRecord] {
        self.records
    }

    pub fn selected(&self) -> Option<&'static OrderRecord> {
        self.table_state.selected().and_then(|index| self.records.get(index))
    }

    pub fn select_next(&mut self) {
        let Some(last) = self.records.len().checked_sub(1) else {
            return;
        };
        let next = self.table_state.selected().map_or(0, |index| (index + 1).min(last));
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let previous = self.table_state.selected().map_or(0, |index| index.saturating_sub(1));
        self.table_state.select(Some(previous));
    }

    /// Sum of all order amounts in cents.
    pub fn total_cents(&self) -> u64 {
        self.records.iter().map(|order| order.amount_cents).sum()
    }
}
