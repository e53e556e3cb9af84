//! Recent orders table.

mod orders_component;
mod state;

pub use orders_component::OrdersComponent;
pub use state::OrdersState;
