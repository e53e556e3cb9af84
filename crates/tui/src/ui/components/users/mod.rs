//! Recent users panel.

mod state;
mod users_component;

pub use state::UsersState;
pub use users_component::UsersComponent;
