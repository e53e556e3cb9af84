//! UI components: navigation tree, dashboard panels, help overlay.

pub mod component;
pub mod help;
pub mod nav_tree;
pub mod orders;
pub mod revenue_chart;
pub mod stats;
pub mod upgrade;
pub mod users;

pub use component::*;
pub use help::HelpComponent;
pub use nav_tree::NavTreeComponent;
pub use orders::OrdersComponent;
pub use revenue_chart::RevenueChartComponent;
pub use stats::StatsComponent;
pub use upgrade::UpgradeComponent;
pub use users::UsersComponent;
