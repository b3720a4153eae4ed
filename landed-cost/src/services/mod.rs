//! Services module for landed-cost.

pub mod allocation;
pub mod costing;
pub mod freight;
pub mod limits;
pub mod metrics;

pub use allocation::build_report;
pub use costing::{allocate_costs, calculate_item_cost, item_weights};
pub use freight::{apportion_freight, apportion_with_policy, effective_policy};
pub use limits::{month_window, monthly_spend, LimitService, LimitViolation, SpendFilter};
pub use metrics::{get_metrics, init_metrics};
