//! Display formatting for terminal output
//!
//! Each function renders a block of text for one workflow step. Nothing
//! here reads input or touches state.

pub mod dispatch;
pub mod expense;
pub mod order;
pub mod stats;

pub use dispatch::{format_available_units, format_booking, format_routes};
pub use expense::format_expense_report;
pub use order::{format_menu, format_order_summary};
pub use stats::format_activity_stats;
