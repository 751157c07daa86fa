//! Service layer for PES Buddy
//!
//! Business rules behind each workflow: the login gate, expense
//! aggregation, scooter dispatch and canteen ordering. Services return
//! explicit outcome values; the workflows decide what to print.

pub mod dispatch;
pub mod expense;
pub mod ordering;
pub mod session;
pub mod stats;

pub use dispatch::{BookingOutcome, DispatchLedger};
pub use expense::{summarize, ExpenseReport};
pub use ordering::{load_menu, MenuLoad, OrderLedger, OrderOutcome, OrderSummary, ORDER_CAPACITY};
pub use session::{LoginOutcome, RegisterOutcome, SessionGate};
pub use stats::ActivityStats;
