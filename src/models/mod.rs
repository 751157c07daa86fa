//! Core data models for PES Buddy
//!
//! Plain data shared by the storage layer, the services and the
//! interactive workflows: users, expense grids, scooters and routes,
//! canteen menus and order entries.

pub mod expense;
pub mod ids;
pub mod menu;
pub mod order;
pub mod scooter;
pub mod user;

pub use expense::{ExpenseCategory, ExpenseGrid, ExpenseGridError, MAX_CATEGORIES};
pub use ids::{BookingId, OrderSessionId};
pub use menu::{Canteen, MenuItem, MAX_MENU_ITEMS};
pub use order::OrderEntry;
pub use scooter::{resolve_route, Booking, Route, ScooterUnit, Trip, ROUTES};
pub use user::{Identifier, IdentifierError, UserRecord, IDENTIFIER_LEN};
