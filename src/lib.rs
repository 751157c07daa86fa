//! PES Buddy - terminal companion for campus life
//!
//! Bundles three small tools behind a register/login gate: a weekly
//! expense tracker, a scooter dispatch desk and a multi-canteen food
//! ordering flow.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, expenses, scooters, menus, orders)
//! - `storage`: Flat-file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Text formatting for terminal output
//! - `prompt`: Validated console input
//! - `workflows`: Interactive menus driving the services
//! - `cli`: Command handlers behind the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use pesbuddy::config::{paths::PesBuddyPaths, settings::Settings};
//! use pesbuddy::storage::Storage;
//!
//! let paths = PesBuddyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod prompt;
pub mod services;
pub mod storage;
pub mod workflows;

pub use error::PesBuddyError;
