//! Configuration module for PES Buddy
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PesBuddyPaths;
pub use settings::Settings;
