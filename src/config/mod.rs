//! Configuration module for runway
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Day-window parsing

pub mod paths;
pub mod settings;
pub mod windows;

pub use paths::RunwayPaths;
pub use settings::Settings;
pub use windows::{parse_windows, validate_windows};
