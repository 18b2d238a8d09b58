//! Configuration module for libris
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LibrisPaths;
pub use settings::Settings;
