//! Configuration module for payables
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PayablesPaths;
pub use settings::{Settings, StorageBackend};
