//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{audit_log_for, budgets_file_for, FintrackPaths};
pub use settings::Settings;
