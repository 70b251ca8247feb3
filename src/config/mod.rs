//! Configuration module for the budget planner
//!
//! This module provides configuration management including:
//! - Ledger sizing (capacity, field length limit)
//! - Display and logging preferences

pub mod settings;

pub use settings::Settings;
