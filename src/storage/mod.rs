//! Storage layer for the budget planner
//!
//! Holds expense records in memory, in insertion order, up to a fixed
//! capacity. Nothing is written to disk.

pub mod records;

pub use records::{RecordStore, DEFAULT_CAPACITY};
