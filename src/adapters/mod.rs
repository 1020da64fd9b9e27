//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `sqlite/` - The SQLite-backed `DashboardRepository`

pub mod sqlite;

pub use sqlite::{SqliteStore, StoreError};
