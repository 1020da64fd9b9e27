//! SQLite adapter
//!
//! - [`SqliteStore`] - one read-only connection, scoped to a request
//! - `repository` - the `DashboardRepository` queries

mod repository;
mod store;

pub use store::{SqliteStore, StoreError};
