//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between domain logic and the outside
//! world: the relational store and the wall clock.
//!
//! Implementations live in the `adapters` module (store) or next to the
//! trait (clocks).
//!
//! ## Design Principle
//!
//! Page handlers depend only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Seeded stores and frozen clocks in tests
//! - **Clarity**: Clear boundaries between layers

mod clock;
mod dashboard_repo;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard_repo::DashboardRepository;
