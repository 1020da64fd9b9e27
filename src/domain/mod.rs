//! Domain logic for wellatlas
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (entities, Division, status classes, Timeline)
//! - `services/` - View shaping shared by every page
//! - `ports/` - Trait definitions for the store and the clock

pub mod models;
pub mod ports;
pub mod services;
