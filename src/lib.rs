//! wellatlas - A read-only operations dashboard for field-services work
//!
//! This library provides the domain model (customers, sites, jobs,
//! attachments), the job timeline derivation, the SQLite-backed read
//! repository, the page handlers and the HTTP routing used by the
//! `wellatlas` binary.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod domain;
pub mod pages;
pub mod paths;
pub mod server;
