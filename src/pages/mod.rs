//! HTTP-agnostic page layer
//!
//! This module provides the dashboard's page handlers and the view models
//! they produce. Any HTTP server implementation can drive it.
//!
//! ## Design
//!
//! - **Handlers take ports**: a `DashboardRepository` and a `PageContext`
//! - **Views are templates**: every successful page is an askama view
//! - **Errors carry HTTP semantics**: `PageError` knows its status code

mod error;
mod handlers;
mod views;

pub use error::{ErrorCode, PageError};
pub use handlers::{
    CUSTOMER_RECENT_JOBS, PageContext, calendar, customer_detail, customers, home, job_detail,
    site_detail,
};
pub use views::{
    CalendarView, CustomerDetailView, CustomersView, HomeView, JobDetailView, SiteDetailView,
};
