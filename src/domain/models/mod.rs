//! Domain models
//!
//! Core types representing the dashboard's data:
//!
//! - [`Customer`], [`Site`], [`Job`], [`Attachment`] - store entities
//! - [`Division`] - a job's business line
//! - [`StatusClass`], [`JobStatus`] - status badge class and lifecycle label
//! - [`Timeline`] - derived display span of a job

mod division;
mod entities;
mod status;
mod timeline;

pub use division::Division;
pub use entities::{
    Attachment, Customer, CustomerSummary, Job, JobListing, Site, SiteLocation, SiteSummary,
};
pub use status::{JobStatus, StatusClass};
pub use timeline::{DateError, Timeline, parse_iso_date};
