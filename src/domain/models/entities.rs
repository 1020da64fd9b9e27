//! Store entities
//!
//! Plain records as read from the store. Nothing here is ever written back.

use serde::Serialize;

/// A customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    /// Customer ID
    pub id: i64,
    /// Display name
    pub name: String,
}

/// A customer with aggregate counts, as listed on the customers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSummary {
    /// Customer ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Number of distinct sites
    pub site_count: i64,
    /// Number of jobs across all sites
    pub job_count: i64,
}

/// A job site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    /// Site ID
    pub id: i64,
    /// Owning customer
    pub customer_id: i64,
    /// Display name
    pub name: String,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
}

/// A site with its job count, as listed on a customer's page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSummary {
    /// Site ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Number of jobs at the site
    pub job_count: i64,
}

/// A site's position joined with its customer's name, for map pins
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteLocation {
    /// Site ID
    pub id: i64,
    /// Site name
    pub name: String,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// Owning customer's name
    pub customer_name: String,
}

/// A job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    /// Job ID
    pub id: i64,
    /// Site the job is performed at
    pub site_id: i64,
    /// Raw division code (`D`, `P`, `A`, `E`, or anything else)
    pub division: Option<String>,
    /// Business job number
    pub job_number: Option<String>,
    /// Short description
    pub title: Option<String>,
    /// Raw status label
    pub status: Option<String>,
    /// ISO start date
    pub start_date: Option<String>,
    /// ISO end date
    pub end_date: Option<String>,
    /// Whether any attachments exist for the job
    pub has_attachments: bool,
}

/// A job joined with the names of its site and customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    /// The job itself
    pub job: Job,
    /// Name of the job's site
    pub site_name: String,
    /// Name of the site's customer
    pub customer_name: String,
}

/// A file attached to a site or a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Attachment ID
    pub id: i64,
    /// Owning site, if any
    pub site_id: Option<i64>,
    /// Owning job, if any
    pub job_id: Option<i64>,
    /// File name shown to users
    pub filename: Option<String>,
    /// Where the file can be fetched
    pub url: Option<String>,
}
