//! Row shaping - turns store records into display rows
//!
//! Every list of jobs on every page goes through [`JobRow`], so badges and
//! labels cannot drift between list and detail views.

use serde::Serialize;

use crate::domain::models::{Division, Job, JobListing, SiteLocation, StatusClass};

/// Border color shared by every map pin
pub const PIN_BORDER: &str = "#ffffff";

/// A job prepared for display in a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRow {
    /// Job ID (used for links)
    pub id: i64,
    /// Raw division code as stored
    pub division: String,
    /// Division badge class
    pub division_class: &'static str,
    /// Business job number
    pub job_number: String,
    /// Short description
    pub title: String,
    /// Site name, when the listing carries it
    pub site_name: Option<String>,
    /// Customer name, when the listing carries it
    pub customer_name: Option<String>,
    /// Raw status label as stored
    pub status: String,
    /// Status badge class
    pub status_class: &'static str,
    /// ISO start date, empty when unscheduled
    pub start_date: String,
    /// ISO end date, empty when open
    pub end_date: String,
    /// Whether any attachments exist for the job
    pub has_attachments: bool,
}

impl JobRow {
    /// Shape a bare job (no site or customer context)
    #[must_use]
    pub fn from_job(job: &Job) -> Self {
        Self {
            id: job.id,
            division: job.division.clone().unwrap_or_default(),
            division_class: Division::from_code(job.division.as_deref().unwrap_or_default())
                .css_class(),
            job_number: job.job_number.clone().unwrap_or_default(),
            title: job.title.clone().unwrap_or_default(),
            site_name: None,
            customer_name: None,
            status: job.status.clone().unwrap_or_default(),
            status_class: StatusClass::from_status(job.status.as_deref()).as_str(),
            start_date: job.start_date.clone().unwrap_or_default(),
            end_date: job.end_date.clone().unwrap_or_default(),
            has_attachments: job.has_attachments,
        }
    }

    /// Shape a job joined with its site and customer names
    #[must_use]
    pub fn from_listing(listing: &JobListing) -> Self {
        Self {
            site_name: Some(listing.site_name.clone()),
            customer_name: Some(listing.customer_name.clone()),
            ..Self::from_job(&listing.job)
        }
    }
}

/// A map marker for one site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pin {
    /// Latitude in degrees
    pub lat: Option<f64>,
    /// Longitude in degrees
    pub lng: Option<f64>,
    /// Customer name
    pub customer: String,
    /// Site name
    pub site: String,
    /// `"<division> <job number>"` of the site's first job, or empty
    pub division_job: String,
    /// Fill color from the first job's division
    pub fill: &'static str,
    /// Border color
    pub border: &'static str,
}

impl Pin {
    /// Build a pin from a site and the first job recorded there
    ///
    /// Sites with no job are drawn as drilling with an empty label.
    #[must_use]
    pub fn new(site: &SiteLocation, first_job: Option<&Job>) -> Self {
        let (division_job, fill) = first_job.map_or_else(
            || (String::new(), Division::Drilling.pin_fill()),
            |job| {
                let code = job.division.as_deref().unwrap_or_default();
                let number = job.job_number.as_deref().unwrap_or_default();
                (
                    format!("{code} {number}"),
                    Division::from_code(code).pin_fill(),
                )
            },
        );

        Self {
            lat: site.latitude,
            lng: site.longitude,
            customer: site.customer_name.clone(),
            site: site.name.clone(),
            division_job,
            fill,
            border: PIN_BORDER,
        }
    }
}
