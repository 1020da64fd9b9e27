//! View models for the dashboard pages
//!
//! Each view is an askama template over already-shaped data. Handlers build
//! them; the server renders them.

use askama::Template;
use chrono::NaiveDate;

use crate::domain::models::{Attachment, Customer, CustomerSummary, Site, SiteSummary, Timeline};
use crate::domain::services::{CalendarDays, JobRow, Pin};

/// Home page: site map and the reference day's jobs
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct HomeView {
    /// Key for the map tile service (may be empty)
    pub maptiler_key: String,
    /// One pin per site
    pub pins: Vec<Pin>,
    /// Date treated as "today" for the jobs list
    pub reference_date: NaiveDate,
    /// Jobs starting on the reference date
    pub todays_jobs: Vec<JobRow>,
}

impl HomeView {
    /// Pins as a JSON array safe to inline in a `<script>` element
    #[must_use]
    pub fn pins_json(&self) -> String {
        script_json(&self.pins, "[]")
    }

    /// Map key as a JSON string literal safe to inline in a `<script>` element
    #[must_use]
    pub fn maptiler_key_json(&self) -> String {
        script_json(&self.maptiler_key, "\"\"")
    }
}

fn script_json<T: serde::Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| fallback.to_string())
        .replace("</", "<\\/")
}

/// Customer list with aggregate counts
#[derive(Debug, Template)]
#[template(path = "customers.html")]
pub struct CustomersView {
    /// Customers ordered by name
    pub customers: Vec<CustomerSummary>,
}

/// One customer with its sites and recent jobs
#[derive(Debug, Template)]
#[template(path = "customer_detail.html")]
pub struct CustomerDetailView {
    /// The customer
    pub customer: Customer,
    /// The customer's sites, with job counts
    pub sites: Vec<SiteSummary>,
    /// Most recent jobs, newest first
    pub jobs: Vec<JobRow>,
}

/// One site with its customer, jobs and attachments
#[derive(Debug, Template)]
#[template(path = "site_detail.html")]
pub struct SiteDetailView {
    /// The site
    pub site: Site,
    /// The site's customer
    pub customer: Customer,
    /// All jobs at the site, newest first
    pub jobs: Vec<JobRow>,
    /// Attachments filed against the site
    pub attachments: Vec<Attachment>,
}

/// One job with its context and timeline
#[derive(Debug, Template)]
#[template(path = "job_detail.html")]
pub struct JobDetailView {
    /// The job
    pub job: JobRow,
    /// The job's site
    pub site: Site,
    /// The site's customer
    pub customer: Customer,
    /// Attachments filed against the job
    pub attachments: Vec<Attachment>,
    /// Derived display span, absent for unscheduled jobs
    pub timeline: Option<Timeline>,
}

/// All dated jobs grouped by start date
#[derive(Debug, Template)]
#[template(path = "calendar.html")]
pub struct CalendarView {
    /// Job rows keyed by start date
    pub days: CalendarDays,
}
