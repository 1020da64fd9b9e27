//! Dashboard repository port
//!
//! Defines every read the dashboard performs against the store.

use chrono::NaiveDate;

use super::super::models::{
    Attachment, Customer, CustomerSummary, Job, JobListing, Site, SiteLocation, SiteSummary,
};

/// Read-only access to customers, sites, jobs and attachments
///
/// Implementations run parameterized queries against a relational store.
/// Lookups by ID return `Ok(None)` when no record matches; `Err` is
/// reserved for store faults.
pub trait DashboardRepository {
    /// All sites with their customer's name
    fn site_locations(&self) -> anyhow::Result<Vec<SiteLocation>>;

    /// The earliest-inserted job at a site
    fn first_job_at_site(&self, site_id: i64) -> anyhow::Result<Option<Job>>;

    /// Jobs whose start date is exactly `date`
    fn jobs_starting_on(&self, date: NaiveDate) -> anyhow::Result<Vec<JobListing>>;

    /// Every customer with site and job counts, ordered by name
    fn customer_summaries(&self) -> anyhow::Result<Vec<CustomerSummary>>;

    /// Find a customer by ID
    fn customer(&self, id: i64) -> anyhow::Result<Option<Customer>>;

    /// A customer's sites with job counts, ordered by name
    fn customer_sites(&self, customer_id: i64) -> anyhow::Result<Vec<SiteSummary>>;

    /// A customer's most recent jobs by start date, newest first
    fn recent_customer_jobs(
        &self,
        customer_id: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<JobListing>>;

    /// Find a site by ID
    fn site(&self, id: i64) -> anyhow::Result<Option<Site>>;

    /// All jobs at a site, newest start date first
    fn site_jobs(&self, site_id: i64) -> anyhow::Result<Vec<Job>>;

    /// Attachments filed against a site
    fn site_attachments(&self, site_id: i64) -> anyhow::Result<Vec<Attachment>>;

    /// Find a job by ID
    fn job(&self, id: i64) -> anyhow::Result<Option<Job>>;

    /// Attachments filed against a job
    fn job_attachments(&self, job_id: i64) -> anyhow::Result<Vec<Attachment>>;

    /// Every job with a start date, ordered by start date
    fn dated_jobs(&self) -> anyhow::Result<Vec<JobListing>>;
}
