//! Page handlers
//!
//! These handlers contain the per-page query and shaping logic and are
//! HTTP-agnostic. They take a repository and the page context and return
//! `Result<View, PageError>`.

use chrono::NaiveDate;

use crate::domain::models::{Customer, Site, Timeline};
use crate::domain::ports::{Clock, DashboardRepository};
use crate::domain::services::{JobRow, Pin, group_by_start_date};

use super::error::PageError;
use super::views::{
    CalendarView, CustomerDetailView, CustomersView, HomeView, JobDetailView, SiteDetailView,
};

/// Number of jobs listed on a customer's page
pub const CUSTOMER_RECENT_JOBS: usize = 15;

/// Process-wide inputs shared by every page
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    /// Key for the map tile service
    pub maptiler_key: &'a str,
    /// Date the home page treats as "today"
    pub reference_date: NaiveDate,
    /// Source of the real current date (timelines)
    pub clock: &'a dyn Clock,
}

impl std::fmt::Debug for PageContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageContext")
            .field("reference_date", &self.reference_date)
            .field("today", &self.clock.today())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Home page: one pin per site plus jobs starting on the reference date
pub fn home(repo: &dyn DashboardRepository, ctx: &PageContext<'_>) -> Result<HomeView, PageError> {
    let sites = repo.site_locations()?;

    let mut pins = Vec::with_capacity(sites.len());
    for site in &sites {
        let first_job = repo.first_job_at_site(site.id)?;
        pins.push(Pin::new(site, first_job.as_ref()));
    }

    let todays_jobs = repo
        .jobs_starting_on(ctx.reference_date)?
        .iter()
        .map(JobRow::from_listing)
        .collect();

    Ok(HomeView {
        maptiler_key: ctx.maptiler_key.to_string(),
        pins,
        reference_date: ctx.reference_date,
        todays_jobs,
    })
}

// =============================================================================
// CUSTOMERS
// =============================================================================

/// Customer list with site and job counts
pub fn customers(repo: &dyn DashboardRepository) -> Result<CustomersView, PageError> {
    Ok(CustomersView {
        customers: repo.customer_summaries()?,
    })
}

/// Customer detail with sites and the most recent jobs
pub fn customer_detail(
    repo: &dyn DashboardRepository,
    customer_id: i64,
) -> Result<CustomerDetailView, PageError> {
    let customer = repo
        .customer(customer_id)?
        .ok_or_else(|| PageError::not_found("Customer not found"))?;

    let sites = repo.customer_sites(customer_id)?;
    let jobs = repo
        .recent_customer_jobs(customer_id, CUSTOMER_RECENT_JOBS)?
        .iter()
        .map(JobRow::from_listing)
        .collect();

    Ok(CustomerDetailView {
        customer,
        sites,
        jobs,
    })
}

// =============================================================================
// SITES
// =============================================================================

/// Site detail with its customer, jobs and attachments
pub fn site_detail(
    repo: &dyn DashboardRepository,
    site_id: i64,
) -> Result<SiteDetailView, PageError> {
    let site = repo
        .site(site_id)?
        .ok_or_else(|| PageError::not_found("Site not found"))?;
    let customer = owning_customer(repo, &site)?;

    let jobs = repo.site_jobs(site_id)?.iter().map(JobRow::from_job).collect();
    let attachments = repo.site_attachments(site_id)?;

    Ok(SiteDetailView {
        site,
        customer,
        jobs,
        attachments,
    })
}

// =============================================================================
// JOBS
// =============================================================================

/// Job detail with its site, customer, attachments and timeline
pub fn job_detail(
    repo: &dyn DashboardRepository,
    ctx: &PageContext<'_>,
    job_id: i64,
) -> Result<JobDetailView, PageError> {
    let job = repo
        .job(job_id)?
        .ok_or_else(|| PageError::not_found("Job not found"))?;

    // Dangling references are data faults, not missing pages
    let site = repo.site(job.site_id)?.ok_or_else(|| {
        PageError::internal(format!("job {} references missing site {}", job.id, job.site_id))
    })?;
    let customer = owning_customer(repo, &site)?;
    let attachments = repo.job_attachments(job_id)?;

    let timeline = Timeline::derive(
        job.start_date.as_deref(),
        job.status.as_deref(),
        job.end_date.as_deref(),
        ctx.clock.today(),
    )?;

    Ok(JobDetailView {
        job: JobRow::from_job(&job),
        site,
        customer,
        attachments,
        timeline,
    })
}

// =============================================================================
// CALENDAR
// =============================================================================

/// All dated jobs grouped by start date
pub fn calendar(repo: &dyn DashboardRepository) -> Result<CalendarView, PageError> {
    let listings = repo.dated_jobs()?;
    Ok(CalendarView {
        days: group_by_start_date(&listings),
    })
}

fn owning_customer(repo: &dyn DashboardRepository, site: &Site) -> Result<Customer, PageError> {
    repo.customer(site.customer_id)?.ok_or_else(|| {
        PageError::internal(format!(
            "site {} references missing customer {}",
            site.id, site.customer_id
        ))
    })
}
