//! SQLite-backed dashboard repository
//!
//! Implements the `DashboardRepository` port trait with parameterized joins
//! over the `customers`, `sites`, `jobs` and `attachments` tables.

use anyhow::Context;
use chrono::NaiveDate;
use rusqlite::types::ValueRef;
use rusqlite::{OptionalExtension, Row, params};

use crate::domain::models::{
    Attachment, Customer, CustomerSummary, Job, JobListing, Site, SiteLocation, SiteSummary,
};
use crate::domain::ports::DashboardRepository;

use super::store::SqliteStore;

const JOB_COLUMNS: &str = "j.id, j.site_id, j.division, j.job_number, j.title, j.status, \
                           j.start_date, j.end_date, j.has_attachments";

const LISTING_FROM: &str = "FROM jobs j \
                            JOIN sites s ON j.site_id = s.id \
                            JOIN customers c ON s.customer_id = c.id";

/// Truthiness of a loosely typed flag column: zero, empty and NULL are false
fn flag(value: ValueRef<'_>) -> bool {
    match value {
        ValueRef::Null => false,
        ValueRef::Integer(n) => n != 0,
        ValueRef::Real(x) => x.is_nan() || x.abs() > 0.0,
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => !bytes.is_empty(),
    }
}

fn job_from_row(row: &Row<'_>) -> rusqlite::Result<Job> {
    let has_attachments = flag(row.get_ref("has_attachments")?);
    Ok(Job {
        id: row.get("id")?,
        site_id: row.get("site_id")?,
        division: row.get("division")?,
        job_number: row.get("job_number")?,
        title: row.get("title")?,
        status: row.get("status")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        has_attachments,
    })
}

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<JobListing> {
    Ok(JobListing {
        job: job_from_row(row)?,
        site_name: row.get("site_name")?,
        customer_name: row.get("customer_name")?,
    })
}

fn attachment_from_row(row: &Row<'_>) -> rusqlite::Result<Attachment> {
    Ok(Attachment {
        id: row.get("id")?,
        site_id: row.get("site_id")?,
        job_id: row.get("job_id")?,
        filename: row.get("filename")?,
        url: row.get("url")?,
    })
}

fn site_from_row(row: &Row<'_>) -> rusqlite::Result<Site> {
    Ok(Site {
        id: row.get("id")?,
        customer_id: row.get("customer_id")?,
        name: row.get("name")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}

impl SqliteStore {
    fn listings(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> rusqlite::Result<Vec<JobListing>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, listing_from_row)?;
        rows.collect()
    }

    fn attachments(&self, sql: &str, owner_id: i64) -> rusqlite::Result<Vec<Attachment>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![owner_id], attachment_from_row)?;
        rows.collect()
    }
}

impl DashboardRepository for SqliteStore {
    fn site_locations(&self) -> anyhow::Result<Vec<SiteLocation>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.name, s.latitude, s.longitude, c.name AS customer_name \
             FROM sites s JOIN customers c ON s.customer_id = c.id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SiteLocation {
                id: row.get("id")?,
                name: row.get("name")?,
                latitude: row.get("latitude")?,
                longitude: row.get("longitude")?,
                customer_name: row.get("customer_name")?,
            })
        })?;
        rows.collect::<rusqlite::Result<_>>()
            .context("failed to load site locations")
    }

    fn first_job_at_site(&self, site_id: i64) -> anyhow::Result<Option<Job>> {
        let sql = format!(
            "SELECT {JOB_COLUMNS} FROM jobs j WHERE j.site_id = ?1 ORDER BY j.id LIMIT 1"
        );
        self.conn
            .query_row(&sql, params![site_id], job_from_row)
            .optional()
            .with_context(|| format!("failed to load first job for site {site_id}"))
    }

    fn jobs_starting_on(&self, date: NaiveDate) -> anyhow::Result<Vec<JobListing>> {
        let sql = format!(
            "SELECT {JOB_COLUMNS}, s.name AS site_name, c.name AS customer_name \
             {LISTING_FROM} WHERE j.start_date = ?1"
        );
        self.listings(&sql, params![date.format("%Y-%m-%d").to_string()])
            .with_context(|| format!("failed to load jobs starting on {date}"))
    }

    fn customer_summaries(&self) -> anyhow::Result<Vec<CustomerSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.id, c.name, \
                    COUNT(DISTINCT s.id) AS site_count, \
                    COUNT(j.id) AS job_count \
             FROM customers c \
             LEFT JOIN sites s ON s.customer_id = c.id \
             LEFT JOIN jobs j ON j.site_id = s.id \
             GROUP BY c.id ORDER BY c.name",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CustomerSummary {
                id: row.get("id")?,
                name: row.get("name")?,
                site_count: row.get("site_count")?,
                job_count: row.get("job_count")?,
            })
        })?;
        rows.collect::<rusqlite::Result<_>>()
            .context("failed to load customer summaries")
    }

    fn customer(&self, id: i64) -> anyhow::Result<Option<Customer>> {
        self.conn
            .query_row(
                "SELECT id, name FROM customers WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Customer {
                        id: row.get("id")?,
                        name: row.get("name")?,
                    })
                },
            )
            .optional()
            .with_context(|| format!("failed to load customer {id}"))
    }

    fn customer_sites(&self, customer_id: i64) -> anyhow::Result<Vec<SiteSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.name, COUNT(j.id) AS job_count \
             FROM sites s LEFT JOIN jobs j ON j.site_id = s.id \
             WHERE s.customer_id = ?1 \
             GROUP BY s.id ORDER BY s.name",
        )?;
        let rows = stmt.query_map(params![customer_id], |row| {
            Ok(SiteSummary {
                id: row.get("id")?,
                name: row.get("name")?,
                job_count: row.get("job_count")?,
            })
        })?;
        rows.collect::<rusqlite::Result<_>>()
            .with_context(|| format!("failed to load sites for customer {customer_id}"))
    }

    fn recent_customer_jobs(
        &self,
        customer_id: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<JobListing>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let sql = format!(
            "SELECT {JOB_COLUMNS}, s.name AS site_name, c.name AS customer_name \
             {LISTING_FROM} WHERE s.customer_id = ?1 \
             ORDER BY j.start_date DESC LIMIT ?2"
        );
        self.listings(&sql, params![customer_id, limit])
            .with_context(|| format!("failed to load jobs for customer {customer_id}"))
    }

    fn site(&self, id: i64) -> anyhow::Result<Option<Site>> {
        self.conn
            .query_row(
                "SELECT id, customer_id, name, latitude, longitude FROM sites WHERE id = ?1",
                params![id],
                site_from_row,
            )
            .optional()
            .with_context(|| format!("failed to load site {id}"))
    }

    fn site_jobs(&self, site_id: i64) -> anyhow::Result<Vec<Job>> {
        let sql = format!(
            "SELECT {JOB_COLUMNS} FROM jobs j WHERE j.site_id = ?1 ORDER BY j.start_date DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![site_id], job_from_row)?;
        rows.collect::<rusqlite::Result<_>>()
            .with_context(|| format!("failed to load jobs for site {site_id}"))
    }

    fn site_attachments(&self, site_id: i64) -> anyhow::Result<Vec<Attachment>> {
        self.attachments(
            "SELECT id, site_id, job_id, filename, url FROM attachments WHERE site_id = ?1",
            site_id,
        )
        .with_context(|| format!("failed to load attachments for site {site_id}"))
    }

    fn job(&self, id: i64) -> anyhow::Result<Option<Job>> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs j WHERE j.id = ?1");
        self.conn
            .query_row(&sql, params![id], job_from_row)
            .optional()
            .with_context(|| format!("failed to load job {id}"))
    }

    fn job_attachments(&self, job_id: i64) -> anyhow::Result<Vec<Attachment>> {
        self.attachments(
            "SELECT id, site_id, job_id, filename, url FROM attachments WHERE job_id = ?1",
            job_id,
        )
        .with_context(|| format!("failed to load attachments for job {job_id}"))
    }

    fn dated_jobs(&self) -> anyhow::Result<Vec<JobListing>> {
        let sql = format!(
            "SELECT {JOB_COLUMNS}, s.name AS site_name, c.name AS customer_name \
             {LISTING_FROM} WHERE j.start_date IS NOT NULL ORDER BY j.start_date"
        );
        self.listings(&sql, params![])
            .context("failed to load dated jobs")
    }
}
