//! Calendar grouping
//!
//! Groups dated job listings by their start date string. Listings are
//! expected in ascending start-date order; within one day the input order
//! is kept.

use std::collections::BTreeMap;

use crate::domain::models::JobListing;

use super::shaping::JobRow;

/// Job rows keyed by ISO start date, in ascending date order
pub type CalendarDays = BTreeMap<String, Vec<JobRow>>;

/// Group listings by start date, dropping undated jobs
#[must_use]
pub fn group_by_start_date(listings: &[JobListing]) -> CalendarDays {
    let mut days = CalendarDays::new();
    for listing in listings {
        let Some(day) = listing.job.start_date.as_deref().filter(|d| !d.is_empty()) else {
            continue;
        };
        days.entry(day.to_string())
            .or_default()
            .push(JobRow::from_listing(listing));
    }
    days
}
