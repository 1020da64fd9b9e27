//! Job timeline derivation
//!
//! A job's timeline is the span drawn on its detail page. There is no
//! progress data in the store, so the span is a policy over status:
//!
//! - `Completed` jobs with a stored end date run to that end date
//! - `In Progress` and `On Hold` jobs run through today
//! - everything else (scheduled, completed without an end, unknown) is a
//!   single-day span at the start date
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use wellatlas::domain::models::Timeline;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let t = Timeline::derive(Some("2025-01-01"), Some("Completed"), Some("2025-01-10"), today)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(t.duration_days, 9);
//! assert_eq!(t.end.to_string(), "2025-01-10");
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::status::JobStatus;

/// Errors raised while reading stored dates
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    /// Stored date was not an ISO `YYYY-MM-DD` calendar date
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    Invalid {
        /// The offending value
        value: String,
    },
}

/// Parse an ISO calendar date as stored in the jobs table
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DateError::Invalid {
        value: value.to_string(),
    })
}

/// Derived display span for a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timeline {
    /// Start date
    pub start: NaiveDate,
    /// Effective end date (never before `start`)
    pub end: NaiveDate,
    /// Span length in days, at least 1
    pub duration_days: i64,
    /// Bar width in percent
    pub width: u8,
    /// Bar offset in percent
    pub offset: u8,
}

impl Timeline {
    /// Bar width; the gantt bar always spans the whole track
    pub const FULL_WIDTH: u8 = 100;

    /// Derive the timeline for a job
    ///
    /// Returns `Ok(None)` when the job has no start date.
    pub fn derive(
        start: Option<&str>,
        status: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
    ) -> Result<Option<Self>, DateError> {
        let Some(start_raw) = start.filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let start = parse_iso_date(start_raw)?;

        let status = JobStatus::from_label(status);
        let stored_end = end.filter(|s| !s.is_empty());

        let end = match (status, stored_end) {
            (JobStatus::Completed, Some(raw)) => parse_iso_date(raw)?,
            (s, _) if s.is_open() => today,
            _ => start,
        };
        let end = end.max(start);

        let duration_days = (end - start).num_days().max(1);

        Ok(Some(Self {
            start,
            end,
            duration_days,
            width: Self::FULL_WIDTH,
            offset: 0,
        }))
    }
}
