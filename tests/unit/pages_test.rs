//! Tests for the page handlers
//!
//! Handlers run against a seeded SQLite file and a frozen clock.

use wellatlas::domain::ports::FixedClock;
use wellatlas::pages::{self, CUSTOMER_RECENT_JOBS, ErrorCode, PageContext, PageError};

use crate::common::{TestDb, reference_date, today};

fn with_context<T>(f: impl FnOnce(&PageContext<'_>) -> T) -> T {
    let clock = FixedClock(today());
    let ctx = PageContext {
        maptiler_key: "test-key",
        reference_date: reference_date(),
        clock: &clock,
    };
    f(&ctx)
}

// =============================================================================
// ERROR TYPES
// =============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_error_code_not_found() {
        let err = PageError::not_found("Job not found");
        assert_eq!(err.status_code(), 404);
        assert!(err.is_not_found());
        assert_eq!(err.message, "Job not found");
    }

    #[test]
    fn test_error_code_internal() {
        let err = PageError::internal("disk on fire");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_error_display() {
        let display = format!("{}", PageError::not_found("Site not found"));
        assert!(display.contains("NOT_FOUND"));
        assert!(display.contains("Site not found"));
    }

    #[test]
    fn test_anyhow_errors_are_internal() {
        let err: PageError = anyhow::anyhow!("no such table: jobs").into();
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(err.message.contains("no such table"));
    }
}

// =============================================================================
// HOME
// =============================================================================

#[test]
fn test_home_pins_use_first_job() {
    let db = TestDb::seeded();
    let view = with_context(|ctx| pages::home(&db.store(), ctx)).unwrap();

    assert_eq!(view.pins.len(), 3);
    let north = view.pins.iter().find(|p| p.site == "North Well").unwrap();
    assert_eq!(north.division_job, "D 1001");
    assert_eq!(north.fill, "#c03540");
    assert_eq!(north.customer, "Acme Farms");

    let ridge = view.pins.iter().find(|p| p.site == "Ridge House").unwrap();
    assert_eq!(ridge.division_job, "E 1004");
    assert_eq!(ridge.fill, "#3e6bd8");
}

#[test]
fn test_home_lists_reference_day_jobs() {
    let db = TestDb::seeded();
    let view = with_context(|ctx| pages::home(&db.store(), ctx)).unwrap();

    assert_eq!(view.reference_date, reference_date());
    assert_eq!(view.maptiler_key, "test-key");
    let mut numbers: Vec<&str> = view.todays_jobs.iter().map(|j| j.job_number.as_str()).collect();
    numbers.sort_unstable();
    assert_eq!(numbers, vec!["1002", "1003"]);
    assert!(view.todays_jobs.iter().all(|j| j.site_name.is_some()));
}

#[test]
fn test_home_on_empty_store() {
    let db = TestDb::empty();
    let view = with_context(|ctx| pages::home(&db.store(), ctx)).unwrap();
    assert!(view.pins.is_empty());
    assert!(view.todays_jobs.is_empty());
    assert_eq!(view.pins_json(), "[]");
}

#[test]
fn test_pins_json_is_script_safe() {
    let db = TestDb::seeded();
    db.conn()
        .execute("UPDATE sites SET name = '</script><b>' WHERE id = 1", [])
        .unwrap();
    let view = with_context(|ctx| pages::home(&db.store(), ctx)).unwrap();
    let json = view.pins_json();
    assert!(!json.contains("</script>"));
    assert!(json.contains("<\\/script>"));
}

// =============================================================================
// CUSTOMERS
// =============================================================================

#[test]
fn test_customers_list() {
    let db = TestDb::seeded();
    let view = pages::customers(&db.store()).unwrap();
    assert_eq!(view.customers.len(), 3);
    assert_eq!(view.customers[0].name, "Acme Farms");
}

#[test]
fn test_customer_detail() {
    let db = TestDb::seeded();
    let view = pages::customer_detail(&db.store(), 1).unwrap();
    assert_eq!(view.customer.name, "Acme Farms");
    assert_eq!(view.sites.len(), 2);
    assert_eq!(view.jobs.len(), 3);
    assert_eq!(view.jobs[2].job_number, "1001");
    assert_eq!(view.jobs[2].status_class, "completed");
}

#[test]
fn test_customer_detail_limits_recent_jobs() {
    let db = TestDb::seeded();
    for day in 1..=20 {
        db.insert_job(2, &format!("2{day:03}"), "Scheduled", Some(&format!("2024-03-{day:02}")));
    }

    let view = pages::customer_detail(&db.store(), 1).unwrap();
    assert_eq!(view.jobs.len(), CUSTOMER_RECENT_JOBS);

    let starts: Vec<&str> = view.jobs.iter().map(|j| j.start_date.as_str()).collect();
    assert_eq!(starts[0], "2025-05-15");
    let mut sorted = starts.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(starts, sorted);
}

#[test]
fn test_customer_not_found() {
    let db = TestDb::seeded();
    let err = pages::customer_detail(&db.store(), 404).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.message, "Customer not found");
}

// =============================================================================
// SITES
// =============================================================================

#[test]
fn test_site_detail() {
    let db = TestDb::seeded();
    let view = pages::site_detail(&db.store(), 1).unwrap();
    assert_eq!(view.site.name, "North Well");
    assert_eq!(view.customer.name, "Acme Farms");
    let ids: Vec<i64> = view.jobs.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(view.attachments.len(), 2);
}

#[test]
fn test_site_not_found() {
    let db = TestDb::seeded();
    let err = pages::site_detail(&db.store(), 404).unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.message, "Site not found");
}

#[test]
fn test_site_with_missing_customer_is_internal() {
    let db = TestDb::seeded();
    db.conn_unchecked()
        .execute("INSERT INTO sites (id, customer_id, name) VALUES (8, 77, 'Orphan')", [])
        .unwrap();
    let err = pages::site_detail(&db.store(), 8).unwrap_err();
    assert_eq!(err.code, ErrorCode::Internal);
    assert!(err.message.contains("missing customer 77"));
}

// =============================================================================
// JOBS
// =============================================================================

#[test]
fn test_job_detail_completed_timeline() {
    let db = TestDb::seeded();
    let view = with_context(|ctx| pages::job_detail(&db.store(), ctx, 1)).unwrap();
    assert_eq!(view.site.name, "North Well");
    assert_eq!(view.customer.name, "Acme Farms");
    assert_eq!(view.job.division_class, "drilling");
    assert_eq!(view.attachments.len(), 2);

    let timeline = view.timeline.unwrap();
    assert_eq!(timeline.end.to_string(), "2025-01-10");
    assert_eq!(timeline.duration_days, 9);
}

#[test]
fn test_job_detail_open_job_runs_to_clock() {
    let db = TestDb::seeded();
    let view = with_context(|ctx| pages::job_detail(&db.store(), ctx, 2)).unwrap();
    let timeline = view.timeline.unwrap();
    assert_eq!(timeline.end, today());
    assert_eq!(timeline.duration_days, 17);
}

#[test]
fn test_job_detail_without_start_has_no_timeline() {
    let db = TestDb::seeded();
    let view = with_context(|ctx| pages::job_detail(&db.store(), ctx, 5)).unwrap();
    assert!(view.timeline.is_none());
    assert_eq!(view.job.division_class, "drilling");
    assert_eq!(view.job.status_class, "in-progress");
}

#[test]
fn test_job_not_found() {
    let db = TestDb::seeded();
    let err = with_context(|ctx| pages::job_detail(&db.store(), ctx, 404)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.message, "Job not found");
}

#[test]
fn test_job_with_missing_site_is_internal() {
    let db = TestDb::seeded();
    db.conn_unchecked()
        .execute(
            "INSERT INTO jobs (id, site_id, division, job_number, status) \
             VALUES (40, 99, 'D', '4040', 'Scheduled')",
            [],
        )
        .unwrap();
    let err = with_context(|ctx| pages::job_detail(&db.store(), ctx, 40)).unwrap_err();
    assert_eq!(err.code, ErrorCode::Internal);
    assert!(!err.is_not_found());
    assert!(err.message.contains("missing site 99"));
}

#[test]
fn test_job_with_bad_date_is_internal() {
    let db = TestDb::seeded();
    db.conn()
        .execute("UPDATE jobs SET start_date = '15/05/2025' WHERE id = 3", [])
        .unwrap();
    let err = with_context(|ctx| pages::job_detail(&db.store(), ctx, 3)).unwrap_err();
    assert_eq!(err.code, ErrorCode::Internal);
}

// =============================================================================
// CALENDAR
// =============================================================================

#[test]
fn test_calendar_groups_by_start_date() {
    let db = TestDb::seeded();
    let view = pages::calendar(&db.store()).unwrap();

    let days: Vec<&str> = view.days.keys().map(String::as_str).collect();
    assert_eq!(days, vec!["2025-01-01", "2025-04-01", "2025-05-15"]);

    let same_day: Vec<&str> = view.days["2025-05-15"]
        .iter()
        .map(|j| j.job_number.as_str())
        .collect();
    assert_eq!(same_day.len(), 2);
    assert!(same_day.contains(&"1002"));
    assert!(same_day.contains(&"1003"));
}

#[test]
fn test_calendar_excludes_undated_jobs() {
    let db = TestDb::seeded();
    let view = pages::calendar(&db.store()).unwrap();
    let total: usize = view.days.values().map(Vec::len).sum();
    assert_eq!(total, 4);
    assert!(view.days.values().flatten().all(|j| j.job_number != "1005"));
}
