//! Parameterized tests for division and status presentation
//!
//! These tests use test-case to run the same mapping with different inputs.

use test_case::test_case;
use wellatlas::domain::models::{Division, StatusClass};

// =============================================================================
// Division mapping
// =============================================================================

#[test_case("D", "drilling", "#c03540" ; "drilling")]
#[test_case("P", "domestic", "#d9a441" ; "domestic")]
#[test_case("A", "ag", "#2f8f4e" ; "agricultural")]
#[test_case("E", "electrical", "#3e6bd8" ; "electrical")]
#[test_case("X", "drilling", "#c03540" ; "unknown code")]
#[test_case("", "drilling", "#c03540" ; "empty code")]
#[test_case("drilling", "drilling", "#c03540" ; "full word is not a code")]
fn test_division_mapping(code: &str, class: &str, fill: &str) {
    let division = Division::from_code(code);
    assert_eq!(division.css_class(), class);
    assert_eq!(division.pin_fill(), fill);
}

// =============================================================================
// Status mapping
// =============================================================================

#[test_case(Some("Scheduled"), "scheduled" ; "title case")]
#[test_case(Some("scheduled"), "scheduled" ; "lower case")]
#[test_case(Some("In Progress"), "in-progress" ; "in progress with space")]
#[test_case(Some("IN PROGRESS"), "in-progress" ; "upper case")]
#[test_case(Some("On Hold"), "on-hold" ; "on hold with space")]
#[test_case(Some("on-hold"), "on-hold" ; "already hyphenated")]
#[test_case(Some("Completed"), "completed" ; "completed")]
#[test_case(Some("Cancelled"), "in-progress" ; "unknown status")]
#[test_case(Some("On  Hold"), "in-progress" ; "double space")]
#[test_case(Some(""), "in-progress" ; "empty status")]
#[test_case(None, "in-progress" ; "missing status")]
fn test_status_mapping(status: Option<&str>, class: &str) {
    assert_eq!(StatusClass::from_status(status).as_str(), class);
}
