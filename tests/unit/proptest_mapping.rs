//! Property-based tests for the presentation mappings
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use wellatlas::domain::models::{Division, StatusClass};

const DIVISION_CLASSES: [&str; 4] = ["drilling", "domestic", "ag", "electrical"];
const STATUS_CLASSES: [&str; 4] = ["scheduled", "in-progress", "on-hold", "completed"];

proptest! {
    /// Every division code maps to one of the four classes
    #[test]
    fn division_mapping_is_total(code in ".{0,8}") {
        let class = Division::from_code(&code).css_class();
        prop_assert!(DIVISION_CLASSES.contains(&class));
    }

    /// Codes outside D/P/A/E fall back to drilling
    #[test]
    fn unmapped_division_is_drilling(code in "[a-zB-CF-OQ-Z0-9]{0,3}") {
        prop_assert_eq!(Division::from_code(&code), Division::Drilling);
    }

    /// Every status string maps to one of the four classes
    #[test]
    fn status_mapping_is_total(status in ".{0,16}") {
        let class = StatusClass::from_status(Some(&status)).as_str();
        prop_assert!(STATUS_CLASSES.contains(&class));
    }

    /// Case does not affect the status class
    #[test]
    fn status_mapping_ignores_case(status in "[a-zA-Z -]{0,12}") {
        prop_assert_eq!(
            StatusClass::from_status(Some(&status.to_uppercase())),
            StatusClass::from_status(Some(&status.to_lowercase()))
        );
    }
}
