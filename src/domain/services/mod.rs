//! View shaping services
//!
//! Pure logic that turns store records into display rows.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`shaping`] - Job rows and map pins
//! - [`calendar`] - Grouping jobs by start date

pub mod calendar;
pub mod shaping;

pub use calendar::{CalendarDays, group_by_start_date};
pub use shaping::{JobRow, PIN_BORDER, Pin};
