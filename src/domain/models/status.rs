//! Job status handling
//!
//! Two views of the same stored status text:
//!
//! - [`StatusClass`] is the lenient, case- and space-insensitive badge class
//! - [`JobStatus`] is the exact lifecycle label used by timeline derivation

use serde::Serialize;

/// Presentation class for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusClass {
    /// `scheduled`
    Scheduled,
    /// `in-progress` (also the fallback)
    #[default]
    InProgress,
    /// `on-hold`
    OnHold,
    /// `completed`
    Completed,
}

impl StatusClass {
    /// Normalize a status string into a badge class
    ///
    /// The status is lower-cased and spaces become hyphens before matching.
    /// Anything unrecognized (including a missing status) is `in-progress`.
    #[must_use]
    pub fn from_status(status: Option<&str>) -> Self {
        let key = status.unwrap_or_default().to_lowercase().replace(' ', "-");
        match key.as_str() {
            "scheduled" => Self::Scheduled,
            "in-progress" => Self::InProgress,
            "on-hold" => Self::OnHold,
            "completed" => Self::Completed,
            _ => Self::default(),
        }
    }

    /// CSS class name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in-progress",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for StatusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle stage of a job, matched on the exact stored label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// `Scheduled`
    Scheduled,
    /// `In Progress`
    InProgress,
    /// `On Hold`
    OnHold,
    /// `Completed`
    Completed,
    /// Any other label, or none
    Other,
}

impl JobStatus {
    /// Parse a stored status label (exact, case-sensitive)
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label.unwrap_or_default() {
            "Scheduled" => Self::Scheduled,
            "In Progress" => Self::InProgress,
            "On Hold" => Self::OnHold,
            "Completed" => Self::Completed,
            _ => Self::Other,
        }
    }

    /// Whether the job is still open-ended (drawn through today)
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::InProgress | Self::OnHold)
    }
}
