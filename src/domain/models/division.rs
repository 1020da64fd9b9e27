//! Job divisions
//!
//! Each job belongs to one business line, stored as a single-letter code.
//! Unknown or missing codes fall back to drilling.

use serde::Serialize;

/// Business line a job belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    /// Well drilling (`D`)
    #[default]
    Drilling,
    /// Domestic pump service (`P`)
    Domestic,
    /// Agricultural (`A`)
    Agricultural,
    /// Electrical (`E`)
    Electrical,
}

impl Division {
    /// Fill color used for sites whose job has an unmapped division
    pub const FALLBACK_FILL: &'static str = "#c03540";

    /// Map a stored division code to a division
    ///
    /// Total: any code other than `D`, `P`, `A` or `E` maps to drilling.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "D" => Self::Drilling,
            "P" => Self::Domestic,
            "A" => Self::Agricultural,
            "E" => Self::Electrical,
            _ => Self::default(),
        }
    }

    /// The single-letter code for this division
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Drilling => "D",
            Self::Domestic => "P",
            Self::Agricultural => "A",
            Self::Electrical => "E",
        }
    }

    /// CSS class used for division badges
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Drilling => "drilling",
            Self::Domestic => "domestic",
            Self::Agricultural => "ag",
            Self::Electrical => "electrical",
        }
    }

    /// Fill color used for map pins
    #[must_use]
    pub const fn pin_fill(self) -> &'static str {
        match self {
            Self::Drilling => Self::FALLBACK_FILL,
            Self::Domestic => "#d9a441",
            Self::Agricultural => "#2f8f4e",
            Self::Electrical => "#3e6bd8",
        }
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drilling => write!(f, "drilling"),
            Self::Domestic => write!(f, "domestic"),
            Self::Agricultural => write!(f, "agricultural"),
            Self::Electrical => write!(f, "electrical"),
        }
    }
}
