//! Operational-status classification categories

use serde::{Deserialize, Serialize};

/// Operational status of the turbine for a single measurement record
///
/// Derived from (wind speed, power) by `analysis::classify`. Exactly one
/// category applies per record; the classification rule is evaluated in
/// precedence order, so the categories are mutually exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
pub enum OperationalStatus {
    /// Wind above cut-in but no power produced (curtailment, stop or maintenance)
    StopOrMaintenance,
    /// Wind below the cut-in speed - no production expected
    BelowCutIn,
    /// High wind with near-zero power - safety shutdown above cut-out
    HighWindStop,
    /// Producing power under normal conditions
    NormalOperation,
    /// Wind speed or power missing from the record - cannot classify
    #[default]
    Unknown,
}

impl OperationalStatus {
    /// Canonical display/iteration order for summaries and legends.
    ///
    /// Fixed so that summary breakdowns are stable across runs regardless
    /// of which category happens to appear first in the data.
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::StopOrMaintenance,
        Self::BelowCutIn,
        Self::HighWindStop,
        Self::NormalOperation,
        Self::Unknown,
    ];

    /// Get display name for UI and summary output
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::StopOrMaintenance => "Stop/Maintenance",
            Self::BelowCutIn => "Below cut-in",
            Self::HighWindStop => "High wind stop",
            Self::NormalOperation => "Normal operation",
            Self::Unknown => "Unknown",
        }
    }

    /// Get short code for logging
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::StopOrMaintenance => "STOP",
            Self::BelowCutIn => "CUTIN",
            Self::HighWindStop => "HIWIND",
            Self::NormalOperation => "NORMAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
