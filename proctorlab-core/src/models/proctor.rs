//! Soil proctor test records

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Compaction test method used for a proctor test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestMethod {
    /// Standard Proctor (ASTM D698).
    #[serde(rename = "astm-d698")]
    AstmD698,
    /// Modified Proctor (ASTM D1557).
    #[serde(rename = "astm-d1557")]
    AstmD1557,
}

impl fmt::Display for TestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AstmD698 => write!(f, "ASTM D698"),
            Self::AstmD1557 => write!(f, "ASTM D1557"),
        }
    }
}

/// Review status of a proctor test record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProctorStatus {
    /// Test finished and reviewed.
    Completed,
    /// Test still being performed.
    InProgress,
    /// Test finished, awaiting review.
    PendingReview,
}

impl fmt::Display for ProctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::InProgress => write!(f, "In Progress"),
            Self::PendingReview => write!(f, "Pending Review"),
        }
    }
}

/// A soil proctor (compaction) test record.
///
/// Densities are in pounds per cubic foot, moisture content in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilProctor {
    /// Stable record identifier (e.g. `SP001`).
    pub id: String,
    /// Project the sample belongs to.
    pub project_name: String,
    /// Sample identifier within the project.
    pub sample_id: String,
    /// Date the test was performed.
    pub date: NaiveDate,
    /// Where the sample was taken.
    pub location: String,
    /// Maximum dry density (pcf).
    pub max_dry_density: f64,
    /// Optimum moisture content (%).
    pub optimum_moisture_content: f64,
    /// Compaction test method.
    pub test_method: TestMethod,
    /// Technician who performed the test.
    pub technician: String,
    /// Review status.
    pub status: ProctorStatus,
}

impl SoilProctor {
    /// One-line summary of the test results for list rows.
    #[must_use]
    pub fn result_summary(&self) -> String {
        format!(
            "Max Dry Density: {} pcf | OMC: {}%",
            self.max_dry_density, self.optimum_moisture_content
        )
    }
}
