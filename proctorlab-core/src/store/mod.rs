//! Record data providers
//!
//! The [`ProctorStore`] trait is the seam between the view models and
//! whatever backs the records. [`SampleProctorStore`] serves the built-in
//! demonstration data set; a database-backed store can replace it without
//! touching the layout or view-model code.

use chrono::NaiveDate;

use crate::models::{ProctorStatus, SoilProctor, TestMethod};

/// Read access to soil proctor records.
pub trait ProctorStore {
    /// All records, in display order.
    fn list(&self) -> &[SoilProctor];

    /// Looks up a record by its identifier.
    fn find_by_id(&self, id: &str) -> Option<&SoilProctor>;
}

impl<S: ProctorStore + ?Sized> ProctorStore for &S {
    fn list(&self) -> &[SoilProctor] {
        (**self).list()
    }

    fn find_by_id(&self, id: &str) -> Option<&SoilProctor> {
        (**self).find_by_id(id)
    }
}

/// In-memory store serving the built-in sample records.
#[derive(Debug, Clone)]
pub struct SampleProctorStore {
    records: Vec<SoilProctor>,
}

impl SampleProctorStore {
    /// Creates a store holding the five sample records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: sample_records(),
        }
    }
}

impl Default for SampleProctorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProctorStore for SampleProctorStore {
    fn list(&self) -> &[SoilProctor] {
        &self.records
    }

    fn find_by_id(&self, id: &str) -> Option<&SoilProctor> {
        self.records.iter().find(|record| record.id == id)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid")
}

fn sample_records() -> Vec<SoilProctor> {
    vec![
        SoilProctor {
            id: "SP001".to_string(),
            project_name: "Highway 101 Expansion".to_string(),
            sample_id: "H101-S01".to_string(),
            date: date(2023, 5, 15),
            location: "Mile Marker 45".to_string(),
            max_dry_density: 125.4,
            optimum_moisture_content: 12.8,
            test_method: TestMethod::AstmD698,
            technician: "John Smith".to_string(),
            status: ProctorStatus::Completed,
        },
        SoilProctor {
            id: "SP002".to_string(),
            project_name: "Downtown Office Building".to_string(),
            sample_id: "DOB-S03".to_string(),
            date: date(2023, 6, 2),
            location: "Foundation Area B".to_string(),
            max_dry_density: 118.7,
            optimum_moisture_content: 14.2,
            test_method: TestMethod::AstmD1557,
            technician: "Maria Rodriguez".to_string(),
            status: ProctorStatus::Completed,
        },
        SoilProctor {
            id: "SP003".to_string(),
            project_name: "Riverside Park".to_string(),
            sample_id: "RP-S05".to_string(),
            date: date(2023, 6, 10),
            location: "Playground Area".to_string(),
            max_dry_density: 110.5,
            optimum_moisture_content: 16.5,
            test_method: TestMethod::AstmD698,
            technician: "David Chen".to_string(),
            status: ProctorStatus::InProgress,
        },
        SoilProctor {
            id: "SP004".to_string(),
            project_name: "Highway 101 Expansion".to_string(),
            sample_id: "H101-S08".to_string(),
            date: date(2023, 6, 18),
            location: "Mile Marker 47".to_string(),
            max_dry_density: 127.1,
            optimum_moisture_content: 11.9,
            test_method: TestMethod::AstmD1557,
            technician: "John Smith".to_string(),
            status: ProctorStatus::Completed,
        },
        SoilProctor {
            id: "SP005".to_string(),
            project_name: "Mountain View Residential".to_string(),
            sample_id: "MVR-S02".to_string(),
            date: date(2023, 7, 5),
            location: "Lot 23".to_string(),
            max_dry_density: 115.8,
            optimum_moisture_content: 15.3,
            test_method: TestMethod::AstmD698,
            technician: "Sarah Johnson".to_string(),
            status: ProctorStatus::PendingReview,
        },
    ]
}
