//! Detail panel state

use crate::models::SoilProctor;
use crate::store::ProctorStore;

/// State behind the record detail panel.
///
/// Loading an unknown id produces a user-facing error message instead of
/// an error type; the panel renders whichever of record or message is
/// present.
#[derive(Debug)]
pub struct ProctorDetailModel<S: ProctorStore> {
    store: S,
    proctor: Option<SoilProctor>,
    error_message: Option<String>,
}

impl<S: ProctorStore> ProctorDetailModel<S> {
    /// Creates a detail model over the given store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            proctor: None,
            error_message: None,
        }
    }

    /// Loads the record with the given id into the panel.
    ///
    /// On success the previous error message is cleared; on a missing id
    /// the previous record is kept and an error message is set.
    pub fn load(&mut self, id: &str) {
        match self.store.find_by_id(id) {
            Some(record) => {
                self.proctor = Some(record.clone());
                self.error_message = None;
            }
            None => {
                self.error_message = Some(format!("Proctor not found with ID: {id}"));
            }
        }
    }

    /// The currently displayed record, if any.
    #[must_use]
    pub fn proctor(&self) -> Option<&SoilProctor> {
        self.proctor.as_ref()
    }

    /// The current error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Clears the displayed record and any error message.
    pub fn clear(&mut self) {
        self.proctor = None;
        self.error_message = None;
    }
}
