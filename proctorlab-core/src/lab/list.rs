//! List panel state

use crate::models::SoilProctor;
use crate::search;
use crate::store::ProctorStore;

/// State behind the searchable record list.
///
/// Holds the search query and the current selection; the visible rows
/// are recomputed from the store on each [`filtered`](Self::filtered)
/// call.
#[derive(Debug)]
pub struct ProctorListModel<S: ProctorStore> {
    store: S,
    search_query: String,
    selected_id: Option<String>,
}

impl<S: ProctorStore> ProctorListModel<S> {
    /// Creates a list model over the given store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            search_query: String::new(),
            selected_id: None,
        }
    }

    /// The current search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Replaces the search query.
    pub fn update_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Records matching the current query, in store order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&SoilProctor> {
        search::filter(self.store.list(), &self.search_query)
    }

    /// Selects the record with the given id.
    ///
    /// Returns false (leaving the selection unchanged) when no such
    /// record exists.
    pub fn select(&mut self, id: &str) -> bool {
        if self.store.find_by_id(id).is_some() {
            self.selected_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// The currently selected record, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&SoilProctor> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.store.find_by_id(id))
    }
}
