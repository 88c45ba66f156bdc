//! Materials-testing lab view models
//!
//! Plain state holders for the record list and detail panels. Each model
//! exposes current values through getters and is mutated by the event
//! handlers of the embedding UI; there is no reactive framework at this
//! layer.

mod detail;
mod list;

pub use detail::ProctorDetailModel;
pub use list::ProctorListModel;
