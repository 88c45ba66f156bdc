//! Core data structures for materials-testing records

mod proctor;

pub use proctor::{ProctorStatus, SoilProctor, TestMethod};
