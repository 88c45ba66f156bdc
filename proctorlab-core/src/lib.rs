//! `ProctorLab` Core Library
//!
//! This crate provides the core functionality for the `ProctorLab`
//! materials-testing record manager: the split-pane resize engine behind
//! the dashboard layout, settings persistence, the soil proctor record
//! model, and the list/detail view-model state.
//!
//! # Crate Structure
//!
//! - [`split`] - Divider drag state machine and split fractions
//! - [`layout`] - The dashboard's four-divider panel layout
//! - [`config`] - Key-value settings persistence (TOML)
//! - [`models`] - Core data structures (`SoilProctor` and friends)
//! - [`store`] - Record data providers
//! - [`search`] - Record list filtering
//! - [`lab`] - List and detail view models
//! - [`tracing`] - Structured logging initialization
//!
//! Rendering, theming, and navigation live in the embedding application;
//! this crate is UI-toolkit agnostic.

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod lab;
pub mod layout;
pub mod models;
pub mod search;
pub mod split;
pub mod store;
pub mod tracing;

pub use config::{FileSettingsStore, MemorySettingsStore, SettingsStore};
pub use error::{ConfigError, ConfigResult};
pub use lab::{ProctorDetailModel, ProctorListModel};
pub use layout::{ChangeCallback, DividerId, PanelLayout};
pub use models::{ProctorStatus, SoilProctor, TestMethod};
pub use split::{
    DEFAULT_DAMPING, DragSession, MAX_SPLIT_FRACTION, MIN_SPLIT_FRACTION, SplitAxis, SplitError,
    SplitPaneResizer, SplitState,
};
pub use store::{ProctorStore, SampleProctorStore};
pub use tracing::{
    TracingConfig, TracingError, TracingResult, init_default_tracing, init_tracing,
    is_tracing_initialized,
};
