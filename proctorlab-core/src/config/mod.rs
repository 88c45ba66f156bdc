//! Application settings persistence
//!
//! This module provides the key-value settings store backing the panel
//! layout (and any future persisted UI state). The store is a plain
//! trait object injected at construction rather than a process-wide
//! singleton, so tests swap in an in-memory fake with no global state.

mod store;

pub use store::{FileSettingsStore, MemorySettingsStore, SETTINGS_FILE_NAME, SettingsStore};
