// ABOUTME: Data layer and persistence for OPML Blogroll
// ABOUTME: SQLite-backed settings options, link categories and the save flow

pub mod categories;
pub mod db;
pub mod error;
pub mod service;
pub mod settings;

pub use categories::CategoryStorage;
pub use db::{initialize, open, open_in_memory};
pub use error::{StorageError, StorageResult};
pub use service::{SaveOutcome, SettingsService};
pub use settings::{LoadedSettings, SettingsStorage};
