// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across OPML Blogroll

// Credentials
/// Defining this variable (to any value, even empty) marks the feed reader
/// password as managed outside the settings store.
pub const OPML_BLOGROLL_PASS: &str = "OPML_BLOGROLL_PASS";

// Storage
pub const OPML_BLOGROLL_DB: &str = "OPML_BLOGROLL_DB";
pub const OPML_BLOGROLL_SETTINGS_KEY: &str = "OPML_BLOGROLL_SETTINGS_KEY";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// System Environment Variables
pub const HOME: &str = "HOME";
pub const USERPROFILE: &str = "USERPROFILE"; // Windows

/// Option name the settings record is stored under
pub const DEFAULT_SETTINGS_KEY: &str = "opml_blogroll_settings";

/// Directory (below the home directory) holding the default database
pub const DATA_DIR_NAME: &str = ".opml-blogroll";

/// File name of the default database
pub const DATABASE_FILE_NAME: &str = "blogroll.db";
