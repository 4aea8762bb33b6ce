// ABOUTME: Settings management for OPML Blogroll
// ABOUTME: Canonical settings record, submission sanitizer and display projection

pub mod category;
pub mod display;
pub mod sanitizer;
pub mod types;
pub mod validation;

pub use category::{CategoryIndex, CategoryLookup, LINK_CATEGORY};
pub use display::{denylist_display, password_display, CategoryOption, SettingsView};
pub use sanitizer::{sanitize, Sanitizer};
pub use types::*;
pub use validation::{
    denylist_entries, normalize_denylist, normalize_line_endings, parse_category_id,
    validate_url, ValidationError, DENYLIST_TRIM_CHARS,
};
