// ABOUTME: Configuration and environment management for OPML Blogroll
// ABOUTME: Resolves runtime configuration and the password override signal from the environment

pub mod config;
pub mod constants;
pub mod password;

pub use config::{Config, ConfigError};
pub use password::PasswordOverride;
