// ABOUTME: Library side of the blogroll CLI
// ABOUTME: Logging bootstrap, save flag handling and terminal rendering of the settings view

pub mod form;
pub mod logging;
pub mod render;
