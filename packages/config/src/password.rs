// ABOUTME: Password override signal
// ABOUTME: Detects a feed reader password supplied by the deployment environment

use std::env;

use tracing::debug;

use crate::constants::OPML_BLOGROLL_PASS;

/// Whether the feed reader password is managed outside the settings store.
///
/// When the deployment defines [`OPML_BLOGROLL_PASS`], the stored password is
/// always blanked and the settings form cannot edit it. The value itself is
/// never read here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordOverride {
    #[default]
    Inactive,
    Active,
}

impl PasswordOverride {
    /// Resolve the override from the process environment.
    ///
    /// A defined but empty variable still counts as active.
    pub fn from_env() -> Self {
        if env::var_os(OPML_BLOGROLL_PASS).is_some() {
            debug!("{} is defined, password override active", OPML_BLOGROLL_PASS);
            PasswordOverride::Active
        } else {
            PasswordOverride::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PasswordOverride::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_inactive_when_unset() {
        env::remove_var(OPML_BLOGROLL_PASS);
        assert_eq!(PasswordOverride::from_env(), PasswordOverride::Inactive);
        assert!(!PasswordOverride::from_env().is_active());
    }

    #[test]
    #[serial]
    fn test_from_env_active_when_defined() {
        env::set_var(OPML_BLOGROLL_PASS, "s3cret");
        let signal = PasswordOverride::from_env();
        env::remove_var(OPML_BLOGROLL_PASS);

        assert_eq!(signal, PasswordOverride::Active);
        assert!(signal.is_active());
    }

    #[test]
    #[serial]
    fn test_from_env_active_when_defined_empty() {
        env::set_var(OPML_BLOGROLL_PASS, "");
        let signal = PasswordOverride::from_env();
        env::remove_var(OPML_BLOGROLL_PASS);

        assert!(signal.is_active());
    }

    #[test]
    fn test_default_is_inactive() {
        assert!(!PasswordOverride::default().is_active());
    }
}
