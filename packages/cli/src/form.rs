// ABOUTME: Command line edits to the settings form
// ABOUTME: Turns save flags into the submission a browser would have posted

use std::fs;
use std::io;
use std::path::PathBuf;

use blogroll_settings::SettingsSubmission;
use clap::Args;

#[derive(Args, Debug, Default, Clone)]
pub struct SaveArgs {
    /// OPML endpoint URL (pass "" to clear it)
    #[arg(long)]
    pub url: Option<String>,
    /// Feed reader username for Basic Authentication
    #[arg(long)]
    pub username: Option<String>,
    /// Feed reader password for Basic Authentication
    #[arg(long)]
    pub password: Option<String>,
    /// Denylist entries, one per line
    #[arg(long, conflicts_with = "denylist_file")]
    pub denylist: Option<String>,
    /// Read denylist entries from a file
    #[arg(long, value_name = "FILE")]
    pub denylist_file: Option<PathBuf>,
    /// Import OPML categories too
    #[arg(long, conflicts_with = "disable_categories")]
    pub enable_categories: bool,
    /// Stop importing OPML categories
    #[arg(long)]
    pub disable_categories: bool,
    /// Default link category id (pass "" to clear it)
    #[arg(long)]
    pub default_category: Option<String>,
    /// Submit only the fields given on the command line instead of the whole form
    #[arg(long)]
    pub only_given: bool,
}

impl SaveArgs {
    /// Overlay these edits on `form`, the unedited form's submission.
    ///
    /// With `--only-given` the form is ignored and only flags are submitted.
    pub fn into_submission(self, form: SettingsSubmission) -> io::Result<SettingsSubmission> {
        let mut submission = if self.only_given {
            SettingsSubmission::default()
        } else {
            form
        };

        if let Some(url) = self.url {
            submission.url = Some(url);
        }
        if let Some(username) = self.username {
            submission.username = Some(username);
        }
        if let Some(password) = self.password {
            submission.password = Some(password);
        }

        if let Some(path) = self.denylist_file {
            submission.denylist = Some(fs::read_to_string(path)?);
        } else if let Some(denylist) = self.denylist {
            submission.denylist = Some(denylist);
        }

        // Checkbox: posted as "1" when ticked, absent otherwise
        if self.enable_categories {
            submission.categories_enabled = Some("1".to_string());
        } else if self.disable_categories {
            submission.categories_enabled = None;
        }

        if let Some(default_category) = self.default_category {
            submission.default_category = Some(default_category);
        }

        Ok(submission)
    }
}
