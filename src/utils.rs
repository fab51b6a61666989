//! Utility functions and platform-neutral repository models
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use url::Url;

/// Repository on the source platform
#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct SourceRepo {
    /// Platform id of the repository
    pub id: u64,

    /// Slug of the repository (last path segment)
    pub path: String,

    /// Full path of the repository, including its namespace
    pub path_with_namespace: String,

    /// Description of the repository
    pub description: Option<String>,

    /// Web URL of the repository
    pub web_url: String,

    /// Username of the owner (absent for group repositories)
    pub owner: Option<String>,
}

/// Repository on the destination platform
#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct DestinationRepo {
    /// Name of the repository
    pub name: String,

    /// Full name of the repository (`namespace/name`)
    pub full_name: String,

    /// Description of the repository
    pub description: Option<String>,

    /// Homepage of the repository
    pub homepage: Option<String>,

    /// Whether the repository is a fork
    pub fork: bool,
}

impl DestinationRepo {
    /// Last segment of the full name
    pub fn slug_name(&self) -> &str {
        match self.full_name.rsplit_once('/') {
            Some((_, name)) => name,
            None => &self.full_name,
        }
    }
}

/// Push mirror configured on a source repository
#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Mirror {
    /// Target URL of the mirror (credentials are masked by the platform)
    pub url: String,

    /// Whether the mirror is enabled
    pub enabled: bool,

    /// Last time the mirror was pushed successfully
    pub last_successful_update_at: Option<DateTime<Utc>>,

    /// Last error reported by the mirror
    pub last_error: Option<String>,
}

impl Mirror {
    /// Whether the mirror reported an error on its last push
    pub fn has_error(&self) -> bool {
        self.last_error
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty())
    }
}

/// Split a repository shorthand into its namespace (if any) and name
///
/// The namespace is everything before the last `/`.
pub fn split_shorthand(shorthand: &str) -> (Option<&str>, &str) {
    match shorthand.rsplit_once('/') {
        Some((namespace, name)) => (Some(namespace), name),
        None => (None, shorthand),
    }
}

/// Mask the password of an URL so it can be displayed
pub fn redact_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            if parsed.password().is_some() && parsed.set_password(Some("*****")).is_err() {
                return "*****".to_string();
            }
            parsed.to_string()
        }
        Err(_) => "*****".to_string(),
    }
}

/// Split destination repositories into the kept ones and the excluded forks
///
/// Nothing is excluded when `include_forks` is set.
pub fn filter_forks(
    repos: Vec<DestinationRepo>,
    include_forks: bool,
) -> (Vec<DestinationRepo>, Vec<DestinationRepo>) {
    if include_forks {
        return (repos, vec![]);
    }
    repos.into_iter().partition(|repo| !repo.fork)
}

/// Create a progress bar with the given length and message
pub(crate) fn progress_bar(len: usize, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Some(style) = get_style() {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb
}

/// get ProgressStyle
fn get_style() -> Option<ProgressStyle> {
    ProgressStyle::with_template("{msg:24} {percent:>3}% |{bar:40}| {pos}/{len}")
        .ok()
        .map(|s| s.progress_chars("█▉▊▋▌▍▎▏ "))
}
