//! Human readable views of the mirror statuses
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use console::{style, StyledObject};
use tabled::{settings::Style, Table, Tabled};

use crate::{status::MirrorStatus, utils::SourceRepo};

/// Marker of an absent value
const NOT_AVAILABLE: &str = "n/a";

/// One-word state of a mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorState {
    /// Mirror is working
    Active,
    /// Mirror is expected but something is wrong
    Issues,
    /// No mirror expected
    None,
}

impl MirrorState {
    /// State of a status
    pub fn of(status: &MirrorStatus) -> Self {
        if status.is_active_without_issues() {
            MirrorState::Active
        } else if status.should_have_mirror() {
            MirrorState::Issues
        } else {
            MirrorState::None
        }
    }

    /// Word shown in the table
    pub fn as_str(&self) -> &'static str {
        match self {
            MirrorState::Active => "active",
            MirrorState::Issues => "issues",
            MirrorState::None => "-",
        }
    }

    /// Colored word shown in the terminal
    fn styled(&self) -> StyledObject<&'static str> {
        let word = style(self.as_str());
        match self {
            MirrorState::Active => word.green(),
            MirrorState::Issues => word.red(),
            MirrorState::None => word,
        }
    }
}

impl fmt::Display for MirrorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.styled())
    }
}

/// Row of the summary table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct SummaryRow {
    /// Path of the source repository
    #[tabled(rename = "GitLab repo")]
    pub repo: String,

    /// State of the mirror
    #[tabled(rename = "Mirror")]
    pub state: MirrorState,

    /// First issue found
    #[tabled(rename = "Details")]
    pub details: String,
}

/// Row of the detail view
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct DetailRow {
    /// Name of the field
    #[tabled(rename = "Key")]
    pub key: String,

    /// Rendered value
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Explanation of the state, empty when there is nothing to say
pub fn status_details(status: &MirrorStatus) -> &'static str {
    if status.is_active_without_issues() {
        if status.description_matches_template == Some(true) {
            ""
        } else {
            "description does not match template"
        }
    } else if !status.should_have_mirror() {
        if status.has_other_mirror {
            "unrelated mirror configured"
        } else {
            ""
        }
    } else if !status.mirror_configured {
        "no mirror configured"
    } else if !status.mirror_enabled {
        "mirror disabled"
    } else if status.is_up_to_date() == Some(false) {
        "not up to date"
    } else if status.last_push_succeeded == Some(false) {
        "last push failed"
    } else {
        "unknown"
    }
}

/// Rows of the summary table, sorted by repository path
pub fn summary_rows<'a, I>(statuses: I) -> Vec<SummaryRow>
where
    I: IntoIterator<Item = &'a (SourceRepo, MirrorStatus)>,
{
    let mut rows: Vec<SummaryRow> = statuses
        .into_iter()
        .map(|(repo, status)| SummaryRow {
            repo: repo.path_with_namespace.clone(),
            state: MirrorState::of(status),
            details: status_details(status).to_string(),
        })
        .collect();
    rows.sort_by(|a, b| a.repo.cmp(&b.repo));
    rows
}

/// Render rows as a table with rounded borders
pub fn format_table<T, I>(rows: I) -> String
where
    T: Tabled,
    I: IntoIterator<Item = T>,
{
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Print the summary table of all statuses
pub fn print_summary_table(statuses: &[(SourceRepo, MirrorStatus)]) {
    println!("Your mirrors status summary:\n");
    println!("{}\n", format_table(summary_rows(statuses)));
}

/// Render an optional timestamp
fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Render a boolean
fn format_bool(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

/// Render an optional boolean
fn format_opt_bool(value: Option<bool>) -> String {
    value
        .map(format_bool)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Key/value rows describing one status
pub fn detail_rows(repo: &SourceRepo, status: &MirrorStatus) -> Vec<DetailRow> {
    let github_repo = status
        .github_repo
        .as_ref()
        .map(|r| r.full_name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    [
        ("GitLab repo", repo.path_with_namespace.clone()),
        ("GitHub repo", github_repo),
        ("Mirror state", MirrorState::of(status).as_str().to_string()),
        ("Mirror configured", format_bool(status.mirror_configured)),
        ("Mirror enabled", format_bool(status.mirror_enabled)),
        ("Last mirror push", format_time(status.last_mirror_push_at)),
        (
            "Last push succeeded",
            format_opt_bool(status.last_push_succeeded),
        ),
        ("Last source commit", format_time(status.last_source_commit_at)),
        ("Up to date", format_opt_bool(status.is_up_to_date())),
        ("Other mirror", format_bool(status.has_other_mirror)),
        (
            "Description matches template",
            format_opt_bool(status.description_matches_template),
        ),
        (
            "Description empty",
            format_opt_bool(status.description_is_empty),
        ),
    ]
    .into_iter()
    .map(|(key, value)| DetailRow {
        key: key.to_string(),
        value,
    })
    .collect()
}

/// Print the status of a single repository
pub fn print_detail(repo: &SourceRepo, status: &MirrorStatus) {
    println!("{}\n", format_table(detail_rows(repo, status)));
}
