//! Configuration handling
use url::Url;

use crate::{
    cli::MirrorMakerCli,
    errors::{MirrorMakerError, MirrorMakerErrorKind},
};

/// Default GitLab instance
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

/// Default GitHub API endpoint
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Configuration passed to the platform clients
#[derive(Clone, Debug)]
pub struct MirrorMakerConfig {
    /// GitLab token
    pub gitlab_token: String,

    /// GitHub token
    pub github_token: String,

    /// GitHub username, the GitLab username is used when absent
    pub github_user: Option<String>,

    /// Base URL of the GitLab instance
    pub gitlab_url: Url,

    /// Base URL of the GitHub API
    pub github_api_url: Url,
}

impl MirrorMakerConfig {
    /// Build the configuration from the command line options
    /// # Errors
    /// Error if a token is empty or a base URL is not valid
    pub fn try_new(cli_args: &MirrorMakerCli) -> Result<Self, MirrorMakerError> {
        if cli_args.github_token.trim().is_empty() {
            return Err("the GitHub token is empty".into());
        }
        if cli_args.gitlab_token.trim().is_empty() {
            return Err("the GitLab token is empty".into());
        }
        let github_user = cli_args
            .github_user
            .clone()
            .filter(|user| !user.trim().is_empty());
        Ok(Self {
            gitlab_token: cli_args.gitlab_token.clone(),
            github_token: cli_args.github_token.clone(),
            github_user,
            gitlab_url: parse_base_url(&cli_args.gitlab_url)?,
            github_api_url: parse_base_url(&cli_args.github_api_url)?,
        })
    }
}

/// Parse a base URL, dropping any trailing slash
fn parse_base_url(url: &str) -> Result<Url, MirrorMakerError> {
    let url = Url::parse(url.trim_end_matches('/'))?;
    if url.cannot_be_a_base() {
        return Err(MirrorMakerError::new(MirrorMakerErrorKind::Config)
            .with_text(&format!("'{url}' is not a valid base URL")));
    }
    Ok(url)
}

/// Join a path to a base URL, keeping the path of the base (self-hosted instances)
pub(crate) fn endpoint(base: &Url, path: &str) -> String {
    format!("{}{}", base.as_str().trim_end_matches('/'), path)
}
