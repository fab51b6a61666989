//! GitLab API module.
pub(crate) mod platform;
pub(crate) mod repo;

/// GitLab API path prefix
const GITLAB_API_PATH: &str = "/api/v4";

/// Number of items requested per page
const GITLAB_PER_PAGE: &str = "100";
