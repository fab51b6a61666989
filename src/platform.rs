//! Platform abstractions for the source and destination of the mirrors
use std::{future::Future, pin::Pin};

use chrono::{DateTime, Utc};

use crate::{
    errors::MirrorMakerError,
    utils::{DestinationRepo, Mirror, SourceRepo},
};

/// Boxed future returned by the platform methods
pub type PlatformFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, MirrorMakerError>> + Send + 'a>>;

/// Platform hosting the repositories to mirror
pub trait SourcePlatform: Sync + Send {
    /// Username of the authenticated user
    fn get_current_user(&self) -> PlatformFuture<'_, String>;

    /// Public, non-archived repositories owned by the authenticated user
    fn get_all_repos(&self) -> PlatformFuture<'_, Vec<SourceRepo>>;

    /// Resolve a single repository from a `name` or `namespace/name` shorthand
    fn get_repo_by_shorthand<'a>(&'a self, shorthand: &'a str) -> PlatformFuture<'a, SourceRepo>;

    /// Push mirrors configured on a repository
    fn get_mirrors<'a>(&'a self, repo: &'a SourceRepo) -> PlatformFuture<'a, Vec<Mirror>>;

    /// Timestamp of the most recent commit, absent for an empty repository
    fn get_last_commit_at<'a>(
        &'a self,
        repo: &'a SourceRepo,
    ) -> PlatformFuture<'a, Option<DateTime<Utc>>>;

    /// Create an enabled push mirror of `repo` pushing to `url`
    fn create_mirror<'a>(&'a self, repo: &'a SourceRepo, url: &'a str) -> PlatformFuture<'a, ()>;

    /// Host of the platform
    fn get_remote_url(&self) -> &str;
}

/// Platform receiving the mirrors
pub trait DestinationPlatform: Sync + Send {
    /// Repositories under the target namespace
    fn get_all_repos(&self) -> PlatformFuture<'_, Vec<DestinationRepo>>;

    /// Find a repository by its slug (`namespace/name`)
    fn find_repo<'a>(&'a self, slug: &'a str) -> PlatformFuture<'a, Option<DestinationRepo>>;

    /// Create a repository under the target namespace
    fn create_repo<'a>(&'a self, repo: &'a NewRepo) -> PlatformFuture<'a, ()>;

    /// Overwrite the description and homepage of a repository
    fn edit_repo<'a>(&'a self, slug: &'a str, edition: &'a RepoEdition)
        -> PlatformFuture<'a, ()>;

    /// URL (with credentials) a source platform pushes to for the repository `path`
    fn mirror_push_url(&self, path: &str) -> String;

    /// Namespace the repositories are created under
    fn get_username(&self) -> &str;

    /// Host of the platform
    fn get_remote_url(&self) -> &str;
}

/// Repository to create on the destination platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepo {
    /// Name of the repository
    pub name: String,

    /// Description of the repository
    pub description: String,

    /// Homepage of the repository
    pub homepage: String,
}

/// Metadata to overwrite on a destination repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEdition {
    /// New description
    pub description: String,

    /// New homepage
    pub homepage: String,
}

/// Supported platforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformType {
    /// GitLab, the source of the mirrors
    Gitlab,
    /// GitHub, the destination of the mirrors
    Github,
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformType::Gitlab => write!(f, "gitlab"),
            PlatformType::Github => write!(f, "github"),
        }
    }
}
