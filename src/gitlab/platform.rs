//! Gitlab Platform
use super::{
    repo::{GitlabCommit, GitlabMirror, GitlabMirrorCreation, GitlabRepo, GitlabUser},
    GITLAB_API_PATH, GITLAB_PER_PAGE,
};
use crate::{
    config::{endpoint, MirrorMakerConfig},
    errors::{MirrorMakerError, MirrorMakerErrorKind},
    platform::{PlatformFuture, PlatformType, SourcePlatform},
    utils::{redact_url, split_shorthand, Mirror, SourceRepo},
};
use log::{debug, info};
use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Method, RequestBuilder, Response, StatusCode,
};
use url::Url;
use urlencoding::encode;

/// Gitlab Platform
#[derive(Debug, Clone)]
pub struct GitlabPlatform {
    /// Base URL of the instance
    base_url: Url,

    /// Gitlab token
    token: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl GitlabPlatform {
    /// Create a new GitlabPlatform
    pub(crate) fn new(config: &MirrorMakerConfig) -> Self {
        Self {
            base_url: config.gitlab_url.clone(),
            token: config.gitlab_token.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Authenticated request to an API path
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = endpoint(&self.base_url, &format!("{GITLAB_API_PATH}{path}"));
        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/json")
    }

    /// Turn a non-success response into an error of the given kind
    async fn check(
        response: Response,
        kind: MirrorMakerErrorKind,
    ) -> Result<Response, MirrorMakerError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let text = response.text().await?;
        Err(MirrorMakerError::new(kind)
            .with_platform(PlatformType::Gitlab)
            .with_text(&format!("{status} - {text}")))
    }
}

impl SourcePlatform for GitlabPlatform {
    fn get_remote_url(&self) -> &str {
        self.base_url.host_str().unwrap_or_default()
    }

    fn get_current_user(&self) -> PlatformFuture<'_, String> {
        Box::pin(async move {
            let response = self.request(Method::GET, "/user").send().await?;
            let response = Self::check(response, MirrorMakerErrorKind::GetUser).await?;
            let text = response.text().await?;
            let user: GitlabUser = serde_json::from_str(&text)?;
            Ok(user.username)
        })
    }

    fn get_all_repos(&self) -> PlatformFuture<'_, Vec<SourceRepo>> {
        Box::pin(async move {
            let mut page: usize = 1;
            let mut all_repos = vec![];
            loop {
                let response = self
                    .request(Method::GET, "/projects")
                    .query(&[
                        ("visibility", "public"),
                        ("owned", "true"),
                        ("archived", "false"),
                        ("per_page", GITLAB_PER_PAGE),
                        ("page", &page.to_string()),
                    ])
                    .send()
                    .await?;
                let response = Self::check(response, MirrorMakerErrorKind::GetAllRepos).await?;
                let text = response.text().await?;
                let repos: Vec<GitlabRepo> = serde_json::from_str(&text)?;
                debug!("Requested gitlab (page {}): {}", page, repos.len());
                if repos.is_empty() {
                    break;
                }
                all_repos.extend(repos.into_iter().map(SourceRepo::from));
                page += 1;
            }
            Ok(all_repos)
        })
    }

    fn get_repo_by_shorthand<'a>(&'a self, shorthand: &'a str) -> PlatformFuture<'a, SourceRepo> {
        Box::pin(async move {
            let path = match split_shorthand(shorthand) {
                (Some(namespace), name) => format!("{namespace}/{name}"),
                (None, name) => format!("{}/{}", self.get_current_user().await?, name),
            };
            let response = self
                .request(Method::GET, &format!("/projects/{}", encode(&path)))
                .send()
                .await?;
            if response.status() == StatusCode::NOT_FOUND {
                return Err(MirrorMakerError::new(MirrorMakerErrorKind::RepoNotFound)
                    .with_platform(PlatformType::Gitlab)
                    .with_text(&path));
            }
            let response = Self::check(response, MirrorMakerErrorKind::GetRepo).await?;
            let text = response.text().await?;
            let repo: GitlabRepo = serde_json::from_str(&text)?;
            Ok(repo.into())
        })
    }

    fn get_mirrors<'a>(&'a self, repo: &'a SourceRepo) -> PlatformFuture<'a, Vec<Mirror>> {
        Box::pin(async move {
            let response = self
                .request(Method::GET, &format!("/projects/{}/remote_mirrors", repo.id))
                .send()
                .await?;
            let response = Self::check(response, MirrorMakerErrorKind::GetMirrors).await?;
            let text = response.text().await?;
            let mirrors: Vec<GitlabMirror> = serde_json::from_str(&text)?;
            Ok(mirrors.into_iter().map(Mirror::from).collect())
        })
    }

    fn get_last_commit_at<'a>(
        &'a self,
        repo: &'a SourceRepo,
    ) -> PlatformFuture<'a, Option<chrono::DateTime<chrono::Utc>>> {
        Box::pin(async move {
            let response = self
                .request(
                    Method::GET,
                    &format!("/projects/{}/repository/commits", repo.id),
                )
                .query(&[("per_page", "1")])
                .send()
                .await?;
            let response = Self::check(response, MirrorMakerErrorKind::GetCommits).await?;
            let text = response.text().await?;
            let commits: Vec<GitlabCommit> = serde_json::from_str(&text)?;
            Ok(commits.into_iter().next().map(|c| c.committed_date))
        })
    }

    fn create_mirror<'a>(&'a self, repo: &'a SourceRepo, url: &'a str) -> PlatformFuture<'a, ()> {
        Box::pin(async move {
            info!(
                "Creating mirror of {} to {}",
                repo.path_with_namespace,
                redact_url(url)
            );
            let json_body = GitlabMirrorCreation {
                url: url.to_string(),
                enabled: true,
            };
            let response = self
                .request(Method::POST, &format!("/projects/{}/remote_mirrors", repo.id))
                .json(&json_body)
                .send()
                .await?;
            Self::check(response, MirrorMakerErrorKind::MirrorCreation).await?;
            Ok(())
        })
    }
}
