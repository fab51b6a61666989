//! Github Platform
use super::{
    repo::{RepoGithub, RepoGithubCreation, RepoGithubEdition},
    GITHUB_API_HEADER, GITHUB_API_VERSION, GITHUB_PER_PAGE, GITHUB_URL,
};
use crate::{
    config::{endpoint, MirrorMakerConfig},
    errors::{MirrorMakerError, MirrorMakerErrorKind},
    platform::{DestinationPlatform, NewRepo, PlatformFuture, PlatformType, RepoEdition},
    utils::{split_shorthand, DestinationRepo},
};
use log::{debug, info, warn};
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
    Method, RequestBuilder, StatusCode,
};
use url::Url;
use urlencoding::encode;

/// Github Platform
#[derive(Debug, Clone)]
pub struct GithubPlatform {
    /// Base URL of the API
    api_url: Url,

    /// Github username
    username: String,

    /// Github token
    token: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl GithubPlatform {
    /// Create a new GithubPlatform
    pub(crate) fn new(config: &MirrorMakerConfig, username: String) -> Self {
        Self {
            api_url: config.github_api_url.clone(),
            username,
            token: config.github_token.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Authenticated request to an API path
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, endpoint(&self.api_url, path))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, env!("CARGO_PKG_NAME"))
            .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
    }
}

/// API path of a repository slug
fn repo_path(slug: &str) -> String {
    match split_shorthand(slug) {
        (Some(owner), name) => format!("/repos/{}/{}", encode(owner), encode(name)),
        (None, name) => format!("/repos/{}", encode(name)),
    }
}

/// Error of the given kind carrying the response body
fn response_error(kind: MirrorMakerErrorKind, status: StatusCode, text: &str) -> MirrorMakerError {
    MirrorMakerError::new(kind)
        .with_platform(PlatformType::Github)
        .with_text(&format!("{status} - {text}"))
}

impl DestinationPlatform for GithubPlatform {
    fn get_remote_url(&self) -> &str {
        GITHUB_URL
    }

    fn get_username(&self) -> &str {
        &self.username
    }

    fn mirror_push_url(&self, path: &str) -> String {
        format!(
            "https://{user}:{token}@{GITHUB_URL}/{user}/{path}.git",
            user = self.username,
            token = self.token,
        )
    }

    fn get_all_repos(&self) -> PlatformFuture<'_, Vec<DestinationRepo>> {
        Box::pin(async move {
            let path = format!("/users/{}/repos", encode(&self.username));
            let mut page: usize = 1;
            let mut all_repos = vec![];
            loop {
                let response = self
                    .request(Method::GET, &path)
                    .query(&[
                        ("type", "owner"),
                        ("per_page", GITHUB_PER_PAGE),
                        ("page", &page.to_string()),
                    ])
                    .send()
                    .await?;
                let status = response.status();
                let text = response.text().await?;
                if !status.is_success() {
                    return Err(response_error(
                        MirrorMakerErrorKind::GetAllRepos,
                        status,
                        &text,
                    ));
                }
                let repos: Vec<RepoGithub> = serde_json::from_str(&text)?;
                debug!("Requested github (page {}): {}", page, repos.len());
                if repos.is_empty() {
                    break;
                }
                all_repos.extend(repos.into_iter().map(DestinationRepo::from));
                page += 1;
            }
            Ok(all_repos)
        })
    }

    fn find_repo<'a>(&'a self, slug: &'a str) -> PlatformFuture<'a, Option<DestinationRepo>> {
        Box::pin(async move {
            let response = self.request(Method::GET, &repo_path(slug)).send().await?;
            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Ok(None);
            }
            let text = response.text().await?;
            if !status.is_success() {
                return Err(response_error(MirrorMakerErrorKind::GetRepo, status, &text));
            }
            let repo: RepoGithub = serde_json::from_str(&text)?;
            Ok(Some(repo.into()))
        })
    }

    fn create_repo<'a>(&'a self, repo: &'a NewRepo) -> PlatformFuture<'a, ()> {
        Box::pin(async move {
            info!("Creating GitHub repo {}/{}", self.username, repo.name);
            let response = self
                .request(Method::POST, "/user/repos")
                .json(&RepoGithubCreation::from(repo))
                .send()
                .await?;
            let status = response.status();
            if status.is_success() {
                return Ok(());
            }
            let text = response.text().await?;
            let slug = format!("{}/{}", self.username, repo.name);
            match self.find_repo(&slug).await? {
                Some(existing) if !existing.fork => {
                    warn!("GitHub repo {slug} already exists, not creating it");
                    Ok(())
                }
                _ => Err(response_error(
                    MirrorMakerErrorKind::RepoCreation,
                    status,
                    &text,
                )),
            }
        })
    }

    fn edit_repo<'a>(
        &'a self,
        slug: &'a str,
        edition: &'a RepoEdition,
    ) -> PlatformFuture<'a, ()> {
        Box::pin(async move {
            info!("Updating description of GitHub repo {slug}");
            let response = self
                .request(Method::PATCH, &repo_path(slug))
                .json(&RepoGithubEdition::from(edition))
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                let text = response.text().await?;
                return Err(response_error(
                    MirrorMakerErrorKind::RepoEdition,
                    status,
                    &text,
                ));
            }
            Ok(())
        })
    }
}
