//! Github Repo struct and conversion to DestinationRepo struct
use crate::{
    platform::{NewRepo, RepoEdition},
    utils::DestinationRepo,
};
use serde::{Deserialize, Serialize};

/// Github Repo
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct RepoGithub {
    /// Repository ID
    pub id: u64,

    /// Repository name
    pub name: String,

    /// Repository full name (`owner/name`)
    pub full_name: String,

    /// Repository description
    pub description: Option<String>,

    /// Repository homepage
    pub homepage: Option<String>,

    /// Repository fork status
    pub fork: bool,
}

/// Payload creating a Github repo
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RepoGithubCreation {
    /// Repository name
    pub name: String,

    /// Repository description
    pub description: String,

    /// Repository homepage
    pub homepage: String,

    /// Repository private status
    pub private: bool,

    /// Whether the wiki is enabled
    pub has_wiki: bool,

    /// Whether projects are enabled
    pub has_projects: bool,
}

/// Payload editing a Github repo
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RepoGithubEdition {
    /// Repository description
    pub description: String,

    /// Repository homepage
    pub homepage: String,
}

impl From<RepoGithub> for DestinationRepo {
    fn from(repo: RepoGithub) -> Self {
        DestinationRepo {
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description,
            homepage: repo.homepage,
            fork: repo.fork,
        }
    }
}

impl From<&NewRepo> for RepoGithubCreation {
    fn from(repo: &NewRepo) -> Self {
        RepoGithubCreation {
            name: repo.name.clone(),
            description: repo.description.clone(),
            homepage: repo.homepage.clone(),
            private: false,
            has_wiki: false,
            has_projects: false,
        }
    }
}

impl From<&RepoEdition> for RepoGithubEdition {
    fn from(edition: &RepoEdition) -> Self {
        RepoGithubEdition {
            description: edition.description.clone(),
            homepage: edition.homepage.clone(),
        }
    }
}
