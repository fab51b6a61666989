//! Command line options for the mirrormaker tool
use clap::{Parser, Subcommand};

use crate::{
    config::{MirrorMakerConfig, DEFAULT_GITHUB_API_URL, DEFAULT_GITLAB_URL},
    errors::MirrorMakerError,
    github::platform::GithubPlatform,
    gitlab::platform::GitlabPlatform,
    platform::SourcePlatform,
    sync::{list_repos_and_mirrors, mirror, show, MirrorOptions},
};

/// mirrormaker - Create GitHub push mirrors of your GitLab repositories
#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct MirrorMakerCli {
    /// GitHub authentication token
    #[arg(long, env = "MIRRORMAKER_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// GitLab authentication token
    #[arg(long, env = "MIRRORMAKER_GITLAB_TOKEN", hide_env_values = true)]
    pub gitlab_token: String,

    /// GitHub username. If not provided, your GitLab username will be used by default.
    #[arg(long, env = "MIRRORMAKER_GITHUB_USER")]
    pub github_user: Option<String>,

    /// GitLab instance URL
    #[arg(long, env = "MIRRORMAKER_GITLAB_URL", default_value = DEFAULT_GITLAB_URL)]
    pub gitlab_url: String,

    /// GitHub API URL
    #[arg(long, env = "MIRRORMAKER_GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL, hide = true)]
    pub github_api_url: String,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations of the tool
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List repositories and their mirror status.
    List {
        /// Specific repository to list.
        repo: Option<String>,
    },

    /// Set up mirroring of repositories from GitLab to GitHub.
    ///
    /// By default, mirrors for all repositories owned by the user will be set up.
    /// REPO can be either a simple project name ("myproject"), in which case its
    /// namespace is assumed to be the current user, or the path of a project under
    /// a specific namespace ("mynamespace/myproject").
    Mirror {
        /// Allow forks as target repos for pushing.
        #[arg(long)]
        target_forks: bool,

        /// Overwrite the description of existing GitHub repos when it differs from the template.
        #[arg(long)]
        force_update_metadata: bool,

        /// If enabled, a summary will be printed and no mirrors will be created.
        #[arg(long)]
        dry_run: bool,

        /// Specific repository to set up mirror for. If unspecified, mirrors will be created for all repos.
        repo: Option<String>,
    },

    /// Show the mirror status of a single repository.
    Show {
        /// Repository to show ("myproject" or "mynamespace/myproject").
        repo: String,
    },
}

/// Run the mirrormaker tool with the provided command line options
/// # Errors
/// Error if any platform call fails
pub async fn mirrormaker_main(args: MirrorMakerCli) -> Result<(), MirrorMakerError> {
    let config = MirrorMakerConfig::try_new(&args)?;
    let gitlab = GitlabPlatform::new(&config);
    let github_user = match &config.github_user {
        Some(user) => user.clone(),
        None => {
            let user = gitlab.get_current_user().await?;
            log::debug!("No GitHub user given, using GitLab user '{user}'");
            user
        }
    };
    let github = GithubPlatform::new(&config, github_user);

    match args.command {
        Command::List { repo } => {
            list_repos_and_mirrors(&gitlab, &github, repo.as_deref()).await?;
        }
        Command::Mirror {
            target_forks,
            force_update_metadata,
            dry_run,
            repo,
        } => {
            let options = MirrorOptions {
                target_forks,
                force_update_metadata,
                dry_run,
            };
            mirror(&gitlab, &github, repo.as_deref(), &options).await?;
        }
        Command::Show { repo } => {
            show(&gitlab, &github, &repo).await?;
        }
    }
    Ok(())
}
