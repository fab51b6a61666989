//! # mirrormaker
//!
//! Create and check GitHub push mirrors of your GitLab repositories
//!
//! For every public repository of a GitLab user, mirrormaker checks whether a GitHub
//! repository and a GitLab push mirror to it exist, and creates the missing ones.
//!
//! ## Usage
//!
//! ```txt
//! Usage: mirrormaker [OPTIONS] --github-token <GITHUB_TOKEN> --gitlab-token <GITLAB_TOKEN> <COMMAND>
//!
//! Commands:
//!   list    List repositories and their mirror status
//!   mirror  Set up mirroring of repositories from GitLab to GitHub
//!   show    Show the mirror status of a single repository
//!   help    Print this message or the help of the given subcommand(s)
//!
//! Options:
//!       --github-token <GITHUB_TOKEN>  GitHub authentication token [env: MIRRORMAKER_GITHUB_TOKEN]
//!       --gitlab-token <GITLAB_TOKEN>  GitLab authentication token [env: MIRRORMAKER_GITLAB_TOKEN]
//!       --github-user <GITHUB_USER>    GitHub username [env: MIRRORMAKER_GITHUB_USER=]
//!       --gitlab-url <GITLAB_URL>      GitLab instance URL [env: MIRRORMAKER_GITLAB_URL=] [default: https://gitlab.com]
//!   -v, --verbose...                   Verbose mode (-v, -vv)
//!   -h, --help                         Print help
//!   -V, --version                      Print version
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![warn(clippy::multiple_crate_versions)]

pub mod actions;
pub(crate) mod cli;
pub(crate) mod config;
pub mod errors;
pub mod platform;
pub mod report;
pub mod status;
pub mod sync;
pub mod utils;

mod github;
mod gitlab;

pub use cli::{mirrormaker_main, Command, MirrorMakerCli};
pub use config::MirrorMakerConfig;
pub use errors::{MirrorMakerError, MirrorMakerErrorKind};
