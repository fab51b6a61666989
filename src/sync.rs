//! Fetch the repositories of both platforms and run the operations of the tool
use log::{debug, info};

use crate::{
    actions::{plan_and_execute, Action},
    errors::MirrorMakerError,
    platform::{DestinationPlatform, SourcePlatform},
    report::{print_detail, print_summary_table},
    status::{resolve, MirrorStatus},
    utils::{filter_forks, progress_bar, DestinationRepo, SourceRepo},
};

/// Statuses of the source repositories, in the order the source platform returned them
pub type MirrorStatuses = Vec<(SourceRepo, MirrorStatus)>;

/// Options of the mirror operation
#[derive(Debug, Default, Clone)]
pub struct MirrorOptions {
    /// Allow forks as target repos for pushing
    pub target_forks: bool,

    /// Overwrite descriptions that differ from the template
    pub force_update_metadata: bool,

    /// Only print what would be done
    pub dry_run: bool,
}

/// Source repositories (all of them, or the one named by `shorthand`) and destination
/// repositories, without forks unless `include_forks` is set
async fn get_repos(
    source: &dyn SourcePlatform,
    destination: &dyn DestinationPlatform,
    shorthand: Option<&str>,
    include_forks: bool,
) -> Result<(Vec<SourceRepo>, Vec<DestinationRepo>), MirrorMakerError> {
    let source_repos = match shorthand {
        Some(shorthand) => vec![source.get_repo_by_shorthand(shorthand).await?],
        None => {
            info!("Getting your public repositories on {}", source.get_remote_url());
            source.get_all_repos().await?
        }
    };
    if source_repos.is_empty() {
        return Ok((source_repos, vec![]));
    }

    info!(
        "Getting the repositories of {} on {}",
        destination.get_username(),
        destination.get_remote_url()
    );
    let all_destination_repos = destination.get_all_repos().await?;
    let total = all_destination_repos.len();
    let (destination_repos, forks) = filter_forks(all_destination_repos, include_forks);
    debug!("Number of repos in source: {}", source_repos.len());
    debug!("Number of repos in destination: {total}");
    debug!("- Number of excluded forks in destination: {}", forks.len());
    Ok((source_repos, destination_repos))
}

/// Resolve the status of every source repository
async fn get_mirror_statuses(
    source: &dyn SourcePlatform,
    destination: &dyn DestinationPlatform,
    source_repos: Vec<SourceRepo>,
    destination_repos: &[DestinationRepo],
) -> Result<MirrorStatuses, MirrorMakerError> {
    let pb = progress_bar(source_repos.len(), "Checking mirrors status");
    let mut statuses = Vec::with_capacity(source_repos.len());
    for source_repo in source_repos {
        let status = resolve(
            source,
            &source_repo,
            destination_repos,
            destination.get_username(),
        )
        .await?;
        statuses.push((source_repo, status));
        pb.inc(1);
    }
    pb.finish_and_clear();
    Ok(statuses)
}

/// Fetch the repositories and resolve their statuses
async fn collect_statuses(
    source: &dyn SourcePlatform,
    destination: &dyn DestinationPlatform,
    shorthand: Option<&str>,
    include_forks: bool,
) -> Result<MirrorStatuses, MirrorMakerError> {
    let (source_repos, destination_repos) =
        get_repos(source, destination, shorthand, include_forks).await?;
    if source_repos.is_empty() {
        println!(
            "There are no public repositories in your {} account.",
            source.get_remote_url()
        );
        return Ok(vec![]);
    }
    get_mirror_statuses(source, destination, source_repos, &destination_repos).await
}

/// List repositories and their mirror status
/// # Errors
/// Error if a platform call fails
pub async fn list_repos_and_mirrors(
    source: &dyn SourcePlatform,
    destination: &dyn DestinationPlatform,
    shorthand: Option<&str>,
) -> Result<MirrorStatuses, MirrorMakerError> {
    let statuses = collect_statuses(source, destination, shorthand, true).await?;
    if !statuses.is_empty() {
        print_summary_table(&statuses);
    }
    Ok(statuses)
}

/// Set up the missing repositories and mirrors
/// # Errors
/// Error if a platform call fails
pub async fn mirror(
    source: &dyn SourcePlatform,
    destination: &dyn DestinationPlatform,
    shorthand: Option<&str>,
    options: &MirrorOptions,
) -> Result<Vec<Action>, MirrorMakerError> {
    let statuses = collect_statuses(source, destination, shorthand, options.target_forks).await?;
    if statuses.is_empty() {
        return Ok(vec![]);
    }
    print_summary_table(&statuses);
    let actions = plan_and_execute(
        &statuses,
        source,
        destination,
        options.dry_run,
        options.force_update_metadata,
    )
    .await?;
    println!("Done!");
    Ok(actions)
}

/// Show the status of a single repository
/// # Errors
/// Error if the repository can't be found or a platform call fails
pub async fn show(
    source: &dyn SourcePlatform,
    destination: &dyn DestinationPlatform,
    shorthand: &str,
) -> Result<MirrorStatus, MirrorMakerError> {
    let source_repo = source.get_repo_by_shorthand(shorthand).await?;
    let destination_repos = destination.get_all_repos().await?;
    let status = resolve(
        source,
        &source_repo,
        &destination_repos,
        destination.get_username(),
    )
    .await?;
    print_detail(&source_repo, &status);
    Ok(status)
}
