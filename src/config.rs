//! Run configuration
use crate::cli::MirrorMakerCli;

/// Configuration for a single mirroring run.
///
/// Built once from the command line (and its environment fallbacks) and
/// passed by reference into the clients and the run loop. Tokens live here
/// and nowhere else.
#[derive(Default, Clone, Debug)]
pub struct MirrorMakerConfig {
    /// GitHub token
    pub github_token: String,

    /// GitLab token
    pub gitlab_token: String,

    /// GitHub username the mirrors are created under, when different from
    /// the GitLab repository owner
    pub github_user: Option<String>,

    /// Only report, don't create repositories or mirrors
    pub dry_run: bool,

    /// Count forked GitHub repositories as valid mirror targets
    pub target_forks: bool,

    /// Single-repository mode: a "name" or "namespace/name" slug
    pub repo: Option<String>,
}

impl MirrorMakerConfig {
    /// Build the run configuration from parsed command line options
    pub fn from_cli(cli: MirrorMakerCli) -> Self {
        MirrorMakerConfig {
            github_token: cli.github_token,
            gitlab_token: cli.gitlab_token,
            github_user: cli.github_user,
            dry_run: cli.dry_run,
            target_forks: cli.target_forks,
            repo: cli.repo,
        }
    }
}
