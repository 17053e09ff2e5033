//! Command line options for the mirror-maker tool
use crate::{config::MirrorMakerConfig, errors::MirrorMakerError, sync::main_sync};
use clap::Parser;

/// mirror-maker - Mirror your GitLab repositories to GitHub
#[derive(Parser, Default, Clone, Debug)]
#[command(about, long_about = None)]
pub struct MirrorMakerCli {
    /// GitHub authentication token
    #[arg(long, env = "MIRRORMAKER_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// GitLab authentication token
    #[arg(long, env = "MIRRORMAKER_GITLAB_TOKEN", hide_env_values = true)]
    pub gitlab_token: String,

    /// GitHub username. If not provided your GitLab username will be used
    #[arg(long, env = "MIRRORMAKER_GITHUB_USER")]
    pub github_user: Option<String>,

    /// Only print the mirror status summary, don't create anything
    #[arg(long, env = "MIRRORMAKER_DRY_RUN", overrides_with = "no_dry_run")]
    pub dry_run: bool,

    /// Cancel a previously set --dry-run (eg. from the environment)
    #[arg(long = "no-dry-run")]
    pub no_dry_run: bool,

    /// Also count forked GitHub repositories as mirror targets
    #[arg(long, env = "MIRRORMAKER_TARGET_FORKS")]
    pub target_forks: bool,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Mirror a single repository given as "name" or "namespace/name"
    pub repo: Option<String>,
}

/// Run the mirror-maker tool with the provided command line options
/// # Errors
/// Error if the run fails
pub async fn mirror_maker_main() -> Result<(), MirrorMakerError> {
    dotenv::dotenv().ok();
    let args = MirrorMakerCli::parse();
    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .init();
    let config = MirrorMakerConfig::from_cli(args);
    main_sync(&config).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::missing_docs_in_private_items)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = MirrorMakerCli::try_parse_from([
            "mirror-maker",
            "--github-token",
            "gh",
            "--gitlab-token",
            "gl",
        ])
        .unwrap();
        assert_eq!(cli.github_token, "gh");
        assert_eq!(cli.gitlab_token, "gl");
        assert!(cli.github_user.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.target_forks);
        assert!(cli.repo.is_none());
    }

    #[test]
    fn test_parse_single_repo_mode() {
        let cli = MirrorMakerCli::try_parse_from([
            "mirror-maker",
            "--github-token",
            "gh",
            "--gitlab-token",
            "gl",
            "--github-user",
            "grdl",
            "--dry-run",
            "grdl/one",
        ])
        .unwrap();
        assert_eq!(cli.github_user.as_deref(), Some("grdl"));
        assert!(cli.dry_run);
        assert_eq!(cli.repo.as_deref(), Some("grdl/one"));
    }

    #[test]
    fn test_no_dry_run_overrides() {
        let cli = MirrorMakerCli::try_parse_from([
            "mirror-maker",
            "--github-token",
            "gh",
            "--gitlab-token",
            "gl",
            "--dry-run",
            "--no-dry-run",
        ])
        .unwrap();
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_tokens_are_required() {
        assert!(MirrorMakerCli::try_parse_from(["mirror-maker"]).is_err());
    }
}
