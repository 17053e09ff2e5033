//! # mirror-maker
//!
//! Mirror your GitLab repositories to GitHub
//!
//! ## Usage
//!
//! ```txt
//! Usage: mirror-maker [OPTIONS] --github-token <GITHUB_TOKEN> --gitlab-token <GITLAB_TOKEN> [REPO]
//!
//! Arguments:
//!   [REPO]  Mirror a single repository given as "name" or "namespace/name"
//!
//! Options:
//!       --github-token <GITHUB_TOKEN>  GitHub authentication token [env: MIRRORMAKER_GITHUB_TOKEN]
//!       --gitlab-token <GITLAB_TOKEN>  GitLab authentication token [env: MIRRORMAKER_GITLAB_TOKEN]
//!       --github-user <GITHUB_USER>    GitHub username. If not provided your GitLab username will be used
//!       --dry-run                      Only print the mirror status summary, don't create anything
//!       --no-dry-run                   Cancel a previously set --dry-run
//!       --target-forks                 Also count forked GitHub repositories as mirror targets
//!   -v, --verbose...                   Verbose mode (-v, -vv)
//!   -h, --help                         Print help
//! ```
//!
//! Every option can also be set through an environment variable prefixed with
//! `MIRRORMAKER_` (eg. `MIRRORMAKER_GITHUB_TOKEN`). A `.env` file in the
//! working directory is loaded before parsing.

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
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod platform;
pub(crate) mod status;
pub(crate) mod summary;
pub(crate) mod sync;

mod github;
mod gitlab;

pub use cli::{mirror_maker_main, MirrorMakerCli};
pub use config::MirrorMakerConfig;
pub use errors::MirrorMakerError;
pub use sync::main_sync;
