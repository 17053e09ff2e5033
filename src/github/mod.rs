//! GitHub API module.
pub(crate) mod platform;
pub(crate) mod repo;

/// GitHub URL, the host mirror targets point at
pub(crate) const GITHUB_URL: &str = "github.com";

/// GitHub API URL
const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub API Header
const GITHUB_API_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API Version
const GITHUB_API_VERSION: &str = "2022-11-28";
