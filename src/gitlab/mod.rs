//! GitLab API module.
pub(crate) mod platform;
pub(crate) mod repo;

/// GitLab API URL
const GITLAB_API_URL: &str = "https://gitlab.com/api/v4";
