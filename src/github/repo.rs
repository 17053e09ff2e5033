//! GitHub wire types
use serde::Deserialize;

/// A GitHub repository, as returned by the user repositories API.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct GithubRepo {
    /// Full "namespace/name" slug
    pub full_name: String,

    /// Whether the repository is a fork
    pub fork: bool,
}
