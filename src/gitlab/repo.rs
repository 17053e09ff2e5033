//! GitLab wire types
use serde::Deserialize;

/// A GitLab repository (project), as returned by the projects API.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct GitlabRepo {
    /// Project id
    pub id: u64,

    /// Display name
    pub name: String,

    /// URL path segment of the repository. Differs from `name` when the
    /// repository has been renamed; this is the routable identifier and the
    /// one used for the mirror target.
    pub path: String,

    /// Full "namespace/name" slug
    pub path_with_namespace: String,

    /// Repository description
    pub description: Option<String>,

    /// Repository home URL
    pub web_url: String,

    /// Owner of the repository
    pub owner: GitlabOwner,
}

/// Owner of a GitLab repository.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct GitlabOwner {
    /// Owner username
    pub username: String,
}

/// A configured push mirror of a GitLab repository.
///
/// The mirror URL may embed credentials (the GitLab API masks them on read,
/// but they are present on write). It must never be logged.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Mirror {
    /// Mirror target URL; null or empty for a broken mirror entry
    pub url: Option<String>,
}

/// The authenticated GitLab user.
#[derive(Deserialize, Default, Debug, Clone)]
pub struct GitlabUser {
    /// Username, used to resolve bare repository names to a full slug
    pub username: String,
}
