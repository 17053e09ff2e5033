//! GitHub client: repository directory and repository creation.
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Serialize;

use super::{GITHUB_API_HEADER, GITHUB_API_URL, GITHUB_API_VERSION};
use crate::errors::{MirrorMakerError, MirrorMakerErrorKind};
use crate::github::repo::GithubRepo;
use crate::gitlab::repo::GitlabRepo;
use crate::platform::PlatformType;

/// GitHub API client.
#[derive(Default, Debug, Clone)]
pub struct GithubPlatform {
    /// GitHub token
    token: String,

    /// Keep forked repositories in the directory listing
    target_forks: bool,

    /// API root, overridable for tests
    api_url: String,

    /// Reqwest client
    client: reqwest::Client,
}

/// Request body for the repository creation endpoint.
#[derive(Serialize, Debug)]
struct CreateRepoBody {
    /// Repository name (the GitLab `path`, not the display name)
    name: String,

    /// Description, suffixed with " [mirror]"
    description: String,

    /// Home URL of the mirrored GitLab repository
    homepage: String,

    /// Mirrors are always public
    private: bool,

    /// Wiki disabled on mirrors
    has_wiki: bool,

    /// Projects disabled on mirrors
    has_projects: bool,
}

impl GithubPlatform {
    /// Create a new GithubPlatform
    pub(crate) fn new(token: String, target_forks: bool) -> Self {
        Self {
            token,
            target_forks,
            api_url: GITHUB_API_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a GithubPlatform pointed at a custom API root.
    #[cfg(test)]
    pub(crate) fn with_api_url(token: String, target_forks: bool, api_url: String) -> Self {
        Self {
            token,
            target_forks,
            api_url,
            client: reqwest::Client::new(),
        }
    }

    /// Find all public GitHub repositories of the authenticated user.
    ///
    /// Forked repositories are dropped from the result unless `target_forks`
    /// is set. Only the first response page is consulted; with more than one
    /// page of repositories the later pages are dropped. Known limitation.
    ///
    /// # Errors
    /// Error if the request fails or returns a non-success status
    pub(crate) async fn get_all_repos(&self) -> Result<Vec<GithubRepo>, MirrorMakerError> {
        let url = format!("{}/user/repos", self.api_url);
        let response = self
            .client
            .get(&url)
            .query(&[("type", "public")])
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "mirror-maker")
            .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
            .send()
            .await?;
        if !response.status().is_success() {
            let text = response.text().await?;
            return Err(MirrorMakerError::new(MirrorMakerErrorKind::DirectoryFetch)
                .with_platform(PlatformType::Github)
                .with_text(&text));
        }
        let repos: Vec<GithubRepo> = serde_json::from_str(&response.text().await?)?;
        let repos: Vec<GithubRepo> = repos
            .into_iter()
            .filter(|repo| !repo.fork || self.target_forks)
            .collect();
        log::debug!("fetched {} github repositories", repos.len());
        Ok(repos)
    }

    /// Create a GitHub repository from the metadata of a GitLab repository.
    ///
    /// The repository is created under the authenticated user's namespace,
    /// public, with wiki and projects disabled, and its description suffixed
    /// with " [mirror]".
    ///
    /// # Errors
    /// Error if the request fails or returns a non-success status
    pub(crate) async fn create_repo(&self, repo: &GitlabRepo) -> Result<(), MirrorMakerError> {
        let body = CreateRepoBody {
            name: repo.path.clone(),
            description: format!("{} [mirror]", repo.description.clone().unwrap_or_default()),
            homepage: repo.web_url.clone(),
            private: false,
            has_wiki: false,
            has_projects: false,
        };
        let url = format!("{}/user/repos", self.api_url);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "mirror-maker")
            .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            let text = response.text().await?;
            return Err(MirrorMakerError::new(MirrorMakerErrorKind::RepoCreation)
                .with_platform(PlatformType::Github)
                .with_text(&text));
        }
        log::debug!("created github repository {}", repo.path);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::missing_docs_in_private_items)]
mod tests {
    use super::*;
    use crate::gitlab::repo::GitlabOwner;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// A client pointed at a mock server.
    fn platform(server: &MockServer, target_forks: bool) -> GithubPlatform {
        GithubPlatform::with_api_url("github-token".to_string(), target_forks, server.uri())
    }

    #[tokio::test]
    async fn test_get_all_repos_filters_forks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(query_param("type", "public"))
            .and(header("authorization", "Bearer github-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"full_name": "grdl/repo_1", "fork": true},
                {"full_name": "grdl/repo_2", "fork": false},
            ])))
            .mount(&server)
            .await;

        let repos = platform(&server, false).get_all_repos().await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].full_name, "grdl/repo_2");
    }

    #[tokio::test]
    async fn test_get_all_repos_keeps_forks_when_targeted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"full_name": "grdl/repo_1", "fork": true},
                {"full_name": "grdl/repo_2", "fork": false},
            ])))
            .mount(&server)
            .await;

        let repos = platform(&server, true).get_all_repos().await.unwrap();
        assert_eq!(repos.len(), 2);
    }

    #[tokio::test]
    async fn test_get_all_repos_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let repos = platform(&server, false).get_all_repos().await.unwrap();
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_create_repo_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .and(body_json(json!({
                "name": "one",
                "description": "A repository [mirror]",
                "homepage": "https://gitlab.com/grdl/one",
                "private": false,
                "has_wiki": false,
                "has_projects": false,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "full_name": "grdl/one",
                "fork": false,
            })))
            .mount(&server)
            .await;

        let repo = GitlabRepo {
            id: 1,
            name: "One".to_string(),
            path: "one".to_string(),
            path_with_namespace: "grdl/one".to_string(),
            description: Some("A repository".to_string()),
            web_url: "https://gitlab.com/grdl/one".to_string(),
            owner: GitlabOwner {
                username: "grdl".to_string(),
            },
        };
        platform(&server, false).create_repo(&repo).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_repo_error_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(422).set_body_string("name already exists"))
            .mount(&server)
            .await;

        let repo = GitlabRepo::default();
        let err = platform(&server, false)
            .create_repo(&repo)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &MirrorMakerErrorKind::RepoCreation);
    }
}
