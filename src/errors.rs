//! Error handling for the mirror-maker crate.
use std::{error::Error as StdError, fmt};

use crate::platform::PlatformType;

/// Error type for the mirror-maker crate.
///
/// Every error is fatal: the run loop propagates the first failure up to
/// `main`, which prints it and exits non-zero. There is no per-repository
/// isolation or retry.
#[derive(Debug)]
pub struct MirrorMakerError {
    /// Inner error.
    inner: Box<Inner>,
}

impl MirrorMakerError {
    /// Create a new error.
    pub(crate) fn new(kind: MirrorMakerErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                source: None,
                platform: None,
            }),
        }
    }

    /// Attach the response body (or another message) as the error source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Attach the platform the error came from.
    pub(crate) fn with_platform(mut self, platform: PlatformType) -> Self {
        self.inner.platform = Some(platform);
        self
    }

    /// The kind of this error.
    #[cfg(test)]
    pub(crate) fn kind(&self) -> &MirrorMakerErrorKind {
        &self.inner.kind
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the mirror-maker crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: MirrorMakerErrorKind,

    /// Platform the error came from.
    platform: Option<PlatformType>,

    /// Source error.
    source: Option<BoxError>,
}

/// Error kinds, matching the failure points of a run.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MirrorMakerErrorKind {
    /// Listing the repositories of a platform failed.
    DirectoryFetch,

    /// Listing the mirrors of one GitLab repository failed.
    MirrorFetch,

    /// Creating the GitHub repository failed.
    RepoCreation,

    /// Creating the GitLab push mirror failed.
    MirrorCreation,

    /// A repository looked up by slug does not exist.
    RepoNotFound,

    /// Error from the reqwest crate.
    Reqwest,

    /// Error deserializing an API response.
    Serde,
}

impl MirrorMakerErrorKind {
    /// Short human readable description of the error kind.
    fn describe(&self) -> &'static str {
        match self {
            MirrorMakerErrorKind::DirectoryFetch => "unable to list repositories",
            MirrorMakerErrorKind::MirrorFetch => "unable to list repository mirrors",
            MirrorMakerErrorKind::RepoCreation => "unable to create repository",
            MirrorMakerErrorKind::MirrorCreation => "unable to create mirror",
            MirrorMakerErrorKind::RepoNotFound => "repository not found",
            MirrorMakerErrorKind::Reqwest => "http request failed",
            MirrorMakerErrorKind::Serde => "unexpected api response",
        }
    }
}

impl fmt::Display for MirrorMakerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.platform {
            Some(platform) => write!(f, "{}: {}", platform, self.inner.kind.describe())?,
            None => write!(f, "{}", self.inner.kind.describe())?,
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for MirrorMakerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for MirrorMakerError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: MirrorMakerErrorKind::Reqwest,
                source: Some(Box::new(e)),
                platform: None,
            }),
        }
    }
}

impl From<serde_json::Error> for MirrorMakerError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: MirrorMakerErrorKind::Serde,
                source: Some(Box::new(e)),
                platform: None,
            }),
        }
    }
}
