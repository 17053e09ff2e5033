//! Platform identifiers

/// The two platforms taking part in a mirroring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    /// GitLab, the mirroring source
    Gitlab,

    /// GitHub, the mirroring destination
    Github,
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformType::Gitlab => write!(f, "gitlab"),
            PlatformType::Github => write!(f, "github"),
        }
    }
}
