//! Error handling for the mirrormaker crate.
use std::{error::Error as StdError, fmt};

use crate::platform::PlatformType;

/// Error type for the mirrormaker crate.
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

    /// Create a new error of the given kind wrapping a source error.
    pub(crate) fn with_source<E>(kind: MirrorMakerErrorKind, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            inner: Box::new(Inner {
                kind,
                source: Some(source.into()),
                platform: None,
            }),
        }
    }

    /// Attach a text (usually a response body) as the source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text.to_string())));
        self
    }

    /// Attach the platform the error comes from.
    pub(crate) fn with_platform(mut self, platform: PlatformType) -> Self {
        self.inner.platform = Some(platform);
        self
    }

    /// Kind of the error
    pub fn kind(&self) -> &MirrorMakerErrorKind {
        &self.inner.kind
    }

    /// Platform the error comes from, if known
    pub fn platform(&self) -> Option<&PlatformType> {
        self.inner.platform.as_ref()
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the mirrormaker crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: MirrorMakerErrorKind,

    /// Platform error
    platform: Option<PlatformType>,

    /// Source error.
    source: Option<BoxError>,
}

/// Kind of [`MirrorMakerError`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorMakerErrorKind {
    /// Error related to the reqwest crate.
    Reqwest,

    /// Error related to serde.
    Serde,

    /// Invalid configuration or command line input.
    Config,

    /// Error while fetching the authenticated user.
    GetUser,

    /// Error related to the GetAllRepo func.
    GetAllRepos,

    /// Error related to the GetRepo func.
    GetRepo,

    /// The requested repository does not exist.
    RepoNotFound,

    /// Error related to the RepoCreation func.
    RepoCreation,

    /// Error related to the RepoEdition func.
    RepoEdition,

    /// Error while listing the mirrors of a repository.
    GetMirrors,

    /// Error while creating a push mirror.
    MirrorCreation,

    /// Error while fetching the commits of a repository.
    GetCommits,
}

impl fmt::Display for MirrorMakerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.inner.kind)?;
        if let Some(platform) = &self.inner.platform {
            write!(f, " ({platform})")?;
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
        Self::with_source(MirrorMakerErrorKind::Reqwest, e)
    }
}

impl From<serde_json::Error> for MirrorMakerError {
    fn from(e: serde_json::Error) -> Self {
        Self::with_source(MirrorMakerErrorKind::Serde, e)
    }
}

impl From<url::ParseError> for MirrorMakerError {
    fn from(e: url::ParseError) -> Self {
        Self::with_source(MirrorMakerErrorKind::Config, e)
    }
}

impl From<std::io::Error> for MirrorMakerError {
    fn from(e: std::io::Error) -> Self {
        Self::with_source(MirrorMakerErrorKind::Config, e)
    }
}

impl From<&str> for MirrorMakerError {
    fn from(text: &str) -> Self {
        Self::new(MirrorMakerErrorKind::Config).with_text(text)
    }
}

impl From<String> for MirrorMakerError {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_contains_kind_platform_and_text() {
        let err = MirrorMakerError::new(MirrorMakerErrorKind::RepoCreation)
            .with_platform(PlatformType::Github)
            .with_text("name already exists on this account");
        assert_eq!(
            err.to_string(),
            "RepoCreation (github): name already exists on this account"
        );
        assert_eq!(err.kind(), &MirrorMakerErrorKind::RepoCreation);
        assert!(err.source().is_some());
    }

    #[test]
    fn string_converts_to_config_error() {
        let err: MirrorMakerError = "bad shorthand".into();
        assert_eq!(err.kind(), &MirrorMakerErrorKind::Config);
        assert_eq!(err.platform(), None);
        assert_eq!(err.to_string(), "Config: bad shorthand");
    }
}
