// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// An image could not be fetched or is not a recognized image format.
    Fetch(FetchError),
    /// The carousel could not be mounted (missing target, nothing to show).
    Mount(MountError),
}

/// Reasons an image fetch can fail.
///
/// Fetch failures are never retried; the slide falls back to the
/// broken-image placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The HTTP request could not be sent or the body could not be read.
    Network(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The payload is not an image format we can decode.
    NotAnImage,
    /// Reading a local file failed.
    Io(String),
}

/// Reasons a carousel mount can be refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No slot with this identifier exists on the page.
    TargetNotFound(String),
    /// The image list is empty, so there is nothing to loop over.
    NoImages,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status: {}", code),
            FetchError::NotAnImage => write!(f, "payload is not a supported image"),
            FetchError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::TargetNotFound(id) => write!(f, "mount target #{} not found", id),
            MountError::NoImages => write!(f, "no images to display"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Mount(e) => write!(f, "Mount Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<MountError> for Error {
    fn from(err: MountError) -> Self {
        Error::Mount(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(FetchError::Network(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
