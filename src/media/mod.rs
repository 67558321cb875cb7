// SPDX-License-Identifier: MPL-2.0
//! Slide image sources and their one-shot loading.
//!
//! Each base image is fetched once and its handle is shared by the three
//! copies of the slide on the track. A failed fetch is not retried: the
//! slide keeps a broken-image placeholder for the rest of the session.

use crate::error::FetchError;
use iced::widget::image::Handle;
use std::fmt;
use std::path::{Path, PathBuf};

/// User agent sent with remote image requests.
const USER_AGENT: &str = concat!("IcedCarousel/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed for a remote image.
const MAX_REDIRECTS: usize = 10;

/// Where a slide image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// `http://` or `https://` URL.
    Remote(String),
    /// Path on the local filesystem.
    Local(PathBuf),
}

impl ImageSource {
    /// Classifies a reference from the config or the command line.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        let trimmed = reference.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::Remote(trimmed.to_string())
        } else {
            ImageSource::Local(PathBuf::from(trimmed))
        }
    }

    /// Short label used in log lines.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            ImageSource::Remote(url) => url.rsplit('/').next().unwrap_or(url).to_string(),
            ImageSource::Local(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Remote(url) => write!(f, "{}", url),
            ImageSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loading state of one base image.
#[derive(Debug, Clone, Default)]
pub enum SlideImage {
    #[default]
    Pending,
    Ready(Handle),
    /// The fetch failed; rendered as a placeholder.
    Broken,
}

impl SlideImage {
    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            SlideImage::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, SlideImage::Pending)
    }

    #[must_use]
    pub fn is_broken(&self) -> bool {
        matches!(self, SlideImage::Broken)
    }
}

impl From<Result<Handle, FetchError>> for SlideImage {
    fn from(result: Result<Handle, FetchError>) -> Self {
        match result {
            Ok(handle) => SlideImage::Ready(handle),
            Err(_) => SlideImage::Broken,
        }
    }
}

/// Fetches the bytes behind `source` and wraps them in an image handle.
///
/// Makes a single attempt. The payload must be a recognized image format.
pub async fn fetch(source: ImageSource) -> Result<Handle, FetchError> {
    let bytes = match &source {
        ImageSource::Remote(url) => fetch_remote(url).await?,
        ImageSource::Local(path) => fetch_local(path).await?,
    };

    image_rs::guess_format(&bytes).map_err(|_| FetchError::NotAnImage)?;
    Ok(Handle::from_bytes(bytes))
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>, FetchError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    Ok(body.to_vec())
}

async fn fetch_local(path: &Path) -> Result<Vec<u8>, FetchError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| FetchError::Io(e.to_string()))
}
