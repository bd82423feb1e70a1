// SPDX-License-Identifier: MPL-2.0
//! Where an asset comes from, and how to get its bytes.

use crate::app::paths;
use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

const USER_AGENT: &str = concat!("IcedGreeting/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed when downloading.
const MAX_REDIRECTS: usize = 10;

/// A configured asset location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Remote asset fetched over HTTP(S).
    Url(String),
    /// File on the local filesystem.
    Path(PathBuf),
}

impl AssetSource {
    /// Parses a configuration value. `http://` and `https://` values are
    /// remote, anything else is a local path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::Path(PathBuf::from(value))
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Lowercase file extension, ignoring any URL query or fragment.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let name = match self {
            Self::Url(url) => {
                let end = url.find(['?', '#']).unwrap_or(url.len());
                let path = &url[..end];
                path.rsplit('/').next().unwrap_or(path).to_string()
            }
            Self::Path(path) => path.file_name()?.to_string_lossy().into_owned(),
        };
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// File name used for this asset inside the cache directory.
    fn cache_file_name(&self) -> String {
        let key = blake3::hash(self.to_string().as_bytes()).to_hex();
        match self.extension() {
            Some(ext) => format!("{key}.{ext}"),
            None => key.to_string(),
        }
    }
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the whole asset into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the request fails, or the
/// server answers with a non-success status.
pub async fn fetch_bytes(source: &AssetSource) -> Result<Vec<u8>> {
    match source {
        AssetSource::Path(path) => Ok(tokio::fs::read(path).await?),
        AssetSource::Url(url) => download(url).await,
    }
}

async fn download(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Asset(format!(
            "HTTP status {} for {url}",
            response.status()
        )));
    }

    let bytes = response.bytes().await?;
    tracing::debug!(url, bytes = bytes.len(), "asset downloaded");
    Ok(bytes.to_vec())
}

/// Returns a local path holding the asset.
///
/// Local sources are returned as-is. Remote sources are downloaded once
/// into `cache_dir` (the media cache directory when `None`) and reused on
/// later runs.
///
/// # Errors
///
/// Returns an error if no cache directory is available or the download
/// fails.
pub async fn cache_remote(source: &AssetSource, cache_dir: Option<&Path>) -> Result<PathBuf> {
    if let AssetSource::Path(path) = source {
        return Ok(path.clone());
    }

    let dir = cache_dir
        .map(Path::to_path_buf)
        .or_else(paths::get_media_cache_dir)
        .ok_or_else(|| Error::Asset("No cache directory available".to_string()))?;
    let cached = dir.join(source.cache_file_name());

    if tokio::fs::try_exists(&cached).await.unwrap_or(false) {
        tracing::debug!(path = %cached.display(), "using cached asset");
        return Ok(cached);
    }

    let bytes = fetch_bytes(source).await?;
    tokio::fs::create_dir_all(&dir).await?;

    // Write under a temporary name so an interrupted download is never
    // mistaken for a cached file.
    let partial = cached.with_extension("part");
    tokio::fs::write(&partial, &bytes).await?;
    tokio::fs::rename(&partial, &cached).await?;

    tracing::info!(source = %source, path = %cached.display(), "asset cached");
    Ok(cached)
}
