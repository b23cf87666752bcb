//! Where the search data comes from.

use crate::error::LoadError;
use std::future::Future;
use std::path::PathBuf;

/// Default location of the search data resource.
pub const DEFAULT_DATA_LOCATION: &str = "search_data.json";

/// A fetchable search data resource.
pub trait DataSource {
    /// Fetch the raw document body.
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Search data served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let http_err = |source| LoadError::Http {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_err)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Search data read from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A source picked from a location string.
///
/// `http://` and `https://` locations are fetched over the network; anything
/// else is treated as a file path.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl Source {
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Http(HttpSource::new(location))
        } else {
            Self::File(FileSource::new(location))
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::from_location(DEFAULT_DATA_LOCATION)
    }
}

impl DataSource for Source {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            Self::Http(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_picks_source_kind() {
        assert!(matches!(
            Source::from_location("https://example.com/search_data.json"),
            Source::Http(_)
        ));
        assert!(matches!(
            Source::from_location("data/search_data.json"),
            Source::File(_)
        ));
        assert_eq!(Source::default().describe(), DEFAULT_DATA_LOCATION);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
