//! One-shot loading of the search dataset.
//!
//! The loader fetches its source at most once. Concurrent first callers share
//! the same in-flight fetch, and every caller afterwards gets the same
//! `Arc<Dataset>`. Failures are logged and turned into an empty dataset; they
//! are not retried.

mod source;

pub use source::{DEFAULT_DATA_LOCATION, DataSource, FileSource, HttpSource, Source};

use crate::error::LoadError;
use crate::model::{Dataset, SearchDocument};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Default upper bound on a single fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct DatasetLoader<S = Source> {
    source: S,
    timeout: Duration,
    dataset: OnceCell<Arc<Dataset>>,
}

impl<S: DataSource> DatasetLoader<S> {
    pub fn new(source: S) -> Self {
        Self::with_timeout(source, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(source: S, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            dataset: OnceCell::new(),
        }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Get the dataset, fetching it on first use.
    ///
    /// Never fails: a failed fetch yields an empty, not-loaded dataset, and that
    /// outcome is cached like a successful one.
    pub async fn load(&self) -> Arc<Dataset> {
        self.dataset
            .get_or_init(|| async {
                match self.try_load_uncached().await {
                    Ok(dataset) => {
                        tracing::info!(
                            "Search data loaded: {} players, {} teams",
                            dataset.players().len(),
                            dataset.teams().len()
                        );
                        Arc::new(dataset)
                    }
                    Err(e) => {
                        tracing::error!("Error loading search data: {}", e);
                        tracing::info!(
                            "Make sure {} exists and is accessible",
                            self.source.describe()
                        );
                        Arc::new(Dataset::empty())
                    }
                }
            })
            .await
            .clone()
    }

    /// The cached dataset, if a load has already completed.
    pub fn get(&self) -> Option<Arc<Dataset>> {
        self.dataset.get().cloned()
    }

    /// Fetch and parse the source, bypassing and not touching the cache.
    pub async fn try_load_uncached(&self) -> Result<Dataset, LoadError> {
        tracing::debug!("Fetching search data from {}", self.source.describe());

        let body = tokio::time::timeout(self.timeout, self.source.fetch())
            .await
            .map_err(|_| LoadError::Timeout {
                source_name: self.source.describe(),
                elapsed: self.timeout,
            })??;

        let document: SearchDocument = serde_json::from_slice(&body)?;
        Ok(Dataset::from_document(document))
    }
}
