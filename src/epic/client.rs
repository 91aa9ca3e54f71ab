//! HTTP client for the EPIC API
//!
//! One request per call: no retries, no timeout, no caching.

use thiserror::Error;

use crate::config::Config;
use crate::epic::archive;
use crate::state::data::ImageRecord;

/// Path of the natural-color listing (latest day of imagery)
const NATURAL_PATH: &str = "/EPIC/api/natural";

/// Why a fetch produced nothing usable
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure or a non-success HTTP status
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not a JSON array of image records
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no images found")]
    Empty,
}

/// Cheap to clone; clones share the underlying connection pool
#[derive(Debug, Clone)]
pub struct EpicClient {
    http: reqwest::Client,
    config: Config,
}

impl EpicClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// URL of the record listing, without the API key
    pub fn records_url(&self) -> String {
        format!("{}{}", self.config.api_base, NATURAL_PATH)
    }

    /// Archive URL of a record's PNG
    pub fn image_url(&self, record: &ImageRecord) -> String {
        archive::image_url(&self.config.archive_base, record)
    }

    /// Fetch the current list of natural-color image records.
    ///
    /// An empty list is reported as [`FetchError::Empty`].
    pub async fn fetch_records(&self) -> Result<Vec<ImageRecord>, FetchError> {
        let body = self
            .http
            .get(self.records_url())
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let records: Vec<ImageRecord> = serde_json::from_str(&body)?;
        if records.is_empty() {
            return Err(FetchError::Empty);
        }

        log::info!("🌍 Fetched {} EPIC records", records.len());
        Ok(records)
    }

    /// Download the raw bytes of an archive image
    pub async fn fetch_image(&self, url: String) -> Result<Vec<u8>, FetchError> {
        let bytes = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        log::debug!("Downloaded {} ({} KB)", url, bytes.len() / 1024);
        Ok(bytes.to_vec())
    }
}
