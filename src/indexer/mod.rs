mod criteria;
mod helper;
mod normalize;
mod types;

pub use criteria::*;
pub use helper::parse_u64;
pub use normalize::{extract_candidates, normalize, normalize_records, unwrap_record, RecordShape};
pub use types::*;

use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid indexer URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("indexer returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("invalid JSON from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Anything that can answer entity queries.
///
/// Implementations are fail-soft: every failure surfaces as an empty vector.
pub trait EntityQuerySource<T: Entity>: Send + Sync {
    fn fetch_entities(&self, criteria: &T::Criteria) -> impl Future<Output = Vec<T>> + Send;
}

/// HTTP client for the indexer service.
///
/// One GET per call: no retries, no caching, no deduplication.
#[derive(Debug, Clone)]
pub struct IndexerClient {
    http: reqwest::Client,
    base_url: String,
    fallback_query: Option<String>,
}

impl IndexerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| FetchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
            fallback_query: None,
        })
    }

    /// Opts into substituting [`default_query`] when criteria compile to an
    /// empty string. Without this an empty query is sent as-is.
    pub fn with_default_query(mut self, chain_id: &str) -> Self {
        self.fallback_query = Some(default_query(chain_id));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for a kind and a compiled query
    pub fn endpoint_url(&self, kind: EntityKind, query: &str) -> String {
        let query = match (query.is_empty(), &self.fallback_query) {
            (true, Some(fallback)) => fallback.as_str(),
            _ => query,
        };

        if query.is_empty() {
            format!("{}/{}", self.base_url, kind.path())
        } else {
            format!("{}/{}?{}", self.base_url, kind.path(), query)
        }
    }

    /// Fetches and normalizes, keeping failures distinct from empty results
    pub async fn try_fetch<T: Entity>(&self, criteria: &T::Criteria) -> Result<Vec<T>, FetchError> {
        let url = self.endpoint_url(T::KIND, &criteria.to_query());
        debug!(%url, "indexer request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;

        let entities = normalize::<T>(payload);
        debug!(%url, count = entities.len(), "indexer response");
        Ok(entities)
    }

    /// Fail-soft fetch: any failure is logged and becomes an empty result
    pub async fn fetch<T: Entity>(&self, criteria: &T::Criteria) -> Vec<T> {
        match self.try_fetch(criteria).await {
            Ok(entities) => entities,
            Err(e) => {
                warn!(kind = T::KIND.path(), error = %format_error_chain(&e), "indexer fetch failed");
                Vec::new()
            }
        }
    }

    pub async fn transactions(&self, criteria: &TxCriteria) -> Vec<Transaction> {
        self.fetch(criteria).await
    }

    pub async fn blocks(&self, criteria: &BlockCriteria) -> Vec<Block> {
        self.fetch(criteria).await
    }

    pub async fn balances(&self, criteria: &BalanceCriteria) -> Vec<Balance> {
        self.fetch(criteria).await
    }

    pub async fn codes(&self, criteria: &CodeCriteria) -> Vec<Code> {
        self.fetch(criteria).await
    }
}

impl<T: Entity> EntityQuerySource<T> for IndexerClient {
    fn fetch_entities(&self, criteria: &T::Criteria) -> impl Future<Output = Vec<T>> + Send {
        self.fetch::<T>(criteria)
    }
}

/// `error: cause: cause` rendering of an error and its sources
pub fn format_error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
