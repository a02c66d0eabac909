use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::{
    modules::catalog::domain::{
        entities::{CatalogConfig, DisplayRecord, ListingPage},
        repositories::CatalogRepository,
        value_objects::ListingParams,
    },
    modules::catalog::infrastructure::http_client::{
        HttpTransport, ReqwestTransport, TransportError,
    },
    shared::errors::{AppError, AppResult},
    shared::utils::{LogContext, TimedOperation},
};

use super::mapper::PokeApiMapper;

/// PokeAPI catalog adapter over REST
///
/// One call, one request: no retries, no caching, no shared mutable state.
pub struct PokeApiAdapter {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    mapper: PokeApiMapper,
}

impl PokeApiAdapter {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new(config)), config)
    }

    /// Create adapter with custom transport (for testing)
    pub fn with_transport(transport: Arc<dyn HttpTransport>, config: &CatalogConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.clone(),
            mapper: PokeApiMapper::new(),
        }
    }

    /// Detail URL; the query becomes exactly one path segment
    pub fn entity_url(&self, query: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, urlencoding::encode(query))
    }

    pub fn listing_url(&self, params: &ListingParams) -> String {
        let query_string: Vec<String> = params
            .to_query_params()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        format!("{}/pokemon?{}", self.base_url, query_string.join("&"))
    }

    /// Look up a single creature by id or name and normalize it for display
    pub async fn fetch_entity(&self, query: &str) -> AppResult<DisplayRecord> {
        let url = self.entity_url(query);

        log::info!("PokeAPI: Getting creature '{}'", query);
        let timer = TimedOperation::new("PokeAPI fetch_entity");

        let result = match self.get_json::<Value>(&url).await {
            Ok(raw) => self.mapper.normalize(raw),
            Err(e) => Err(e),
        };
        timer.finish();

        match result {
            Ok(record) => {
                log::info!("PokeAPI: Found #{} '{}'", record.id, record.name);
                Ok(record)
            }
            Err(e) => {
                log::warn!("PokeAPI: Lookup for '{}' failed: {} ({:?})", query, e, e.detail());
                Err(e)
            }
        }
    }

    /// Fetch one page of the collection, passed through unchanged
    pub async fn fetch_listing(&self, params: ListingParams) -> AppResult<ListingPage> {
        let url = self.listing_url(&params);

        log::info!(
            "PokeAPI: Getting listing (offset: {}, limit: {})",
            params.offset,
            params.limit
        );
        let timer = TimedOperation::new("PokeAPI fetch_listing");

        let result = self.get_json::<ListingPage>(&url).await;
        timer.finish_with_info(&format!("offset {}, limit {}", params.offset, params.limit));

        match result {
            Ok(page) => {
                log::info!(
                    "PokeAPI: Listing returned {} of {} entries",
                    page.results.len(),
                    page.count
                );
                Ok(page)
            }
            Err(e) => {
                log::warn!("PokeAPI: Listing failed: {} ({:?})", e, e.detail());
                Err(e)
            }
        }
    }

    /// Single GET, classified into the error taxonomy, body decoded as JSON
    async fn get_json<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        LogContext::api_call("PokeAPI", url, "GET", None);
        let started = Instant::now();

        let response = self
            .transport
            .get(url)
            .await
            .map_err(Self::classify_transport_error)?;

        LogContext::api_call(
            "PokeAPI",
            url,
            &response.status.to_string(),
            Some(started.elapsed().as_millis() as u64),
        );

        if !response.is_success() {
            return Err(AppError::server_response(response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            AppError::shape_mismatch(format!(
                "Failed to parse PokeAPI response: {}. Response: {}",
                e,
                Self::snippet(&response.body)
            ))
        })
    }

    fn classify_transport_error(err: TransportError) -> AppError {
        match err {
            TransportError::NoResponse(detail) => AppError::transport(detail),
            TransportError::Other(detail) => AppError::unclassified(detail),
        }
    }

    fn snippet(body: &str) -> String {
        match body.char_indices().nth(200) {
            Some((idx, _)) => format!("{}...", &body[..idx]),
            None => body.to_string(),
        }
    }
}

#[async_trait]
impl CatalogRepository for PokeApiAdapter {
    async fn fetch_entity(&self, query: &str) -> AppResult<DisplayRecord> {
        PokeApiAdapter::fetch_entity(self, query).await
    }

    async fn fetch_listing(&self, params: ListingParams) -> AppResult<ListingPage> {
        PokeApiAdapter::fetch_listing(self, params).await
    }
}
