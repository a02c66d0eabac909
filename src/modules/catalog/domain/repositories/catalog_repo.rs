use async_trait::async_trait;

use crate::modules::catalog::domain::{
    entities::{DisplayRecord, ListingPage},
    value_objects::ListingParams,
};
use crate::shared::errors::AppResult;

/// Repository interface for the remote creature catalog
/// Each call issues exactly one request; implementations hold no cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Look up one creature by catalog id (as text) or by name
    async fn fetch_entity(&self, query: &str) -> AppResult<DisplayRecord>;

    /// Fetch one page of the collection, unchanged
    async fn fetch_listing(&self, params: ListingParams) -> AppResult<ListingPage>;
}
