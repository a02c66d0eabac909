use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::catalog::domain::{
    entities::{DisplayRecord, ListingPage},
    repositories::CatalogRepository,
    value_objects::ListingParams,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

/// The one remembered result: the normalized query and what it returned
#[derive(Debug, Clone)]
struct Slot {
    query: String,
    record: DisplayRecord,
}

/// Caller-side search state: one repository handle, one result slot.
///
/// A repeated search for the slot's query is answered from the slot. Any
/// other successful search replaces it; failures leave it untouched.
pub struct SearchSession {
    catalog: Arc<dyn CatalogRepository>,
    slot: RwLock<Option<Slot>>,
}

impl SearchSession {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self {
            catalog,
            slot: RwLock::new(None),
        }
    }

    /// Search-box normalization: surrounding whitespace dropped, lowercased
    pub fn normalize_input(input: &str) -> String {
        input.trim().to_lowercase()
    }

    pub async fn search(&self, input: &str) -> AppResult<DisplayRecord> {
        let query = Self::normalize_input(input);
        if query.is_empty() {
            return Err(AppError::unclassified("empty search query"));
        }

        if let Some(slot) = self.slot.read().await.as_ref() {
            if slot.query == query {
                LogContext::search_operation(&query, true);
                return Ok(slot.record.clone());
            }
        }

        LogContext::search_operation(&query, false);
        let record = self.catalog.fetch_entity(&query).await?;

        *self.slot.write().await = Some(Slot {
            query,
            record: record.clone(),
        });
        Ok(record)
    }

    /// Listings are never cached
    pub async fn browse(&self, params: ListingParams) -> AppResult<ListingPage> {
        self.catalog.fetch_listing(params).await
    }

    pub async fn current(&self) -> Option<DisplayRecord> {
        self.slot.read().await.as_ref().map(|slot| slot.record.clone())
    }

    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }
}
