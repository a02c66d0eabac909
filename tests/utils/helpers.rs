/// Fixture transport and adapter builders
use async_trait::async_trait;
use pokecard_lib::modules::catalog::{
    CatalogConfig, HttpTransport, PokeApiAdapter, TransportError, TransportResponse,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "http://catalog.test/api/v2";

/// Replays canned responses by URL and records every request made
#[derive(Default)]
pub struct FixtureTransport {
    routes: HashMap<String, Result<TransportResponse, TransportError>>,
    requests: Mutex<Vec<String>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), Ok(TransportResponse::new(status, body)));
        self
    }

    pub fn fail(mut self, url: &str, error: TransportError) -> Self {
        self.routes.insert(url.to_string(), Err(error));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl HttpTransport for FixtureTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        // Unknown routes behave like a host that never answers.
        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::NoResponse(format!("no route for {}", url))))
    }
}

pub fn test_config() -> CatalogConfig {
    CatalogConfig::new(TEST_BASE_URL)
}

pub fn url(path: &str) -> String {
    format!("{}{}", TEST_BASE_URL, path)
}

/// Adapter over the given transport; the transport handle is returned for request inspection
pub fn build_adapter(transport: FixtureTransport) -> (PokeApiAdapter, Arc<FixtureTransport>) {
    let transport = Arc::new(transport);
    let adapter = PokeApiAdapter::with_transport(transport.clone(), &test_config());
    (adapter, transport)
}
