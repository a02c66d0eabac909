pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::SearchSession;
pub use domain::{
    CatalogConfig, CatalogRepository, DisplayRecord, ListingPage, ListingParams, NamedResource,
};
pub use infrastructure::adapters::pokeapi::normalize;
pub use infrastructure::{
    HttpTransport, PokeApiAdapter, ReqwestTransport, TransportError, TransportResponse,
};
