pub mod adapters;
pub mod http_client;

pub use adapters::PokeApiAdapter;
pub use http_client::{HttpTransport, ReqwestTransport, TransportError, TransportResponse};
