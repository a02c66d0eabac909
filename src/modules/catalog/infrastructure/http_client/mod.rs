pub mod transport;

pub use transport::{HttpTransport, ReqwestTransport, TransportError, TransportResponse};

#[cfg(test)]
pub use transport::MockHttpTransport;
