/// Single-connection HTTP server on loopback for driving the real transport
use pokecard_lib::modules::catalog::{CatalogConfig, PokeApiAdapter, ReqwestTransport};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct OneShotServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Accepts one connection, writes `raw_response` verbatim, then closes.
    pub async fn start(raw_response: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(raw_response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });

        Self {
            base_url: format!("http://{}/api/v2", addr),
            handle,
        }
    }

    /// The raw request head the server received
    pub async fn received_request(self) -> String {
        self.handle.await.unwrap()
    }

    pub fn config(&self) -> CatalogConfig {
        CatalogConfig::new(&self.base_url).with_user_agent("pokecard-tests")
    }

    /// Adapter over a real reqwest transport pointed at this server
    pub fn adapter(&self) -> PokeApiAdapter {
        let config = self.config();
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        PokeApiAdapter::with_transport(
            Arc::new(ReqwestTransport::with_client(client, &config)),
            &config,
        )
    }
}

pub fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    )
}
