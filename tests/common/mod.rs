//! Shared utilities for integration tests.

use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use custom_logos::config::ServerConfig;
use custom_logos::http::HttpServer;
use custom_logos::lifecycle::Shutdown;
use custom_logos::logos::{LogoCatalog, LogoFile, LogoGroup, LogoTheme, LogoType};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Write `contents` to a fresh temp file with the given suffix.
pub fn logo_file(contents: &[u8], suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents).unwrap();
    file
}

/// One group per entry, in order.
pub fn catalog(entries: &[(LogoType, LogoTheme, PathBuf)]) -> LogoCatalog {
    LogoCatalog::new(
        entries
            .iter()
            .map(|(logo_type, theme, path)| LogoGroup {
                logo_type: *logo_type,
                logos: vec![LogoFile {
                    theme: *theme,
                    path: path.clone(),
                }],
            })
            .collect(),
    )
}

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    #[allow(dead_code)]
    pub updates: mpsc::UnboundedSender<LogoCatalog>,
}

impl TestServer {
    pub fn url(&self, query: &str) -> String {
        format!("http://{}/custom-logo{}", self.addr, query)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start an `HttpServer` serving `catalog`.
pub async fn start_server(config: ServerConfig, catalog: LogoCatalog) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (updates, catalog_updates) = mpsc::unbounded_channel();
    let server = HttpServer::new(config, catalog);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, catalog_updates, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    TestServer {
        addr,
        shutdown,
        updates,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
