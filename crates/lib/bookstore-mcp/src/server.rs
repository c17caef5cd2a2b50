//! Transport runners for the bookstore MCP server: stdio for spawned clients,
//! streamable HTTP (mounted at `/mcp`) for long-running deployments.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use tracing::info;

use crate::BookstoreMcp;

pub const DEFAULT_HTTP_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST), 4030);
pub const DEFAULT_SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);
pub const DEFAULT_SSE_RETRY: Duration = Duration::from_secs(3);

/// Streamable HTTP listener settings.
///
/// `None` for either SSE interval turns that behaviour off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransport {
    pub addr: SocketAddr,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
}

impl HttpTransport {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            stateful_mode: true,
            sse_keep_alive: Some(DEFAULT_SSE_KEEP_ALIVE),
            sse_retry: Some(DEFAULT_SSE_RETRY),
        }
    }

    #[must_use]
    pub const fn stateful(mut self, stateful_mode: bool) -> Self {
        self.stateful_mode = stateful_mode;
        self
    }

    #[must_use]
    pub const fn sse_intervals(
        mut self,
        keep_alive: Option<Duration>,
        retry: Option<Duration>,
    ) -> Self {
        self.sse_keep_alive = keep_alive;
        self.sse_retry = retry;
        self
    }

    fn session_config(&self) -> StreamableHttpServerConfig {
        StreamableHttpServerConfig {
            sse_keep_alive: self.sse_keep_alive,
            sse_retry: self.sse_retry,
            stateful_mode: self.stateful_mode,
            ..Default::default()
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_HTTP_ADDR)
    }
}

/// Runs the server over stdin/stdout until the client disconnects.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(
    service: BookstoreMcp,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("serving MCP over stdio");
    let running = serve_server(service, stdio()).await?;
    let reason = running.waiting().await?;
    info!(?reason, "stdio session closed");
    Ok(())
}

/// Builds the axum app: `/health` plus the MCP service nested at `/mcp`.
/// Each session gets its own clone of `service`; the reference data is shared.
#[must_use]
pub fn http_router(service: BookstoreMcp, transport: &HttpTransport) -> Router {
    let mcp: StreamableHttpService<BookstoreMcp, LocalSessionManager> = StreamableHttpService::new(
        move || Ok(service.clone()),
        Arc::new(LocalSessionManager::default()),
        transport.session_config(),
    );
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", mcp)
}

/// Binds `transport.addr` and serves streamable HTTP until the listener fails.
///
/// # Errors
/// Returns any bind or server error.
pub async fn serve_streamable_http(
    service: BookstoreMcp,
    transport: HttpTransport,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = http_router(service, &transport);
    let listener = tokio::net::TcpListener::bind(transport.addr).await?;
    info!(
        addr = %transport.addr,
        stateful = transport.stateful_mode,
        "serving MCP over streamable HTTP at /mcp"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
