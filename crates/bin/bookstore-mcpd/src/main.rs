//! Daemon entry point for the bookstore MCP server.
//!
//! Loads configuration from arguments and the environment, hydrates the
//! reference data, and serves the MCP protocol over stdio or streamable HTTP.

mod config;
mod data;

use bookstore_mcp::BookstoreMcp;
use bookstore_mcp::server::{HttpTransport, serve_stdio, serve_streamable_http};
use tracing_subscriber::EnvFilter;

use crate::config::BookstoreConfig;
use crate::data::load_reference_data;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = BookstoreConfig::from_args()?;
    init_tracing(&config.log_filter);

    let data = load_reference_data(&config)?;
    let service = BookstoreMcp::with_data(data).with_simulated_latency(config.simulated_latency);

    if config.enable_stdio {
        return serve_stdio(service).await;
    }
    if config.mcp_serve {
        let transport = HttpTransport::new(config.mcp_http_addr)
            .stateful(config.stateful_mode)
            .sse_intervals(config.sse_keep_alive, config.sse_retry);
        return serve_streamable_http(service, transport).await;
    }
    Ok(())
}

/// Logs go to stderr so stdout stays free for the stdio transport.
/// `RUST_LOG` takes precedence over the configured filter.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
