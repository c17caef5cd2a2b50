//! MCP server implementation for bookstore-mcp.
//!
//! This crate wires the query control plane into rmcp tool handlers and
//! exposes the MCP-facing API surface for catalog and customer lookups.

mod helpers;
pub mod server;
pub mod tools;

use std::sync::Arc;
use std::time::Duration;

use bookstore_core::BookstoreControlPlane;
use bookstore_store::ReferenceData;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};

const SERVER_NAME: &str = "Bookstore MCP Server";

const SERVER_INSTRUCTIONS: &str = r"bookstore-mcp answers read-only questions about a small bookstore: authors, books, customers and orders.

Tools:
- `get_book_by_title`, `get_author_by_name`, `get_customer_by_name` match a case-insensitive
  fragment of the title or name and return the first match with its id.
- `get_books_by_author` lists every book by the first author matching `author_name`.
- `get_orders_by_customer` maps order ids to orders for the first customer matching `customer_name`.
- `get_total_spent_by_customer` reports the sum of that customer's order totals as a sentence.
- `get_order_details` takes an exact `order_id` and returns the order with its book and customer.
- `get_author_by_id` takes an exact `author_id` (e.g. AUTH001).

Notes:
- When nothing matches, tools return a plain-text message such as
  `No author found matching 'nobody'.` rather than an error.
- Blank arguments are rejected as invalid params.
- Use `help` for a command summary. `health` returns `ok`.";

/// MCP server wrapper around the bookstore control plane and tool routers.
#[derive(Clone)]
pub struct BookstoreMcp {
    tool_router: ToolRouter<Self>,
    control: BookstoreControlPlane,
    latency: Option<Duration>,
}

impl BookstoreMcp {
    /// Creates a new server over reference data by value.
    #[must_use]
    pub fn new(data: ReferenceData) -> Self {
        Self::with_data(Arc::new(data))
    }

    /// Creates a new server over a shared reference data handle.
    #[must_use]
    pub fn with_data(data: Arc<ReferenceData>) -> Self {
        Self::with_control(BookstoreControlPlane::with_data(data))
    }

    /// Creates a new server around an existing control plane.
    #[must_use]
    pub fn with_control(control: BookstoreControlPlane) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_catalog()
            + Self::tool_router_customers()
            + Self::tool_router_context();
        Self {
            tool_router,
            control,
            latency: None,
        }
    }

    /// Adds an artificial delay before every query tool runs. Off by default.
    #[must_use]
    pub fn with_simulated_latency(mut self, latency: Option<Duration>) -> Self {
        self.latency = latency.filter(|delay| !delay.is_zero());
        self
    }

    /// Sleeps for the configured simulated latency, if any.
    pub(crate) async fn simulate_latency(&self) {
        if let Some(delay) = self.latency {
            tokio::time::sleep(delay).await;
        }
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl BookstoreMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    pub async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for BookstoreMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
