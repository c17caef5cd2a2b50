use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::BookstoreMcp;

/// Payload listing the bookstore MCP commands.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands this server provides.".to_string(),
                "health - Returns 'ok'.".to_string(),
                "get_book_by_title - First book whose title contains `title` (case-insensitive)."
                    .to_string(),
                "get_author_by_name - First author whose name contains `name`.".to_string(),
                "get_customer_by_name - First customer whose name contains `name`.".to_string(),
                "get_books_by_author - All books by the first author matching `author_name`."
                    .to_string(),
                "get_orders_by_customer - Orders keyed by id for the first customer matching `customer_name`."
                    .to_string(),
                "get_total_spent_by_customer - Sum of order totals for the first customer matching `customer_name`."
                    .to_string(),
                "get_order_details - Order with its book and customer, by exact `order_id`."
                    .to_string(),
                "get_author_by_id - Author by exact `author_id`.".to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl BookstoreMcp {
    #[tool(description = "List the MCP commands this server provides.")]
    pub async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
