use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{BookstoreMcp, helpers};

/// Parameters for finding a customer by name fragment.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FindCustomerByNameParams {
    /// Full or partial customer name, matched case-insensitively.
    pub name: String,
}

/// Parameters for customer order queries.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CustomerNameParams {
    /// Full or partial customer name; the first matching customer is used.
    pub customer_name: String,
}

/// Parameters for fetching order details.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetOrderDetailsParams {
    /// Exact order id, e.g. ORD9001.
    pub order_id: String,
}

#[tool_router(router = tool_router_customers, vis = "pub")]
impl BookstoreMcp {
    #[tool(
        name = "get_customer_by_name",
        description = "Get customer details by their full or partial name."
    )]
    pub async fn find_customer_by_name(
        &self,
        Parameters(params): Parameters<FindCustomerByNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.simulate_latency().await;
        let lookup = self
            .control
            .find_customer_by_name(&params.name)
            .map_err(helpers::map_err)?;
        helpers::lookup_result(lookup)
    }

    #[tool(
        name = "get_orders_by_customer",
        description = "Return all orders for a customer, keyed by order ID."
    )]
    pub async fn find_orders_by_customer(
        &self,
        Parameters(params): Parameters<CustomerNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.simulate_latency().await;
        let lookup = self
            .control
            .find_orders_by_customer(&params.customer_name)
            .map_err(helpers::map_err)?;
        helpers::lookup_result(lookup)
    }

    #[tool(
        name = "get_total_spent_by_customer",
        description = "Calculate the total amount spent by a customer."
    )]
    pub async fn total_spent_by_customer(
        &self,
        Parameters(params): Parameters<CustomerNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.simulate_latency().await;
        let lookup = self
            .control
            .total_spent_by_customer(&params.customer_name)
            .map_err(helpers::map_err)?;
        Ok(helpers::text_result(lookup))
    }

    #[tool(description = "Get full details for a specific order, including its book and customer.")]
    pub async fn get_order_details(
        &self,
        Parameters(params): Parameters<GetOrderDetailsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.simulate_latency().await;
        let lookup = self
            .control
            .get_order_details(&params.order_id)
            .map_err(helpers::map_err)?;
        helpers::lookup_result(lookup)
    }
}
