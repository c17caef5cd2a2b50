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

/// Parameters for finding a book by title fragment.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FindBookByTitleParams {
    /// Full or partial book title, matched case-insensitively.
    pub title: String,
}

/// Parameters for finding an author by name fragment.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FindAuthorByNameParams {
    /// Full or partial author name, matched case-insensitively.
    pub name: String,
}

/// Parameters for listing books by an author.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FindBooksByAuthorParams {
    /// Full or partial author name; the first matching author is used.
    pub author_name: String,
}

/// Parameters for fetching an author by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetAuthorByIdParams {
    /// Exact author id, e.g. AUTH001.
    pub author_id: String,
}

#[tool_router(router = tool_router_catalog, vis = "pub")]
impl BookstoreMcp {
    #[tool(
        name = "get_book_by_title",
        description = "Get detailed book information using a full or partial book title."
    )]
    pub async fn find_book_by_title(
        &self,
        Parameters(params): Parameters<FindBookByTitleParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.simulate_latency().await;
        let lookup = self
            .control
            .find_book_by_title(&params.title)
            .map_err(helpers::map_err)?;
        helpers::lookup_result(lookup)
    }

    #[tool(
        name = "get_author_by_name",
        description = "Get author details using an author's full or partial name."
    )]
    pub async fn find_author_by_name(
        &self,
        Parameters(params): Parameters<FindAuthorByNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.simulate_latency().await;
        let lookup = self
            .control
            .find_author_by_name(&params.name)
            .map_err(helpers::map_err)?;
        helpers::lookup_result(lookup)
    }

    #[tool(
        name = "get_books_by_author",
        description = "Return the list of books written by an author."
    )]
    pub async fn find_books_by_author(
        &self,
        Parameters(params): Parameters<FindBooksByAuthorParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.simulate_latency().await;
        let lookup = self
            .control
            .find_books_by_author(&params.author_name)
            .map_err(helpers::map_err)?;
        helpers::lookup_result(lookup)
    }

    #[tool(description = "Retrieve full author details using their author ID.")]
    pub async fn get_author_by_id(
        &self,
        Parameters(params): Parameters<GetAuthorByIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.simulate_latency().await;
        let lookup = self
            .control
            .get_author_by_id(&params.author_id)
            .map_err(helpers::map_err)?;
        helpers::lookup_result(lookup)
    }
}
