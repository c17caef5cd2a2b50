//! Reference data for bookstore-mcp.
//!
//! This crate defines the record models shared by the query layer and the MCP
//! surface, the keyed `Table` they live in, and the loader that hydrates the
//! four tables from a TOML fixture.

pub mod data;
pub mod models;
pub mod schema;
pub mod table;

pub use data::{DanglingReference, ReferenceData, StoreError, TableSummary};
pub use models::*;
pub use table::{DuplicateId, Table};
