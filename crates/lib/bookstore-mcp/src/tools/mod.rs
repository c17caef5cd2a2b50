//! MCP tool modules.
//!
//! Tools are grouped by domain: catalog lookups (books and authors), customer
//! and order queries, and contextual help.

pub mod catalog;
pub mod context;
pub mod customers;
