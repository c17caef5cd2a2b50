//! Query layer for bookstore-mcp.
//!
//! This crate owns the read-only lookups and aggregations over the reference
//! tables. Every query returns either a found value or a descriptive
//! not-found message; malformed arguments are rejected as `ControlError`.

pub mod control;

pub use control::{BookstoreControlPlane, ControlError, Lookup, NotFound};
