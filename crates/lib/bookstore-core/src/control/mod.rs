//! Control plane for bookstore queries.
//!
//! Split into catalog (authors, books) and customer (customers, orders)
//! lookups. All operations are synchronous reads over shared, immutable
//! reference data.

use std::{error::Error, fmt, sync::Arc};

use bookstore_store::ReferenceData;

mod catalog;
mod customers;

pub use customers::{OrderDetails, OrderHistory, SpendingSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    InvalidInput(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "Invalid input: {message}"),
        }
    }
}

impl Error for ControlError {}

/// Outcome of a lookup: the matched value, or a not-found message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound(NotFound),
}

impl<T> Lookup<T> {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound(_) => None,
        }
    }

    #[must_use]
    pub const fn not_found(&self) -> Option<&NotFound> {
        match self {
            Self::Found(_) => None,
            Self::NotFound(reason) => Some(reason),
        }
    }
}

/// Why a lookup matched nothing. `Display` renders the caller-facing message,
/// echoing the argument exactly as it was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    BookTitle { title: String },
    AuthorName { name: String },
    AuthorId { author_id: String },
    CustomerName { name: String },
    BooksForAuthor { author_name: String },
    OrdersForCustomer { customer_name: String },
    OrderId { order_id: String },
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BookTitle { title } => {
                write!(f, "No book found with title matching '{title}'.")
            }
            Self::AuthorName { name } => write!(f, "No author found matching '{name}'."),
            Self::AuthorId { author_id } => {
                write!(f, "No author found with ID '{author_id}'.")
            }
            Self::CustomerName { name } => write!(f, "No customer found matching '{name}'."),
            Self::BooksForAuthor { author_name } => {
                write!(f, "No books found for author '{author_name}'.")
            }
            Self::OrdersForCustomer { customer_name } => {
                write!(f, "No orders found for '{customer_name}'.")
            }
            Self::OrderId { order_id } => write!(f, "No order found with ID '{order_id}'."),
        }
    }
}

/// Read-only query surface over the reference tables.
#[derive(Debug, Clone)]
pub struct BookstoreControlPlane {
    data: Arc<ReferenceData>,
}

impl BookstoreControlPlane {
    #[must_use]
    pub fn new(data: ReferenceData) -> Self {
        Self::with_data(Arc::new(data))
    }

    #[must_use]
    pub const fn with_data(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }
}

/// Rejects empty or whitespace-only arguments. Non-blank values pass through
/// untouched so they match and echo exactly as supplied.
fn require_arg<'a>(name: &str, value: &'a str) -> Result<&'a str, ControlError> {
    if value.trim().is_empty() {
        return Err(ControlError::InvalidInput(format!("{name} is required")));
    }
    Ok(value)
}

/// Case-insensitive substring test. `fragment` must already be lower-cased.
fn matches_fragment(field: &str, fragment: &str) -> bool {
    field.to_lowercase().contains(fragment)
}
