use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Author record, keyed by author id in the authors table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub nationality: String,
}

/// Book record. `author_id` references the authors table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author_id: String,
    pub genre: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub stock: u32,
}

/// Customer record, keyed by customer id in the customers table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Order record.
///
/// `price` is the stored line total for the order, not the unit price. It is
/// never recomputed from `quantity` and the referenced book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub customer_id: String,
    pub book_id: String,
    pub quantity: u32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub date: NaiveDate,
    /// Free-form status such as `Shipped`, `Processing` or `Delivered`.
    pub status: String,
}

/// Author with its identifier merged in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorEntry {
    pub author_id: String,
    #[serde(flatten)]
    pub author: Author,
}

/// Book with its identifier merged in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookEntry {
    pub book_id: String,
    #[serde(flatten)]
    pub book: Book,
}

/// Customer with its identifier merged in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerEntry {
    pub customer_id: String,
    #[serde(flatten)]
    pub customer: Customer,
}

/// Order with its identifier merged in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderEntry {
    pub order_id: String,
    #[serde(flatten)]
    pub order: Order,
}

impl AuthorEntry {
    #[must_use]
    pub fn new(author_id: impl Into<String>, author: Author) -> Self {
        Self {
            author_id: author_id.into(),
            author,
        }
    }
}

impl BookEntry {
    #[must_use]
    pub fn new(book_id: impl Into<String>, book: Book) -> Self {
        Self {
            book_id: book_id.into(),
            book,
        }
    }
}

impl CustomerEntry {
    #[must_use]
    pub fn new(customer_id: impl Into<String>, customer: Customer) -> Self {
        Self {
            customer_id: customer_id.into(),
            customer,
        }
    }
}

impl OrderEntry {
    #[must_use]
    pub fn new(order_id: impl Into<String>, order: Order) -> Self {
        Self {
            order_id: order_id.into(),
            order,
        }
    }
}
