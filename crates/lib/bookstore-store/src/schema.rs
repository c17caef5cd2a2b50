pub const TABLE_AUTHORS: &str = "authors";
pub const TABLE_BOOKS: &str = "books";
pub const TABLE_CUSTOMERS: &str = "customers";
pub const TABLE_ORDERS: &str = "orders";

pub const KEY_AUTHOR_ID: &str = "author_id";
pub const KEY_BOOK_ID: &str = "book_id";
pub const KEY_CUSTOMER_ID: &str = "customer_id";
pub const KEY_ORDER_ID: &str = "order_id";

/// Default fixture compiled into the crate.
pub const BUILTIN_FIXTURE: &str = include_str!("../data/bookstore.toml");
