use std::{error::Error, fmt, fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::models::{
    Author,
    AuthorEntry,
    Book,
    BookEntry,
    Customer,
    CustomerEntry,
    Order,
    OrderEntry,
};
use crate::schema::{
    BUILTIN_FIXTURE,
    KEY_AUTHOR_ID,
    KEY_BOOK_ID,
    KEY_CUSTOMER_ID,
    TABLE_AUTHORS,
    TABLE_BOOKS,
    TABLE_CUSTOMERS,
    TABLE_ORDERS,
};
use crate::table::{DuplicateId, Table};

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(Box<toml::de::Error>),
    DuplicateKey { table: &'static str, id: String },
    InvalidRecord { table: &'static str, id: String, reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read fixture: {err}"),
            Self::Parse(err) => write!(f, "failed to parse fixture: {err}"),
            Self::DuplicateKey { table, id } => {
                write!(f, "duplicate id '{id}' in table {table}")
            }
            Self::InvalidRecord { table, id, reason } => {
                write!(f, "invalid record '{id}' in table {table}: {reason}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err.as_ref()),
            Self::DuplicateKey { .. } | Self::InvalidRecord { .. } => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(Box::new(err))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// On-disk fixture layout: one array of entry rows per table.
#[derive(Debug, Default, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    authors: Vec<AuthorEntry>,
    #[serde(default)]
    books: Vec<BookEntry>,
    #[serde(default)]
    customers: Vec<CustomerEntry>,
    #[serde(default)]
    orders: Vec<OrderEntry>,
}

/// A foreign key that does not resolve to a row in its target table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DanglingReference {
    pub table: &'static str,
    pub id: String,
    pub field: &'static str,
    pub target: &'static str,
    pub value: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {} '{}' not found in {}",
            self.table, self.id, self.field, self.value, self.target
        )
    }
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TableSummary {
    pub authors: usize,
    pub books: usize,
    pub customers: usize,
    pub orders: usize,
}

/// The four reference tables, loaded once and read for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub authors: Table<Author>,
    pub books: Table<Book>,
    pub customers: Table<Customer>,
    pub orders: Table<Order>,
}

impl ReferenceData {
    /// Loads the sample fixture compiled into this crate.
    ///
    /// # Errors
    /// Returns `StoreError` if the embedded fixture is malformed.
    pub fn builtin() -> StoreResult<Self> {
        Self::from_toml_str(BUILTIN_FIXTURE)
    }

    /// Loads a fixture file from disk.
    ///
    /// # Errors
    /// Returns `StoreError` if the file cannot be read or fails validation.
    pub fn from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates fixture text.
    ///
    /// # Errors
    /// Returns `StoreError` on TOML errors, duplicate ids, or orders with a
    /// zero quantity.
    pub fn from_toml_str(text: &str) -> StoreResult<Self> {
        let fixture: FixtureFile = toml::from_str(text)?;

        for entry in &fixture.orders {
            if entry.order.quantity == 0 {
                return Err(StoreError::InvalidRecord {
                    table: TABLE_ORDERS,
                    id: entry.order_id.clone(),
                    reason: "quantity must be positive".to_string(),
                });
            }
        }

        Ok(Self {
            authors: build_table(
                TABLE_AUTHORS,
                fixture.authors.into_iter().map(|e| (e.author_id, e.author)),
            )?,
            books: build_table(
                TABLE_BOOKS,
                fixture.books.into_iter().map(|e| (e.book_id, e.book)),
            )?,
            customers: build_table(
                TABLE_CUSTOMERS,
                fixture
                    .customers
                    .into_iter()
                    .map(|e| (e.customer_id, e.customer)),
            )?,
            orders: build_table(
                TABLE_ORDERS,
                fixture.orders.into_iter().map(|e| (e.order_id, e.order)),
            )?,
        })
    }

    #[must_use]
    pub const fn summary(&self) -> TableSummary {
        TableSummary {
            authors: self.authors.len(),
            books: self.books.len(),
            customers: self.customers.len(),
            orders: self.orders.len(),
        }
    }

    /// Lists foreign keys that point at missing rows.
    ///
    /// References are advisory; a dangling key is reported here and surfaces
    /// as an empty sub-record in joined results.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for (id, book) in self.books.iter() {
            if !self.authors.contains_key(&book.author_id) {
                dangling.push(DanglingReference {
                    table: TABLE_BOOKS,
                    id: id.to_string(),
                    field: KEY_AUTHOR_ID,
                    target: TABLE_AUTHORS,
                    value: book.author_id.clone(),
                });
            }
        }

        for (id, order) in self.orders.iter() {
            if !self.customers.contains_key(&order.customer_id) {
                dangling.push(DanglingReference {
                    table: TABLE_ORDERS,
                    id: id.to_string(),
                    field: KEY_CUSTOMER_ID,
                    target: TABLE_CUSTOMERS,
                    value: order.customer_id.clone(),
                });
            }
            if !self.books.contains_key(&order.book_id) {
                dangling.push(DanglingReference {
                    table: TABLE_ORDERS,
                    id: id.to_string(),
                    field: KEY_BOOK_ID,
                    target: TABLE_BOOKS,
                    value: order.book_id.clone(),
                });
            }
        }

        dangling
    }
}

fn build_table<R>(
    table: &'static str,
    rows: impl IntoIterator<Item = (String, R)>,
) -> StoreResult<Table<R>> {
    Table::from_rows(rows).map_err(|DuplicateId(id)| StoreError::DuplicateKey { table, id })
}
