use std::sync::Arc;

use bookstore_store::{ReferenceData, StoreError};
use tracing::{info, warn};

use crate::config::BookstoreConfig;

/// Hydrates the reference tables from the configured fixture, or the
/// built-in sample data when none is set.
pub fn load_reference_data(config: &BookstoreConfig) -> Result<Arc<ReferenceData>, StoreError> {
    let data = match config.fixture_path.as_ref() {
        Some(path) => {
            info!(path = %path.display(), "loading fixture");
            ReferenceData::from_path(path)?
        }
        None => ReferenceData::builtin()?,
    };

    let summary = data.summary();
    info!(
        authors = summary.authors,
        books = summary.books,
        customers = summary.customers,
        orders = summary.orders,
        "reference data loaded"
    );
    for dangling in data.dangling_references() {
        warn!("dangling reference: {dangling}");
    }

    Ok(Arc::new(data))
}
