use thiserror::Error;

use skuvault_products::{NewProduct, Page, Product};

/// Product storage error.
///
/// `NotFound` is kept distinct from every other failure: it is what callers key
/// their "no such product" handling on. Everything else is a backend failure
/// whose message is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no rows in result set")]
    NotFound,

    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Async access to the `products` table.
///
/// Each method is a single independent round trip, except `insert`, which
/// writes and then re-reads by SKU (two round trips, no transaction).
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// Up to `page.limit()` products starting at `page.offset()`, in storage order.
    ///
    /// An empty page is `Ok(vec![])`, never `NotFound`.
    async fn fetch_page(&self, page: Page) -> Result<Vec<Product>, StoreError>;

    /// The single product with this SKU, or `StoreError::NotFound`.
    async fn fetch_by_sku(&self, sku: &str) -> Result<Product, StoreError>;

    /// Assign a fresh id, persist, and return the stored row as re-read by SKU.
    async fn insert(&self, new: NewProduct) -> Result<Product, StoreError>;

    /// Delete every product with this SKU. Returns the number of rows removed,
    /// which may be zero.
    async fn delete_by_sku(&self, sku: &str) -> Result<u64, StoreError>;
}
