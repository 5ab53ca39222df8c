use std::sync::RwLock;

use skuvault_core::ProductId;
use skuvault_products::{NewProduct, Page, Product};

use super::r#trait::{ProductStore, StoreError};

/// In-memory product store for tests/dev.
///
/// Rows keep insertion order, which stands in for "storage order" when paging.
/// SKU uniqueness is enforced here the way the database's unique constraint
/// would enforce it.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    rows: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StoreError {
        StoreError::backend("in-memory product store lock poisoned")
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn fetch_page(&self, page: Page) -> Result<Vec<Product>, StoreError> {
        let rows = self.rows.read().map_err(|_| Self::poisoned())?;
        Ok(rows
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn fetch_by_sku(&self, sku: &str) -> Result<Product, StoreError> {
        let rows = self.rows.read().map_err(|_| Self::poisoned())?;
        rows.iter()
            .find(|p| p.sku == sku)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, new: NewProduct) -> Result<Product, StoreError> {
        {
            let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;
            if rows.iter().any(|p| p.sku == new.sku) {
                return Err(StoreError::backend(format!(
                    "duplicate key value violates unique constraint \"products_sku_key\": sku={}",
                    new.sku
                )));
            }
            rows.push(Product::assign(ProductId::new(), new.clone()));
        }

        self.fetch_by_sku(&new.sku).await
    }

    async fn delete_by_sku(&self, sku: &str) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;
        let before = rows.len();
        rows.retain(|p| p.sku != sku);
        Ok((before - rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded(n: usize) -> InMemoryProductStore {
        let store = InMemoryProductStore::new();
        for i in 0..n {
            store
                .insert(NewProduct::new(format!("SKU-{i}"), format!("Product {i}")))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn insert_assigns_id_and_is_readable_by_sku() {
        let store = InMemoryProductStore::new();
        let created = store.insert(NewProduct::new("A1", "Widget")).await.unwrap();

        let fetched = store.fetch_by_sku("A1").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.product_name, "Widget");
    }

    #[tokio::test]
    async fn duplicate_sku_is_a_backend_error() {
        let store = seeded(1).await;
        let err = store
            .insert(NewProduct::new("SKU-0", "Again"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Backend(msg) if msg.contains("duplicate key")));
    }

    #[tokio::test]
    async fn missing_sku_is_not_found() {
        let store = seeded(2).await;
        assert_eq!(store.fetch_by_sku("nope").await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn paging_follows_insertion_order() {
        let store = seeded(5).await;

        let page = store.fetch_page(Page::new(2, 1)).await.unwrap();
        let skus: Vec<_> = page.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU-1", "SKU-2"]);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_not_an_error() {
        let store = seeded(3).await;
        let page = store.fetch_page(Page::new(10, 50)).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = seeded(2).await;
        assert_eq!(store.delete_by_sku("SKU-0").await.unwrap(), 1);
        assert_eq!(store.delete_by_sku("SKU-0").await.unwrap(), 0);
        assert_eq!(store.fetch_by_sku("SKU-0").await, Err(StoreError::NotFound));
        assert!(store.fetch_by_sku("SKU-1").await.is_ok());
    }
}
