//! Postgres-backed product store.
//!
//! Every statement is parameterized (`$1`, `$2`, ...); no SQL is ever built
//! from request data.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError | Scenario |
//! |------------|------------|----------|
//! | RowNotFound | `NotFound` | `fetch_one` matched nothing |
//! | Database (e.g. `23505` unique violation) | `Backend` | duplicate SKU, constraint failures |
//! | PoolClosed / Io / other | `Backend` | connectivity and driver errors |

use sqlx::{FromRow, PgPool, Row};
use std::sync::Arc;
use tracing::instrument;

use skuvault_core::ProductId;
use skuvault_products::{NewProduct, Page, Product};

use super::r#trait::{ProductStore, StoreError};

/// Product store over a shared SQLx connection pool.
///
/// ## Thread Safety
///
/// `PgPool` is internally reference-counted and safe for concurrent use, so one
/// instance is shared by all in-flight requests.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: Arc<PgPool>,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self), fields(limit = page.limit(), offset = page.offset()), err)]
    async fn fetch_page(&self, page: Page) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query("SELECT id, sku, product_name FROM products LIMIT $1 OFFSET $2")
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("fetch_page", e))?;

        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            let product = ProductRow::from_row(&row)
                .map_err(|e| map_sqlx_error("fetch_page", e))?;
            products.push(product.into());
        }
        Ok(products)
    }

    #[instrument(skip(self), err)]
    async fn fetch_by_sku(&self, sku: &str) -> Result<Product, StoreError> {
        let row = sqlx::query("SELECT id, sku, product_name FROM products WHERE sku = $1")
            .bind(sku)
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("fetch_by_sku", e))?;

        let product = ProductRow::from_row(&row).map_err(|e| map_sqlx_error("fetch_by_sku", e))?;
        Ok(product.into())
    }

    #[instrument(skip(self, new), fields(sku = %new.sku), err)]
    async fn insert(&self, new: NewProduct) -> Result<Product, StoreError> {
        let id = ProductId::new();

        sqlx::query("INSERT INTO products (id, sku, product_name) VALUES ($1, $2, $3)")
            .bind(*id.as_uuid())
            .bind(&new.sku)
            .bind(&new.product_name)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("insert", e))?;

        // Re-read so the response reflects whatever the database actually stored.
        self.fetch_by_sku(&new.sku).await
    }

    #[instrument(skip(self), err)]
    async fn delete_by_sku(&self, sku: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE sku = $1")
            .bind(sku)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_sku", e))?;

        Ok(result.rows_affected())
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        other => {
            tracing::debug!(operation, error = %other, "product store query failed");
            StoreError::Backend(other.to_string())
        }
    }
}

// SQLx row types

#[derive(Debug)]
struct ProductRow {
    id: uuid::Uuid,
    sku: String,
    product_name: String,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for ProductRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(ProductRow {
            id: row.try_get("id")?,
            sku: row.try_get("sku")?,
            product_name: row.try_get("product_name")?,
        })
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from_uuid(row.id),
            sku: row.sku,
            product_name: row.product_name,
        }
    }
}
