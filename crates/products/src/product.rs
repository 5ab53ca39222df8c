use serde::{Deserialize, Serialize};

use skuvault_core::{DomainError, DomainResult, ProductId};

/// A stored product.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub product_name: String,
}

impl Product {
    /// Attach a server-assigned identifier to client-supplied fields.
    pub fn assign(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            sku: new.sku,
            product_name: new.product_name,
        }
    }
}

/// Client-supplied fields of a product about to be created.
///
/// Any `id` present in the incoming JSON is ignored: it is not a field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub product_name: String,
}

impl NewProduct {
    pub fn new(sku: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            product_name: product_name.into(),
        }
    }

    /// Presence check only; uniqueness of `sku` is the store's job.
    pub fn validate(&self) -> DomainResult<()> {
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("sku must not be empty"));
        }
        Ok(())
    }
}
