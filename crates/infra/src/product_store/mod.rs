//! Product storage boundary.
//!
//! `ProductStore` is the only way handlers touch persisted products. The
//! Postgres implementation is used in production; the in-memory one backs
//! tests and the `STORE=memory` dev mode with the same observable semantics.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;
pub use r#trait::{ProductStore, StoreError};
