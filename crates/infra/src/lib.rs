//! Infrastructure layer: configuration, database wiring, product storage.

pub mod config;
pub mod db;
pub mod product_store;

pub use config::{AppConfig, ConfigError, DatabaseConfig, StoreKind};
pub use product_store::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
