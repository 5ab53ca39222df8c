//! Products domain module.
//!
//! This crate contains the product record and the rules that apply before
//! anything reaches storage (no IO, no HTTP, no SQL).

pub mod page;
pub mod product;

pub use page::{DEFAULT_LIMIT, Page};
pub use product::{NewProduct, Product};
