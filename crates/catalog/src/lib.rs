//! Catalog domain module.
//!
//! Holds the immutable, ordered product catalog the shopping cart filters over.
//! Deterministic domain logic only: the catalog is built once (from the compiled-in
//! seed data or a JSON document handed over at startup) and never mutated.

pub mod category;
pub mod product;
pub mod seed;
pub mod store;

pub use category::Category;
pub use product::{Price, Product, ProductRecord};
pub use store::CatalogStore;
