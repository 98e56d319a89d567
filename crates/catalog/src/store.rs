use std::collections::HashSet;

use teek_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{Product, ProductRecord};
use crate::seed::seed_records;

/// Immutable, ordered product catalog.
///
/// Built once at startup and only read afterwards. Catalog order is meaningful:
/// it fixes both the category order and the product order of grouped views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen: HashSet<&ProductId> = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::duplicate_id(product.id().as_str()));
            }
        }
        Ok(Self { products })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in playground catalog (12 products across all categories).
    pub fn seeded() -> DomainResult<Self> {
        Self::from_records(seed_records())
    }

    /// Load a catalog from a JSON array of product records.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed catalog: {e}")))?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<ProductRecord>) -> DomainResult<Self> {
        let products = records
            .into_iter()
            .map(Product::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        let store = Self::new(products)?;
        tracing::info!(products = store.len(), "catalog loaded");
        Ok(store)
    }

    /// Every product, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
