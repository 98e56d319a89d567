use serde::{Deserialize, Serialize};

use teek_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

use crate::category::Category;

/// Non-negative unit price, stored in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Build a price from a decimal amount (e.g. `8.5`), rounded to the nearest cent.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        let cents = (amount * 100.0).round();
        if cents >= u64::MAX as f64 {
            return Err(DomainError::validation("price out of range"));
        }
        Ok(Self {
            cents: cents as u64,
        })
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    pub fn as_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.as_decimal()
    }
}

/// Two-decimal display: `$8.50`.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: Price,
    stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Price,
        stock: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {id}: name cannot be empty"
            )));
        }
        Ok(Self {
            id,
            name,
            category,
            price,
            stock,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Wire shape of a product inside a catalog document.
///
/// Category is kept as a raw string so an unknown value surfaces as
/// [`DomainError::UnknownCategory`] rather than a generic parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = ProductId::new(record.id)?;
        let category = record.category.parse::<Category>()?;
        let price = Price::from_decimal(record.price)?;
        let product = Product::new(id, record.name, category, price, record.stock)?;
        Ok(match record.description {
            Some(description) => product.with_description(description),
            None => product,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, price: f64) -> ProductRecord {
        ProductRecord {
            id: "001".to_string(),
            name: "Apple".to_string(),
            category: category.to_string(),
            price,
            stock: 100,
            description: Some("Fresh red apples from Fuji".to_string()),
        }
    }

    #[test]
    fn price_displays_two_decimals() {
        assert_eq!(Price::from_decimal(8.5).unwrap().to_string(), "$8.50");
        assert_eq!(Price::from_decimal(25.0).unwrap().to_string(), "$25.00");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn price_rejects_negative_and_non_finite() {
        assert!(Price::from_decimal(-0.01).is_err());
        assert!(Price::from_decimal(f64::NAN).is_err());
        assert!(Price::from_decimal(f64::INFINITY).is_err());
        assert_eq!(Price::from_decimal(0.0).unwrap().cents(), 0);
    }

    #[test]
    fn price_rejects_amounts_beyond_cent_range() {
        let err = Price::from_decimal(1e20).unwrap_err();
        assert_eq!(err, DomainError::Validation("price out of range".to_string()));
        assert!(Price::from_decimal(f64::MAX).is_err());
        assert_eq!(Price::from_decimal(1e15).unwrap().cents(), 100_000_000_000_000_000);
    }

    #[test]
    fn price_rounds_to_nearest_cent() {
        assert_eq!(Price::from_decimal(8.499).unwrap().cents(), 850);
        assert_eq!(Price::from_decimal(0.1 + 0.2).unwrap().cents(), 30);
    }

    #[test]
    fn product_rejects_empty_name() {
        let err = Product::new(
            ProductId::new("001").unwrap(),
            "   ",
            Category::FreshFruit,
            Price::default(),
            1,
        )
        .unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("name cannot be empty")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn zero_stock_is_out_of_stock() {
        let product = Product::new(
            ProductId::new("002").unwrap(),
            "Orange",
            Category::FreshFruit,
            Price::from_cents(600),
            0,
        )
        .unwrap();
        assert!(!product.in_stock());
    }

    #[test]
    fn record_converts_into_product() {
        let product = Product::try_from(record("FreshFruit", 8.5)).unwrap();
        assert_eq!(product.id().as_str(), "001");
        assert_eq!(product.category(), Category::FreshFruit);
        assert_eq!(product.price().cents(), 850);
        assert_eq!(product.description(), Some("Fresh red apples from Fuji"));
    }

    #[test]
    fn record_with_unknown_category_is_rejected() {
        let err = Product::try_from(record("Dairy", 1.0)).unwrap_err();
        assert_eq!(err, DomainError::UnknownCategory("Dairy".to_string()));
    }

    #[test]
    fn record_with_negative_price_is_rejected() {
        assert!(matches!(
            Product::try_from(record("Others", -3.0)),
            Err(DomainError::Validation(_))
        ));
    }
}
