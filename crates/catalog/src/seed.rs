//! Compiled-in playground catalog.

use crate::product::ProductRecord;

const SEED: &[(&str, &str, &str, f64, u32, &str)] = &[
    ("001", "Apple", "FreshFruit", 8.5, 100, "Fresh red apples from Fuji"),
    ("002", "Orange", "FreshFruit", 6.0, 0, "Sweet navel oranges"),
    ("003", "Banana", "FreshFruit", 4.5, 120, "Organic bananas"),
    ("004", "Chicken Breast", "MeatEggs", 25.0, 50, "Boneless chicken breast"),
    ("005", "Eggs (12 pack)", "MeatEggs", 15.0, 200, "Farm fresh eggs"),
    ("006", "Pork Loin", "MeatEggs", 35.0, 40, "Lean pork loin chops"),
    ("007", "Broccoli", "Vegetables", 7.0, 60, "Fresh green broccoli"),
    ("008", "Carrots", "Vegetables", 3.5, 150, "Organic carrots"),
    ("009", "Tomatoes", "Vegetables", 5.0, 90, "Ripe red tomatoes"),
    ("010", "Milk", "Others", 12.0, 100, "Fresh whole milk"),
    ("011", "Bread", "Others", 8.0, 70, "Whole wheat bread"),
    ("012", "Rice", "Others", 15.0, 200, "Premium jasmine rice"),
];

/// The shopping-cart catalog as wire records, in display order.
pub fn seed_records() -> Vec<ProductRecord> {
    SEED.iter()
        .map(|&(id, name, category, price, stock, description)| ProductRecord {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
            description: Some(description.to_string()),
        })
        .collect()
}
