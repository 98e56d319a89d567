use core::str::FromStr;
use serde::{Deserialize, Serialize};

use teek_core::DomainError;

/// Closed set of product categories.
///
/// Grouping keys off this enum, so a category outside the set is rejected when
/// the catalog is built instead of producing a stray group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    FreshFruit,
    MeatEggs,
    Vegetables,
    Others,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::FreshFruit,
        Category::MeatEggs,
        Category::Vegetables,
        Category::Others,
    ];

    /// Stable key used in catalog files and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::FreshFruit => "FreshFruit",
            Category::MeatEggs => "MeatEggs",
            Category::Vegetables => "Vegetables",
            Category::Others => "Others",
        }
    }

    /// Heading shown above the category's products.
    pub fn label(self) -> &'static str {
        match self {
            Category::FreshFruit => "Fresh Fruit",
            Category::MeatEggs => "Meat & Eggs",
            Category::Vegetables => "Vegetables",
            Category::Others => "Others",
        }
    }

    /// Label used by the playground's original catalog data.
    pub fn legacy_label(self) -> &'static str {
        match self {
            Category::FreshFruit => "新鲜水果",
            Category::MeatEggs => "肉禽蛋",
            Category::Vegetables => "蔬菜",
            Category::Others => "其他",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Accepts the key (`FreshFruit`), the display label (`Fresh Fruit`) or the
    /// legacy label (`新鲜水果`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s || c.label() == s || c.legacy_label() == s)
            .ok_or_else(|| DomainError::unknown_category(s))
    }
}
