use serde::Serialize;

use teek_catalog::{Category, Product};

/// Products of one category, in catalog order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Filtered catalog partitioned by category, ready to render.
///
/// Each category appears at most once, positioned by its first surviving
/// product. An empty view means nothing matched; callers show a dedicated
/// empty state for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedView {
    groups: Vec<CategoryGroup>,
}

impl GroupedView {
    pub(crate) fn from_groups(groups: Vec<CategoryGroup>) -> Self {
        debug_assert!(groups.iter().all(|g| !g.products.is_empty()));
        Self { groups }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of products across all groups.
    pub fn product_count(&self) -> usize {
        self.groups.iter().map(|g| g.products.len()).sum()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.iter().map(|g| g.category)
    }

    pub fn group(&self, category: Category) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// Flatten back into a product list (group order, then catalog order).
    pub fn into_products(self) -> Vec<Product> {
        self.groups.into_iter().flat_map(|g| g.products).collect()
    }
}

impl<'a> IntoIterator for &'a GroupedView {
    type Item = &'a CategoryGroup;
    type IntoIter = core::slice::Iter<'a, CategoryGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
