//! Filter + group pipeline.
//!
//! Pure functions of `(catalog, state)`: no hidden state, no IO. Calling
//! [`search`] twice with equal inputs yields equal views.

use teek_catalog::{Category, Product};

use crate::state::SearchState;
use crate::view::{CategoryGroup, GroupedView};

/// Whether `product` survives `state`.
///
/// Name match is a case-insensitive substring test; an empty search text
/// matches every name.
pub fn matches(product: &Product, state: &SearchState) -> bool {
    matches_needle(product, &state.needle(), state.only_show_in_stock)
}

fn matches_needle(product: &Product, needle: &str, only_show_in_stock: bool) -> bool {
    let stock_match = !only_show_in_stock || product.in_stock();
    stock_match && product.name().to_lowercase().contains(needle)
}

/// Surviving products, in catalog order.
pub fn filter<'a>(catalog: &'a [Product], state: &SearchState) -> Vec<&'a Product> {
    let needle = state.needle();
    catalog
        .iter()
        .filter(|p| matches_needle(p, &needle, state.only_show_in_stock))
        .collect()
}

/// Group products by category.
///
/// A category's position is fixed the first time it is seen; products keep
/// their input order inside each group.
pub fn group_by_category<'a, I>(products: I) -> GroupedView
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for product in products {
        let category: Category = product.category();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.products.push(product.clone()),
            None => groups.push(CategoryGroup {
                category,
                products: vec![product.clone()],
            }),
        }
    }
    GroupedView::from_groups(groups)
}

/// Filter `catalog` by `state`, then group the survivors by category.
pub fn search(catalog: &[Product], state: &SearchState) -> GroupedView {
    let view = group_by_category(filter(catalog, state));
    tracing::debug!(
        search_text = %state.search_text,
        only_show_in_stock = state.only_show_in_stock,
        groups = view.len(),
        products = view.product_count(),
        "search pipeline evaluated"
    );
    view
}
