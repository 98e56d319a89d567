//! Plain-text rendering of the shopping cart and menus.

use core::fmt;

use teek_catalog::Product;
use teek_navigation::{Card, MenuSelection, NavItem, Page, Post};
use teek_search::GroupedView;

pub const EMPTY_CART: &str = "Your cart is empty";

/// Grouped view as category headings followed by product rows.
pub struct CartView<'a>(pub &'a GroupedView);

impl fmt::Display for CartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        if view.is_empty() {
            return writeln!(f, "{EMPTY_CART}");
        }

        let width = view
            .iter()
            .flat_map(|g| g.products.iter())
            .map(|p| p.name().chars().count())
            .max()
            .unwrap_or(0);

        for (i, group) in view.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", group.category.label())?;
            for product in &group.products {
                write_product(f, product, width)?;
            }
        }
        Ok(())
    }
}

fn write_product(f: &mut fmt::Formatter<'_>, product: &Product, width: usize) -> fmt::Result {
    let sold_out = if product.in_stock() { "" } else { "  (sold out)" };
    writeln!(
        f,
        "  {:<width$}  {:>8}  stock: {}{sold_out}",
        product.name(),
        product.price().to_string(),
        product.stock(),
    )
}

/// Menu state for a path: highlighted primary entry, routed page, sidebar.
pub struct MenuView<'a> {
    pub selection: MenuSelection<'a>,
    pub page: Option<Page>,
}

impl fmt::Display for MenuView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selection = &self.selection;
        match self.page {
            Some(page) => writeln!(f, "{} ({})", page.title(), selection.selected_primary_key)?,
            None => writeln!(f, "no page for {}", selection.selected_primary_key)?,
        }

        for item in selection.primary {
            let marker = if item.key == selection.selected_primary_key { "*" } else { " " };
            writeln!(f, "{marker} {}", item.label)?;
        }

        if selection.has_secondary() {
            writeln!(f)?;
            for item in selection.secondary {
                write_entry(f, item, 1)?;
            }
        }
        Ok(())
    }
}

fn write_entry(f: &mut fmt::Formatter<'_>, item: &NavItem, depth: usize) -> fmt::Result {
    writeln!(f, "{:indent$}- {} ({})", "", item.label, item.key, indent = depth * 2)?;
    for child in &item.children {
        write_entry(f, child, depth + 1)?;
    }
    Ok(())
}

/// Posts page: date, title, excerpt and tags per entry.
pub struct PostsView<'a>(pub &'a [Post]);

impl fmt::Display for PostsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, post) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}  {}", post.date, post.title)?;
            writeln!(f, "  {}", post.excerpt)?;
            writeln!(f, "  tags: {}", post.tags.join(", "))?;
        }
        Ok(())
    }
}

/// Home page cards: title with link, then description.
pub struct CardsView<'a>(pub &'a [Card]);

impl fmt::Display for CardsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.0 {
            writeln!(f, "{} <{}>", card.title, card.link)?;
            writeln!(f, "  {}", card.description)?;
        }
        Ok(())
    }
}
