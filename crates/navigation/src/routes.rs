use serde::Serialize;

use crate::paths;

/// Pages the router can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Posts,
    ShoppingCart,
    RelayExample,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Posts, Page::ShoppingCart, Page::RelayExample];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => paths::HOME,
            Page::Posts => paths::POSTS,
            Page::ShoppingCart => paths::SHOPPING_CART,
            Page::RelayExample => paths::RELAY_EXAMPLE,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Posts => "All Posts",
            Page::ShoppingCart => "Shopping Cart",
            Page::RelayExample => "Relay Example",
        }
    }
}

/// Static path-to-page mapping. Exact match only.
pub fn route(path: &str) -> Option<Page> {
    Page::ALL.into_iter().find(|page| page.path() == path)
}

/// A link in the shared page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Header links, left to right.
pub fn header_links() -> &'static [HeaderLink] {
    const LINKS: &[HeaderLink] = &[
        HeaderLink { label: "Home", href: paths::HOME },
        HeaderLink { label: "Posts", href: paths::POSTS },
        HeaderLink { label: "Shopping Cart", href: paths::SHOPPING_CART },
        HeaderLink { label: "About", href: paths::ABOUT },
    ];
    LINKS
}
