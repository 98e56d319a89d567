//! Navigation for the playground shell.
//!
//! Static tables only: which primary menu entry is highlighted for a path,
//! which secondary (sidebar) entries belong to it, which page a path maps to,
//! and the fixed content those pages list.

pub mod content;
pub mod menu;
pub mod paths;
pub mod routes;

pub use content::{Card, Post, cards, posts};
pub use menu::{MenuSelection, NavItem, NavTables, resolve};
pub use routes::{HeaderLink, Page, header_links, route};
