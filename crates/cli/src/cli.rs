use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use teek_catalog::CatalogStore;
use teek_navigation::{MenuSelection, NavTables, Page, cards, posts, route};
use teek_observability::LogFormat;
use teek_search::{SearchState, search};

use crate::render::{CardsView, CartView, MenuView, PostsView};

/// Playground shell: shopping-cart search and navigation menus.
#[derive(Debug, Parser)]
#[command(name = "teek", version)]
pub struct Cli {
    /// Log output format (`json` or `pretty`). Logs go to stderr.
    #[arg(long, env = "TEEK_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter the catalog and print it grouped by category.
    Cart {
        /// Case-insensitive substring of the product name.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Hide products that are out of stock.
        #[arg(long)]
        in_stock: bool,

        /// JSON catalog to load instead of the built-in one.
        #[arg(long, env = "TEEK_CATALOG")]
        catalog: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
    /// Show the menu selection for a path.
    Menu {
        path: String,

        #[arg(long)]
        json: bool,
    },
    /// List the posts page entries.
    Posts {
        #[arg(long)]
        json: bool,
    },
    /// List the home page cards.
    Cards {
        #[arg(long)]
        json: bool,
    },
}

/// Execute a parsed command and return what should be printed on stdout.
pub fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Cart {
            search: text,
            in_stock,
            catalog,
            json,
        } => {
            let store = load_catalog(catalog.as_deref())?;
            let state = SearchState::new(text, in_stock);
            let view = search(store.all(), &state);
            if json {
                to_json(&view)
            } else {
                Ok(CartView(&view).to_string())
            }
        }
        Command::Menu { path, json } => {
            let tables = NavTables::playground();
            let menu = MenuView {
                selection: tables.resolve(&path),
                page: route(&path),
            };
            if json {
                to_json(&MenuJson::from(&menu))
            } else {
                Ok(menu.to_string())
            }
        }
        Command::Posts { json: true } => to_json(&posts()),
        Command::Posts { json: false } => Ok(PostsView(posts()).to_string()),
        Command::Cards { json: true } => to_json(&cards()),
        Command::Cards { json: false } => Ok(CardsView(cards()).to_string()),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<CatalogStore> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog at {}", path.display()))?;
            CatalogStore::from_json(&raw)
                .with_context(|| format!("invalid catalog at {}", path.display()))
        }
        None => CatalogStore::seeded().context("built-in catalog is invalid"),
    }
}

#[derive(Serialize)]
struct MenuJson<'a> {
    #[serde(flatten)]
    selection: MenuSelection<'a>,
    page: Option<Page>,
}

impl<'a> From<&MenuView<'a>> for MenuJson<'a> {
    fn from(menu: &MenuView<'a>) -> Self {
        Self {
            selection: menu.selection,
            page: menu.page,
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("teek").chain(args.iter().copied()))?;
        run(cli)
    }

    #[test]
    fn cart_defaults_to_whole_catalog() {
        let out = run_args(&["cart"]).unwrap();
        assert!(out.starts_with("Fresh Fruit\n"));
        assert!(out.contains("Rice"));
    }

    #[test]
    fn cart_with_no_match_prints_empty_state() {
        let out = run_args(&["cart", "--search", "durian"]).unwrap();
        assert_eq!(out, "Your cart is empty\n");
    }

    #[test]
    fn cart_json_lists_groups() {
        let out = run_args(&["cart", "-s", "APPLE", "--in-stock", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let groups = value.as_array().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["category"], "FreshFruit");
        assert_eq!(groups[0]["products"][0]["name"], "Apple");
        assert_eq!(groups[0]["products"][0]["price"], 8.5);
    }

    #[test]
    fn missing_catalog_file_is_reported() {
        let err = run_args(&["cart", "--catalog", "/nonexistent/teek-catalog.json"]).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read catalog"));
    }

    #[test]
    fn menu_json_has_selection_and_page() {
        let out = run_args(&["menu", "/", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["selected_primary_key"], "/");
        assert_eq!(value["page"], "home");
        assert_eq!(value["secondary"][0]["key"], "/fragment");
        assert_eq!(value["secondary"][1]["key"], "/event");
    }

    #[test]
    fn menu_for_unknown_path() {
        let out = run_args(&["menu", "/unknown"]).unwrap();
        assert!(out.starts_with("no page for /unknown\n"));
    }

    #[test]
    fn posts_lists_every_post() {
        let out = run_args(&["posts"]).unwrap();
        assert!(out.starts_with("2025-12-11  Getting Started with Rsbuild\n"));
        assert_eq!(out.matches("tags:").count(), 6);
    }

    #[test]
    fn cards_json_keeps_order() {
        let out = run_args(&["cards", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["title"], "React");
        assert_eq!(value[2]["link"], "https://nextjs.org/");
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["teek", "--log-format", "xml", "cart"]).is_err());
    }
}
