use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::paths;

/// One menu entry. `key` is the path the entry points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            children: Vec::new(),
        }
    }
}

/// Menu state for the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuSelection<'a> {
    /// The path itself, used to highlight the primary entry.
    pub selected_primary_key: &'a str,
    pub primary: &'a [NavItem],
    /// Secondary entries registered for exactly this path, in declared order.
    pub secondary: &'a [NavItem],
}

impl MenuSelection<'_> {
    pub fn has_secondary(&self) -> bool {
        !self.secondary.is_empty()
    }
}

/// Resolve the menu for `path`.
///
/// Lookup is exact: no prefix matching and no fallback to a parent path. A
/// path without secondary entries simply has no sidebar.
pub fn resolve<'a>(
    path: &'a str,
    primary: &'a [NavItem],
    secondary: &'a HashMap<String, Vec<NavItem>>,
) -> MenuSelection<'a> {
    let entries = secondary.get(path).map(Vec::as_slice).unwrap_or(&[]);
    tracing::trace!(path, secondary = entries.len(), "menu resolved");
    MenuSelection {
        selected_primary_key: path,
        primary,
        secondary: entries,
    }
}

/// Primary menu plus the per-path secondary menus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTables {
    pub primary: Vec<NavItem>,
    pub secondary: HashMap<String, Vec<NavItem>>,
}

impl NavTables {
    pub fn new(primary: Vec<NavItem>, secondary: HashMap<String, Vec<NavItem>>) -> Self {
        Self { primary, secondary }
    }

    pub fn resolve<'a>(&'a self, path: &'a str) -> MenuSelection<'a> {
        resolve(path, &self.primary, &self.secondary)
    }

    /// The playground's menus.
    pub fn playground() -> Self {
        let primary = vec![
            NavItem::new(paths::HOME, "Basics"),
            NavItem::new(paths::HOOKS, "Hooks"),
            NavItem::new(paths::SHOPPING_CART, "Shopping Cart"),
            NavItem::new(paths::RELAY_EXAMPLE, "Relay Example"),
        ];

        let mut secondary = HashMap::new();
        secondary.insert(
            paths::HOME.to_string(),
            vec![
                NavItem::new(paths::FRAGMENT, "Fragment"),
                NavItem::new(paths::EVENT, "Events & Synthetic Events"),
            ],
        );
        secondary.insert(
            paths::HOOKS.to_string(),
            vec![
                NavItem::new(paths::USE_STATE, "useState"),
                NavItem::new(paths::USE_EFFECT, "useEffect"),
            ],
        );

        Self { primary, secondary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.key.as_str()).collect()
    }

    #[test]
    fn known_path_returns_entries_in_declared_order() {
        let tables = NavTables::playground();
        let selection = tables.resolve("/hooks");
        assert_eq!(selection.selected_primary_key, "/hooks");
        assert_eq!(keys(selection.secondary), vec!["/hooks/useState", "/hooks/useEffect"]);
        assert!(selection.has_secondary());
    }

    #[test]
    fn unknown_path_has_no_secondary_menu() {
        let tables = NavTables::playground();
        let selection = tables.resolve("/unknown");
        assert_eq!(selection.selected_primary_key, "/unknown");
        assert!(selection.secondary.is_empty());
        assert_eq!(selection.primary.len(), 4);
    }

    #[test]
    fn no_prefix_or_parent_fallback() {
        let tables = NavTables::playground();
        assert!(tables.resolve("/hooks/useState").secondary.is_empty());
        assert!(tables.resolve("/hooks/").secondary.is_empty());
        assert!(tables.resolve("/HOOKS").secondary.is_empty());
    }

    #[test]
    fn selected_key_is_path_verbatim() {
        let tables = NavTables::playground();
        assert_eq!(tables.resolve("/posts?page=2").selected_primary_key, "/posts?page=2");
        assert_eq!(tables.resolve("").selected_primary_key, "");
    }

    #[test]
    fn free_function_matches_tables() {
        let tables = NavTables::playground();
        let selection = resolve("/", &tables.primary, &tables.secondary);
        assert_eq!(keys(selection.secondary), vec!["/fragment", "/event"]);
        assert_eq!(selection, tables.resolve("/"));
    }

    #[test]
    fn empty_tables_resolve_to_nothing() {
        let tables = NavTables::default();
        let selection = tables.resolve("/");
        assert!(selection.primary.is_empty());
        assert!(selection.secondary.is_empty());
    }

    #[test]
    fn tables_load_from_json() {
        let json = r#"{
            "primary": [{"key": "/", "label": "Home"}],
            "secondary": {"/": [{"key": "/a", "label": "A"}, {"key": "/b", "label": "B"}]}
        }"#;
        let tables: NavTables = serde_json::from_str(json).unwrap();
        assert_eq!(keys(tables.resolve("/").secondary), vec!["/a", "/b"]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: resolution is an exact table lookup.
            #[test]
            fn resolve_is_exact_lookup(path in "/[a-zA-Z/]{0,12}") {
                let tables = NavTables::playground();
                let selection = tables.resolve(&path);
                prop_assert_eq!(selection.selected_primary_key, path.as_str());
                let expected: &[NavItem] = tables
                    .secondary
                    .get(&path)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                prop_assert_eq!(selection.secondary, expected);
            }
        }
    }
}
