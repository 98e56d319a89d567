use serde::{Deserialize, Deserializer, Serialize};

use teek_core::ValueObject;

/// The user's current filter intent.
///
/// Replaced wholesale on every change: the `with_*` methods return a new state
/// carrying the other field over, so the last edit always wins. Fields missing
/// from a serialized state, or set to `null`, fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchState {
    /// Case-insensitive substring matched against product names.
    #[serde(deserialize_with = "null_as_default")]
    pub search_text: String,
    /// Hide products whose stock is zero.
    #[serde(deserialize_with = "null_as_default")]
    pub only_show_in_stock: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchState {
    pub fn new(search_text: impl Into<String>, only_show_in_stock: bool) -> Self {
        Self {
            search_text: search_text.into(),
            only_show_in_stock,
        }
    }

    pub fn with_search_text(&self, search_text: impl Into<String>) -> Self {
        Self::new(search_text, self.only_show_in_stock)
    }

    pub fn with_only_show_in_stock(&self, only_show_in_stock: bool) -> Self {
        Self::new(self.search_text.clone(), only_show_in_stock)
    }

    /// Lowercased needle used by the matching predicate.
    pub(crate) fn needle(&self) -> String {
        self.search_text.to_lowercase()
    }
}

impl ValueObject for SearchState {}
