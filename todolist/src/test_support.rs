//! Test-only helpers for building stores.

use crate::config::ListSeed;
use crate::core::ids::IdPolicy;
use crate::model::{ListId, ListView};
use crate::store::Store;

/// Build a sequential-id store from `(list name, item names)` pairs.
pub fn store_with(lists: &[(&str, &[&str])]) -> Store {
    Store::seeded(IdPolicy::Sequential, &seeds(lists)).expect("seed store")
}

pub fn seeds(lists: &[(&str, &[&str])]) -> Vec<ListSeed> {
    lists
        .iter()
        .map(|(name, items)| ListSeed {
            name: name.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        })
        .collect()
}

/// Id of the list named exactly `name`. Panics if absent.
pub fn list_id(store: &Store, name: &str) -> ListId {
    store
        .lists()
        .iter()
        .find(|list| list.name == name)
        .map(|list| list.id)
        .unwrap_or_else(|| panic!("no list named {name}"))
}

pub fn item_names(view: &ListView) -> Vec<&str> {
    view.items.iter().map(|item| item.name.as_str()).collect()
}
