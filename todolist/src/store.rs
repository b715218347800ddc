//! In-memory store of to-do lists.
//!
//! The store owns every list and tracks one "selected" list id. Item
//! operations come in two forms: the `*_selected*` / `find_item_index` /
//! `item_name_exists` family acts on the selected list, while `add_item`,
//! `rename_item` and `delete_item` take the target list id explicitly.
//! Callers that cannot name a list use [`Store::target_list`] to fall back to
//! the selection.
//!
//! The GraphQL resolvers only use `target_list` and the explicit-list
//! operations; the selected-list family is the compatibility surface for
//! callers that track the selection themselves.
//!
//! Operations on a list id that does not exist are silent no-ops; only name
//! collisions and id allocation failures are errors.

use std::collections::HashSet;

use anyhow::Context;
use tracing::debug;

use crate::config::ListSeed;
use crate::core::ids::{IdGenerator, IdPolicy};
use crate::core::invariants::validate_invariants;
use crate::core::names::{name_contains, names_match};
use crate::error::{StoreResult, ValidationError};
use crate::model::{Item, ItemId, ListId, ListView, TodoList};

#[derive(Debug, Clone)]
pub struct Store {
    lists: Vec<TodoList>,
    selected: Option<ListId>,
    ids: IdGenerator,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

impl Store {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            lists: Vec::new(),
            selected: None,
            ids: IdGenerator::new(policy),
        }
    }

    /// Build a store pre-populated with `seeds`, in order.
    ///
    /// Seeds go through the same name checks as runtime additions.
    pub fn seeded(policy: IdPolicy, seeds: &[ListSeed]) -> StoreResult<Self> {
        let mut store = Self::new(policy);
        for seed in seeds {
            let list = store.add_list(&seed.name)?;
            for item in &seed.items {
                store.add_item(list.id, item)?;
            }
        }
        Ok(store)
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn list(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == id)
    }

    fn list_mut(&mut self, id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.ids.policy()
    }

    pub fn check_invariants(&self) -> Vec<String> {
        validate_invariants(&self.lists)
    }

    // Selection

    /// Record `id` as the selected list. The id is not checked.
    pub fn set_selected_list(&mut self, id: Option<ListId>) {
        self.selected = id;
    }

    pub fn selected_list_id(&self) -> Option<ListId> {
        self.selected
    }

    /// The selected list, or the empty placeholder if nothing matches.
    pub fn selected_list(&self) -> ListView {
        self.view(self.selected)
    }

    /// Overwrite the selected list's items. No-op if the list does not exist.
    pub fn replace_selected_list_items(&mut self, items: Vec<Item>) {
        let Some(id) = self.selected else {
            return;
        };
        if let Some(list) = self.list_mut(id) {
            list.items = items;
        }
    }

    /// Position of item `id` within the selected list.
    pub fn find_item_index(&self, id: ItemId) -> Option<usize> {
        self.selected
            .and_then(|list_id| self.list(list_id))
            .and_then(|list| list.item_index(id))
    }

    /// True if the selected list has an item named `name`.
    pub fn item_name_exists(&self, name: &str) -> bool {
        self.selected
            .is_some_and(|list_id| self.item_name_exists_in(list_id, name, None))
    }

    /// True if any list is named `name`.
    pub fn list_name_exists(&self, name: &str) -> bool {
        self.lists.iter().any(|list| names_match(&list.name, name))
    }

    /// `explicit` if given, otherwise the selected list.
    pub fn target_list(&self, explicit: Option<ListId>) -> Option<ListId> {
        explicit.or(self.selected)
    }

    /// Allocate an id unused by any list or item in the store.
    pub fn next_id(&mut self) -> StoreResult<i32> {
        let used: HashSet<i32> = self
            .lists
            .iter()
            .flat_map(|list| std::iter::once(list.id).chain(list.items.iter().map(|item| item.id)))
            .collect();
        let id = self.ids.next_id(&used).context("allocate id")?;
        Ok(id)
    }

    // Lists

    pub fn add_list(&mut self, name: &str) -> StoreResult<TodoList> {
        if self.list_name_exists(name) {
            return Err(ValidationError::DuplicateList {
                name: name.to_string(),
            }
            .into());
        }
        let list = TodoList::new(self.next_id()?, name);
        debug!(list_id = list.id, name = %list.name, "list added");
        self.lists.push(list.clone());
        Ok(list)
    }

    /// Rename list `id`. Returns `None` if no such list exists.
    ///
    /// Renaming a list to its own name, in any case, is allowed.
    pub fn rename_list(&mut self, id: ListId, name: &str) -> StoreResult<Option<TodoList>> {
        if self.list(id).is_none() {
            return Ok(None);
        }
        let collides = self
            .lists
            .iter()
            .any(|list| list.id != id && names_match(&list.name, name));
        if collides {
            return Err(ValidationError::DuplicateList {
                name: name.to_string(),
            }
            .into());
        }
        let Some(list) = self.list_mut(id) else {
            return Ok(None);
        };
        list.name = name.to_string();
        debug!(list_id = id, name, "list renamed");
        Ok(Some(list.clone()))
    }

    pub fn delete_list(&mut self, id: ListId) -> Option<TodoList> {
        let index = self.lists.iter().position(|list| list.id == id)?;
        debug!(list_id = id, "list deleted");
        Some(self.lists.remove(index))
    }

    // Items

    fn item_name_exists_in(&self, list_id: ListId, name: &str, except: Option<ItemId>) -> bool {
        self.list(list_id).is_some_and(|list| {
            list.items
                .iter()
                .any(|item| Some(item.id) != except && names_match(&item.name, name))
        })
    }

    /// Append an item named `name` to list `list_id`. Returns `None` if the
    /// list does not exist.
    pub fn add_item(&mut self, list_id: ListId, name: &str) -> StoreResult<Option<Item>> {
        if self.list(list_id).is_none() {
            return Ok(None);
        }
        if self.item_name_exists_in(list_id, name, None) {
            return Err(ValidationError::DuplicateItem {
                name: name.to_string(),
            }
            .into());
        }
        let item = Item {
            id: self.next_id()?,
            name: name.to_string(),
        };
        let Some(list) = self.list_mut(list_id) else {
            return Ok(None);
        };
        list.items.push(item.clone());
        debug!(list_id, item_id = item.id, name = %item.name, "item added");
        Ok(Some(item))
    }

    /// Rename item `item_id` in list `list_id`. Returns `None` if either does
    /// not exist.
    pub fn rename_item(
        &mut self,
        list_id: ListId,
        item_id: ItemId,
        name: &str,
    ) -> StoreResult<Option<Item>> {
        let Some(index) = self.list(list_id).and_then(|list| list.item_index(item_id)) else {
            return Ok(None);
        };
        if self.item_name_exists_in(list_id, name, Some(item_id)) {
            return Err(ValidationError::DuplicateItem {
                name: name.to_string(),
            }
            .into());
        }
        let Some(list) = self.list_mut(list_id) else {
            return Ok(None);
        };
        let item = &mut list.items[index];
        item.name = name.to_string();
        debug!(list_id, item_id, name, "item renamed");
        Ok(Some(item.clone()))
    }

    pub fn delete_item(&mut self, list_id: ListId, item_id: ItemId) -> Option<Item> {
        let list = self.list_mut(list_id)?;
        let index = list.item_index(item_id)?;
        debug!(list_id, item_id, "item deleted");
        Some(list.items.remove(index))
    }

    // Views

    /// Copy of list `id`, or the empty placeholder.
    pub fn view(&self, id: Option<ListId>) -> ListView {
        id.and_then(|id| self.list(id))
            .map(ListView::from)
            .unwrap_or_else(ListView::empty)
    }

    /// Copy of list `id` keeping only items whose name contains `needle`,
    /// ignoring case. The store itself is left untouched.
    pub fn filtered(&self, id: Option<ListId>, needle: &str) -> ListView {
        let mut view = self.view(id);
        if !needle.is_empty() {
            view.items.retain(|item| name_contains(&item.name, needle));
        }
        view
    }
}
