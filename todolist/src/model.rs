use serde::{Deserialize, Serialize};

pub type ListId = i32;
pub type ItemId = i32;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    pub items: Vec<Item>,
}

impl TodoList {
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn item_index(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// A read-only copy of a list as handed to callers.
///
/// `id` and `name` are `None` only for the empty placeholder returned when the
/// requested list does not exist.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ListView {
    pub id: Option<ListId>,
    pub name: Option<String>,
    pub items: Vec<Item>,
}

impl ListView {
    /// Placeholder for a missing list: no id, no name, no items.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty_placeholder(&self) -> bool {
        self.id.is_none()
    }
}

impl From<&TodoList> for ListView {
    fn from(list: &TodoList) -> Self {
        Self {
            id: Some(list.id),
            name: Some(list.name.clone()),
            items: list.items.clone(),
        }
    }
}
