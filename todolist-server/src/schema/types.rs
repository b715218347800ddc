//! GraphQL object and input types.
//!
//! Fields are nullable to match the published schema; the empty placeholder
//! list is the only value that actually carries nulls.

use async_graphql::{InputObject, SimpleObject};
use todolist::model;

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Item {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct TodoList {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub items: Option<Vec<Option<Item>>>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct ItemInput {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct ItemFilter {
    pub id: Option<i32>,
    /// Keep items whose name contains this text, ignoring case.
    pub name: Option<String>,
}

impl From<model::Item> for Item {
    fn from(item: model::Item) -> Self {
        Self {
            id: Some(item.id),
            name: Some(item.name),
        }
    }
}

impl From<model::ListView> for TodoList {
    fn from(view: model::ListView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            items: Some(view.items.into_iter().map(|item| Some(item.into())).collect()),
        }
    }
}

impl From<model::TodoList> for TodoList {
    fn from(list: model::TodoList) -> Self {
        model::ListView::from(&list).into()
    }
}
