use anyhow::anyhow;
use async_graphql::{Context, Object, Result};
use todolist::model::{Item, ListId};
use todolist::{Store, StoreResult};
use tracing::info;

use crate::schema::errors::{Operation, app_state};
use crate::schema::types::{ItemInput, TodoList};
use crate::state::{AppState, ChangeEvent};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Append an item to `listId`, or to the selected list when omitted.
    async fn add_item(
        &self,
        ctx: &Context<'_>,
        values: Option<ItemInput>,
        list_id: Option<i32>,
    ) -> Result<Option<bool>> {
        let op = Operation::AddItem;
        let state = app_state(ctx, op)?;
        let mut store = state.store.write().await;
        let added = apply_add_item(state, &mut store, values.unwrap_or_default(), list_id)
            .map_err(|err| op.error(err))?;

        if let Some((list_id, item)) = added {
            info!(list_id, item_id = item.id, name = %item.name, "item added");
            state.notify(ChangeEvent::ItemsChanged { list_id });
        }
        Ok(Some(true))
    }

    /// Rename an item. Unknown item ids are ignored.
    async fn update_item(
        &self,
        ctx: &Context<'_>,
        values: Option<ItemInput>,
        list_id: Option<i32>,
    ) -> Result<Option<bool>> {
        let op = Operation::UpdateItem;
        let state = app_state(ctx, op)?;
        let mut store = state.store.write().await;
        let renamed = apply_update_item(state, &mut store, values.unwrap_or_default(), list_id)
            .map_err(|err| op.error(err))?;

        if let Some((list_id, item)) = renamed {
            info!(list_id, item_id = item.id, name = %item.name, "item renamed");
            state.notify(ChangeEvent::ItemsChanged { list_id });
        }
        Ok(Some(true))
    }

    /// Remove an item. Unknown item ids are ignored.
    async fn delete_item(
        &self,
        ctx: &Context<'_>,
        id: i32,
        list_id: Option<i32>,
    ) -> Result<Option<bool>> {
        let op = Operation::DeleteItem;
        let state = app_state(ctx, op)?;
        let mut store = state.store.write().await;
        let target = resolve_target(state, &store, list_id).map_err(|err| op.error(err))?;

        if let Some(list_id) = target
            && store.delete_item(list_id, id).is_some()
        {
            info!(list_id, item_id = id, "item deleted");
            state.notify(ChangeEvent::ItemsChanged { list_id });
        }
        Ok(Some(true))
    }

    /// Create an empty list.
    async fn add_todo_list(&self, ctx: &Context<'_>, name: String) -> Result<Option<TodoList>> {
        let op = Operation::AddList;
        let state = app_state(ctx, op)?;
        let mut store = state.store.write().await;
        let list = store.add_list(&name).map_err(|err| op.error(err))?;

        info!(list_id = list.id, name = %list.name, "list added");
        state.notify(ChangeEvent::ListsChanged);
        Ok(Some(list.into()))
    }

    /// Rename a list. Returns the renamed list, or null for an unknown id.
    async fn update_todo_list(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
    ) -> Result<Option<TodoList>> {
        let op = Operation::UpdateList;
        let state = app_state(ctx, op)?;
        let mut store = state.store.write().await;
        let renamed = store.rename_list(id, &name).map_err(|err| op.error(err))?;

        if renamed.is_some() {
            info!(list_id = id, name = %name, "list renamed");
            state.notify(ChangeEvent::ListsChanged);
        }
        Ok(renamed.map(TodoList::from))
    }

    /// Remove a list and its items. Unknown ids are ignored.
    async fn delete_todo_list(&self, ctx: &Context<'_>, id: i32) -> Result<Option<bool>> {
        let state = app_state(ctx, Operation::DeleteList)?;
        let mut store = state.store.write().await;

        if let Some(list) = store.delete_list(id) {
            info!(list_id = id, items = list.items.len(), "list deleted");
            state.notify(ChangeEvent::ListsChanged);
        }
        Ok(Some(true))
    }
}

/// The list an item mutation acts on: `list_id` if given, otherwise the
/// selected list.
fn resolve_target(
    state: &AppState,
    store: &Store,
    list_id: Option<ListId>,
) -> StoreResult<Option<ListId>> {
    if state.require_list_id && list_id.is_none() {
        return Err(anyhow!("listId is required").into());
    }
    Ok(store.target_list(list_id))
}

fn apply_add_item(
    state: &AppState,
    store: &mut Store,
    values: ItemInput,
    list_id: Option<ListId>,
) -> StoreResult<Option<(ListId, Item)>> {
    let name = values
        .name
        .ok_or_else(|| anyhow!("item name is required"))?;
    let Some(list_id) = resolve_target(state, store, list_id)? else {
        return Ok(None);
    };
    let added = store.add_item(list_id, &name)?;
    Ok(added.map(|item| (list_id, item)))
}

fn apply_update_item(
    state: &AppState,
    store: &mut Store,
    values: ItemInput,
    list_id: Option<ListId>,
) -> StoreResult<Option<(ListId, Item)>> {
    let Some(list_id) = resolve_target(state, store, list_id)? else {
        return Ok(None);
    };
    let Some(item_id) = values.id else {
        return Ok(None);
    };
    if store
        .list(list_id)
        .and_then(|list| list.item_index(item_id))
        .is_none()
    {
        return Ok(None);
    }
    let name = values
        .name
        .ok_or_else(|| anyhow!("item name is required"))?;
    let renamed = store.rename_item(list_id, item_id, &name)?;
    Ok(renamed.map(|item| (list_id, item)))
}
