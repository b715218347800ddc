use async_graphql::{Context, Object, Result};
use tracing::debug;

use crate::schema::errors::{Operation, app_state};
use crate::schema::types::{ItemFilter, TodoList};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single list, with items optionally filtered by name.
    ///
    /// Also selects the list as the target of item mutations that omit
    /// `listId`. Unknown ids yield a list with null id and name and no items.
    async fn todo_list(
        &self,
        ctx: &Context<'_>,
        filter: Option<ItemFilter>,
        id: Option<i32>,
    ) -> Result<Option<TodoList>> {
        let state = app_state(ctx, Operation::FetchList)?;
        let mut store = state.store.write().await;
        store.set_selected_list(id);

        let needle = filter.and_then(|filter| filter.name).unwrap_or_default();
        let view = store.filtered(id, &needle);
        debug!(
            list_id = ?id,
            filter = %needle,
            found = !view.is_empty_placeholder(),
            "todoList"
        );
        Ok(Some(view.into()))
    }

    /// Every list, in creation order.
    async fn todo_lists(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<TodoList>>>> {
        let state = app_state(ctx, Operation::FetchList)?;
        let store = state.store.read().await;
        let lists: Vec<Option<TodoList>> = store
            .lists()
            .iter()
            .cloned()
            .map(|list| Some(list.into()))
            .collect();
        Ok(Some(lists))
    }
}
