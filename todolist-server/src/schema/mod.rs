//! GraphQL schema and resolvers.
//!
//! - **Queries**: `todoList`, `todoLists`
//! - **Mutations**: `addItem`, `updateItem`, `deleteItem`, `addTodoList`,
//!   `updateTodoList`, `deleteTodoList`
//!
//! Item mutations act on the list named by their optional `listId` argument,
//! falling back to the list last fetched with `todoList(id:)`. That fallback
//! is process-wide: two clients alternating `todoList` calls redirect each
//! other's item mutations. Clients that pass `listId` are unaffected.

pub mod errors;
mod mutation;
mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::state::AppState;

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
