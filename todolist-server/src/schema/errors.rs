//! Mapping of store errors onto GraphQL errors.
//!
//! Every error carries a `code` extension the front end keys on, plus a
//! `kind` extension (`validation` or `internal`). Validation errors keep
//! their own code whichever resolver raised them; internal faults get the
//! resolver's fixed code and message, and their cause is logged.

use async_graphql::{Context, Error, ErrorExtensions};
use todolist::{StoreError, ValidationError};
use tracing::{error, info};

use crate::state::AppState;

/// The resolver an error is raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchList,
    AddItem,
    UpdateItem,
    DeleteItem,
    AddList,
    UpdateList,
    DeleteList,
}

impl Operation {
    pub fn field(self) -> &'static str {
        match self {
            Operation::FetchList => "todoList",
            Operation::AddItem => "addItem",
            Operation::UpdateItem => "updateItem",
            Operation::DeleteItem => "deleteItem",
            Operation::AddList => "addTodoList",
            Operation::UpdateList => "updateTodoList",
            Operation::DeleteList => "deleteTodoList",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Operation::FetchList => "ERRO_BUSCAR_LISTA",
            Operation::AddItem => "ERRO_ADICIONAR_ITEM",
            Operation::UpdateItem => "ERRO_ATUALIZAR_ITEM",
            Operation::DeleteItem => "ERRO_DELETAR_ITEM",
            Operation::AddList => "ERRO_ADICIONAR_LISTA",
            Operation::UpdateList => "ERRO_ATUALIZAR_LISTA",
            Operation::DeleteList => "ERRO_DELETAR_LISTA",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Operation::FetchList => "Erro ao buscar listas disponíveis!",
            Operation::AddItem => "Erro ao adicionar item na lista!",
            Operation::UpdateItem => "Erro ao atualizar item na lista!",
            Operation::DeleteItem => "Erro ao tentar deletar item!",
            Operation::AddList => "Erro ao adicionar lista!",
            Operation::UpdateList => "Erro ao atualizar lista!",
            Operation::DeleteList => "Erro ao deletar lista!",
        }
    }

    /// Convert a store error raised by this operation into a GraphQL error.
    pub fn error(self, err: StoreError) -> Error {
        match err {
            StoreError::Validation(err) => {
                info!(operation = self.field(), error = %err, "request rejected");
                tagged(validation_message(&err), validation_code(&err), "validation")
            }
            StoreError::Internal(cause) => {
                let cause = format!("{cause:#}");
                error!(operation = self.field(), error = %cause, "resolver failed");
                tagged(self.message(), self.code(), "internal")
            }
        }
    }
}

pub fn validation_code(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::DuplicateItem { .. } => "ITEM_EXISTENTE",
        ValidationError::DuplicateList { .. } => "LISTA_EXISTENTE",
    }
}

pub fn validation_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::DuplicateItem { .. } => {
            "Um item de mesmo nome foi encontrado na todo-list!"
        }
        ValidationError::DuplicateList { .. } => "Uma lista com esse nome já existe!",
    }
}

fn tagged(message: &str, code: &'static str, kind: &'static str) -> Error {
    Error::new(message).extend_with(|_, ext| {
        ext.set("code", code.to_string());
        ext.set("kind", kind.to_string());
    })
}

/// Shared state from the schema data, reported as an internal fault of `op`
/// if missing.
pub fn app_state<'ctx>(ctx: &Context<'ctx>, op: Operation) -> async_graphql::Result<&'ctx AppState> {
    ctx.data::<AppState>()
        .map_err(|err| op.error(anyhow::anyhow!("schema data: {}", err.message).into()))
}
