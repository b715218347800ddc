//! Shared application state for the server.

use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use todolist::Store;
use todolist::model::ListId;

/// Events broadcast to SSE clients after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A list was added, renamed or deleted.
    ListsChanged,
    /// Items of one list were added, renamed or deleted.
    ItemsChanged { list_id: ListId },
}

/// Shared state accessible from all request handlers and resolvers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    /// Broadcast sender for change events.
    pub event_tx: Arc<broadcast::Sender<ChangeEvent>>,
    /// Item mutations must carry `listId`; the selection fallback is off.
    pub require_list_id: bool,
}

impl AppState {
    pub fn new(store: Store, require_list_id: bool) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            store: Arc::new(RwLock::new(store)),
            event_tx: Arc::new(event_tx),
            require_list_id,
        }
    }

    /// Broadcast `event`. Dropped silently when nobody is listening.
    pub fn notify(&self, event: ChangeEvent) {
        let _ = self.event_tx.send(event);
    }
}
