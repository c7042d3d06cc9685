use std::sync::Arc;

use crate::db::{InMemoryItemStore, ItemStore};
use crate::services::Recommender;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub recommender: Recommender,
}

impl AppState {
    /// Creates application state backed by the given item store
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            store,
            recommender: Recommender::default(),
        }
    }

    /// State with an empty, process-local wardrobe
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemStore::new()))
    }
}
