use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::ItemStore;
use crate::{error::AppResult, models::ClothingItem};

/// Item store kept in process memory
///
/// Used when no database is configured and in tests. Contents are lost on
/// restart.
#[derive(Default)]
pub struct InMemoryItemStore {
    wardrobes: RwLock<HashMap<String, Vec<ClothingItem>>>,
}

impl InMemoryItemStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_items(&self, owner: &str) -> AppResult<Vec<ClothingItem>> {
        let wardrobes = self.wardrobes.read().await;
        let mut items = wardrobes.get(owner).cloned().unwrap_or_default();
        // Later inserts first when timestamps tie
        items.reverse();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn insert_item(&self, owner: &str, item: ClothingItem) -> AppResult<ClothingItem> {
        let mut wardrobes = self.wardrobes.write().await;
        wardrobes
            .entry(owner.to_string())
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    async fn delete_item(&self, owner: &str, id: Uuid) -> AppResult<bool> {
        let mut wardrobes = self.wardrobes.write().await;
        let Some(items) = wardrobes.get_mut(owner) else {
            return Ok(false);
        };

        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() != before)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::services::test_support::{item, ItemExt};
    use chrono::Duration;

    #[test]
    fn test_list_is_newest_first() {
        let store = InMemoryItemStore::new();
        let mut older = item(Category::Top).with_name("older");
        older.created_at -= Duration::minutes(5);
        let newer = item(Category::Bottom).with_name("newer");

        tokio_test::block_on(async {
            store.insert_item("alice", older).await.unwrap();
            store.insert_item("alice", newer).await.unwrap();

            let names: Vec<String> = store
                .list_items("alice")
                .await
                .unwrap()
                .into_iter()
                .map(|item| item.name)
                .collect();
            assert_eq!(names, vec!["newer", "older"]);
        });
    }

    #[tokio::test]
    async fn test_owners_are_isolated() {
        let store = InMemoryItemStore::new();
        let shirt = store.insert_item("alice", item(Category::Top)).await.unwrap();

        assert!(store.list_items("bob").await.unwrap().is_empty());
        assert!(!store.delete_item("bob", shirt.id).await.unwrap());
        assert_eq!(store.list_items("alice").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_item() {
        let store = InMemoryItemStore::new();
        let shirt = store.insert_item("alice", item(Category::Top)).await.unwrap();

        assert!(store.delete_item("alice", shirt.id).await.unwrap());
        assert!(!store.delete_item("alice", shirt.id).await.unwrap());
        assert!(store.list_items("alice").await.unwrap().is_empty());
    }
}
