//! In-memory store, used for development runs and tests

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StockLevels, Store};
use crate::{
    error::{AppError, AppResult},
    models::{Resource, Stock},
};

struct Table<R> {
    next_id: i64,
    rows: BTreeMap<i64, R>,
}

/// Records of one resource kept in a `BTreeMap` behind a lock
pub struct MemoryStore<R: Resource> {
    table: RwLock<Table<R>>,
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Table<R> {
    /// Id of another record already holding `key`
    fn key_holder(&self, key: &R::Key, except: Option<i64>) -> Option<i64> {
        self.rows
            .values()
            .find(|row| Some(row.id()) != except && &row.key() == key)
            .map(|row| row.id())
    }

    fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("{} {} not found", R::NAME, id))
    }
}

fn conflict<R: Resource>(key: &R::Key, holder: i64) -> AppError {
    AppError::Conflict(format!(
        "{} {:?} already exists with id {}",
        R::NAME,
        key,
        holder
    ))
}

#[async_trait]
impl<R: Resource> Store<R> for MemoryStore<R> {
    async fn list(&self) -> AppResult<Vec<R>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> AppResult<R> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| Table::<R>::not_found(id))
    }

    async fn find_by_key(&self, key: &R::Key) -> AppResult<Option<R>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|row| &row.key() == key).cloned())
    }

    async fn insert(&self, payload: &R::Payload) -> AppResult<R> {
        let mut table = self.table.write().await;
        let key = R::payload_key(payload);
        if let Some(holder) = table.key_holder(&key, None) {
            return Err(conflict::<R>(&key, holder));
        }

        let id = table.next_id;
        table.next_id += 1;
        let record = R::from_payload(id, payload.clone());
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn replace(&self, id: i64, payload: &R::Payload) -> AppResult<R> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Err(Table::<R>::not_found(id));
        }
        let key = R::payload_key(payload);
        if let Some(holder) = table.key_holder(&key, Some(id)) {
            return Err(conflict::<R>(&key, holder));
        }

        let record = R::from_payload(id, payload.clone());
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Table::<R>::not_found(id))
    }
}

#[async_trait]
impl StockLevels for MemoryStore<Stock> {
    async fn adjust(&self, id: i64, delta: i32) -> AppResult<Stock> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| Table::<Stock>::not_found(id))?;

        let adjusted = row.adjusted(delta).ok_or_else(|| {
            AppError::OutOfBounds(format!(
                "Stock {} holds {} of {} copies, cannot move {}",
                id, row.current_stock, row.initial_stock, delta
            ))
        })?;
        *row = adjusted.clone();
        Ok(adjusted)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{Media, MediaPayload, StockPayload};

    fn media(name: &str) -> MediaPayload {
        MediaPayload {
            name: name.to_string(),
            description: None,
            release_date: None,
            supports: vec!["dvd".to_string()],
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryStore::<Media>::new();
        let first = store.insert(&media("Alien")).await.unwrap();
        let second = store.insert(&media("Aliens")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_insert_rejects_taken_key() {
        let store = MemoryStore::<Media>::new();
        store.insert(&media("Alien")).await.unwrap();

        let duplicate = store.insert(&media("Alien")).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_replace_keeps_id_and_own_key() {
        let store = MemoryStore::<Media>::new();
        let alien = store.insert(&media("Alien")).await.unwrap();

        let mut payload = media("Alien");
        payload.description = Some("In space no one can hear you scream".to_string());
        let replaced = store.replace(alien.id, &payload).await.unwrap();

        assert_eq!(replaced.id, alien.id);
        assert_eq!(replaced.description, payload.description);
        assert_eq!(store.get(alien.id).await.unwrap(), replaced);
    }

    #[tokio::test]
    async fn test_replace_rejects_key_of_other_record() {
        let store = MemoryStore::<Media>::new();
        store.insert(&media("Alien")).await.unwrap();
        let aliens = store.insert(&media("Aliens")).await.unwrap();

        let result = store.replace(aliens.id, &media("Alien")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_missing_records() {
        let store = MemoryStore::<Media>::new();
        assert!(matches!(store.get(9).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.replace(9, &media("x")).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.delete(9).await, Err(AppError::NotFound(_))));
        assert!(store.find_by_key(&("x".to_string(), None)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_decrements_never_go_below_zero() {
        let store = Arc::new(MemoryStore::<Stock>::new());
        let stock = store
            .insert(&StockPayload {
                media_id: 1,
                initial_stock: 5,
                current_stock: 5,
            })
            .await
            .unwrap();

        let id = stock.id;
        let handles: Vec<_> = (0..20)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.adjust(id, -1).await })
            })
            .collect();

        let mut granted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                granted += 1;
            }
        }

        assert_eq!(granted, 5);
        assert_eq!(store.get(id).await.unwrap().current_stock, 0);
    }
}
