//! In-process fruit store, used for tests and for running without a database.

use super::FruitStore;
use crate::error::StoreError;
use crate::model::Fruit;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

/// Records are kept in creation order; listing walks them backwards.
#[derive(Clone, Default)]
pub struct MemoryFruitStore {
    records: Arc<RwLock<Vec<Fruit>>>,
}

impl MemoryFruitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".into())
}

#[async_trait]
impl FruitStore for MemoryFruitStore {
    async fn create(&self, name: &str) -> Result<Fruit, StoreError> {
        let now = Utc::now();
        let fruit = Fruit {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.records.write().map_err(poisoned)?.push(fruit.clone());
        Ok(fruit)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Fruit>, StoreError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().find(|f| f.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Fruit>, StoreError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().rev().cloned().collect())
    }

    async fn update_by_id(&self, id: &str, name: &str) -> Result<Option<Fruit>, StoreError> {
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(records.iter_mut().find(|f| f.id == id).map(|f| {
            f.name = name.to_string();
            f.updated_at = Utc::now();
            f.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Fruit>, StoreError> {
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(records
            .iter()
            .position(|f| f.id == id)
            .map(|i| records.remove(i)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
