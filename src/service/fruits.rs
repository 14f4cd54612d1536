//! Fruit operations. Each validates its input first, then makes at most one store call.

use crate::error::AppError;
use crate::id::IdFormat;
use crate::model::Fruit;
use crate::service::RequestValidator;
use crate::store::FruitStore;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct FruitService {
    store: Arc<dyn FruitStore>,
    ids: Arc<dyn IdFormat>,
}

impl FruitService {
    /// `ids` must describe the ids `store` generates.
    pub fn new(store: Arc<dyn FruitStore>, ids: Arc<dyn IdFormat>) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &dyn FruitStore {
        self.store.as_ref()
    }

    pub fn check_id(&self, id: &str) -> Result<(), AppError> {
        RequestValidator::validate_id(self.ids.as_ref(), id).map(|_| ())
    }

    pub async fn create(&self, body: &Value) -> Result<Fruit, AppError> {
        let name = RequestValidator::require_name(body)?;
        let fruit = self.store.create(&name).await?;
        tracing::info!(id = %fruit.id, "fruit created");
        Ok(fruit)
    }

    pub async fn get(&self, id: &str) -> Result<Fruit, AppError> {
        let id = RequestValidator::validate_id(self.ids.as_ref(), id)?;
        self.store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("fruit {}", id)))
    }

    pub async fn list(&self) -> Result<Vec<Fruit>, AppError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn update(&self, id: &str, body: &Value) -> Result<Fruit, AppError> {
        let id = RequestValidator::validate_id(self.ids.as_ref(), id)?;
        let name = RequestValidator::require_name(body)?;
        self.store
            .update_by_id(&id, &name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("fruit {}", id)))
    }

    pub async fn delete(&self, id: &str) -> Result<Fruit, AppError> {
        let id = RequestValidator::validate_id(self.ids.as_ref(), id)?;
        let fruit = self
            .store
            .delete_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("fruit {}", id)))?;
        tracing::info!(id = %fruit.id, "fruit deleted");
        Ok(fruit)
    }
}
