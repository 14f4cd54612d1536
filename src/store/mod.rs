//! Fruit persistence: the store trait and its Postgres and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryFruitStore;
pub use postgres::{ensure_database_exists, ensure_fruits_table, PgFruitStore, FRUITS_TABLE};

use crate::error::StoreError;
use crate::model::Fruit;
use async_trait::async_trait;

/// Document-store operations on fruit records. Ids are generated by the store.
/// Lookups by an id the store does not recognise return `Ok(None)`, never an error.
#[async_trait]
pub trait FruitStore: Send + Sync {
    async fn create(&self, name: &str) -> Result<Fruit, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Fruit>, StoreError>;

    /// All records, most recently created first.
    async fn find_all(&self) -> Result<Vec<Fruit>, StoreError>;

    /// Replaces the name and refreshes `updated_at`. Returns the updated record.
    async fn update_by_id(&self, id: &str, name: &str) -> Result<Option<Fruit>, StoreError>;

    /// Hard delete. Returns the record as it was before removal.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Fruit>, StoreError>;

    /// Cheap connectivity check used by readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}
