//! Fruit record as stored and as returned to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fruit {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a successful DELETE.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedFruit {
    pub message: String,
    pub deleted: Fruit,
}
