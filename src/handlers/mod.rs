//! HTTP handlers for the persisted fruit API and the stub router.

pub mod fruits;
pub mod stub;
