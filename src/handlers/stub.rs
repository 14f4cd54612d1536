//! Stateless stub handlers: every route answers 200 with a fixed or echoed text message.

use axum::{
    extract::{rejection::JsonRejection, Path},
    Json,
};
use serde_json::Value;

/// Echo of the body's `name`, or `undefined` when the body has no such key.
fn echoed_name(body: Result<Json<Value>, JsonRejection>) -> String {
    match body.ok().as_ref().and_then(|Json(v)| v.get("name")) {
        Some(Value::String(s)) => s.clone(),
        None => "undefined".into(),
        Some(other) => other.to_string(),
    }
}

pub async fn index() -> &'static str {
    super::fruits::GREETING
}

pub async fn list() -> &'static str {
    "Fetching all fruits"
}

pub async fn read(Path(id): Path<String>) -> String {
    format!("Fetching fruit with ID {}", id)
}

pub async fn create(body: Result<Json<Value>, JsonRejection>) -> String {
    format!("Fruit {} added successfully!", echoed_name(body))
}

pub async fn update(Path(id): Path<String>, body: Result<Json<Value>, JsonRejection>) -> String {
    format!("Fruit with ID {} updated to {}", id, echoed_name(body))
}

pub async fn delete(Path(id): Path<String>) -> String {
    format!("Fruit with ID {} deleted successfully", id)
}
