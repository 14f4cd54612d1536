//! Fruit CRUD handlers: each runs one service operation and translates its outcome.

use crate::error::AppError;
use crate::response::{created, deleted, ok};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub const GREETING: &str = "Hello World";

/// Unreadable bodies are client errors, reported like any other validation failure.
fn body_value(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(v)| v)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// Undecodable path ids are client errors too.
fn path_id(id: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

pub async fn index() -> &'static str {
    GREETING
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let fruits = state.fruits.list().await?;
    Ok(ok(fruits))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_value(body)?;
    let fruit = state.fruits.create(&body).await?;
    Ok(created(fruit))
}

pub async fn read(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id)?;
    let fruit = state.fruits.get(&id).await?;
    Ok(ok(fruit))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A malformed id outranks an unreadable body.
    let id = path_id(id)?;
    state.fruits.check_id(&id)?;
    let body = body_value(body)?;
    let fruit = state.fruits.update(&id, &body).await?;
    Ok(ok(fruit))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id)?;
    let fruit = state.fruits.delete(&id).await?;
    Ok(deleted(fruit))
}
