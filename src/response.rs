//! Success response helpers.

use crate::model::{DeletedFruit, Fruit};
use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn deleted(fruit: Fruit) -> (StatusCode, Json<DeletedFruit>) {
    ok(DeletedFruit {
        message: "Fruit deleted successfully".into(),
        deleted: fruit,
    })
}
