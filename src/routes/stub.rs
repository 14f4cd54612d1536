//! Stub routes: same paths as the fruit API, no state, no validation.

use crate::handlers::stub::{create, delete, index, list, read, update};
use axum::{routing::get, Router};

pub fn stub_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/fruits", get(list).post(create))
        .route("/fruits/:id", get(read).put(update).delete(delete))
}
