//! Fruit CRUD routes.

use crate::handlers::fruits::{create, delete as delete_handler, index, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn fruit_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/fruits", get(list).post(create))
        .route("/fruits/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::UuidFormat;
    use crate::store::MemoryFruitStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        fruit_routes(AppState::new(Arc::new(MemoryFruitStore::new()), Arc::new(UuidFormat)))
    }

    async fn call(router: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let req = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        (status, bytes.to_vec())
    }

    fn json_of(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn greeting() {
        let (status, body) = call(&router(), "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Hello World");
    }

    #[tokio::test]
    async fn create_returns_201_with_generated_id() {
        let (status, body) = call(&router(), "POST", "/fruits", Some(r#"{"name":"Apple"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        let v = json_of(&body);
        assert_eq!(v["name"], "Apple");
        assert!(v["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(v["createdAt"].is_string());
        assert!(v["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn unreadable_bodies_are_400() {
        let r = router();
        let (status, body) = call(&r, "POST", "/fruits", Some("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_of(&body)["error"]["code"], "validation_error");
        let (status, _) = call(&r, "POST", "/fruits", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn put_with_bad_id_and_bad_body_reports_the_id() {
        let (status, body) = call(&router(), "PUT", "/fruits/nope", Some("{")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let msg = json_of(&body)["error"]["message"].as_str().unwrap().to_string();
        assert!(msg.contains("invalid id 'nope'"), "{msg}");
    }

    #[tokio::test]
    async fn undecodable_path_id_uses_the_error_envelope() {
        let r = router();
        for method in ["GET", "DELETE"] {
            let (status, body) = call(&r, method, "/fruits/%FF", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
            assert_eq!(json_of(&body)["error"]["code"], "validation_error");
        }
        let (status, body) = call(&r, "PUT", "/fruits/%FF", Some(r#"{"name":"Pear"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_of(&body)["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let r = router();
        for name in ["Apple", "Banana"] {
            let (status, _) = call(&r, "POST", "/fruits", Some(&json!({ "name": name }).to_string())).await;
            assert_eq!(status, StatusCode::CREATED);
        }
        let (status, body) = call(&r, "GET", "/fruits", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = json_of(&body)
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Banana", "Apple"]);
    }

    #[tokio::test]
    async fn delete_returns_message_and_record() {
        let r = router();
        let (_, body) = call(&r, "POST", "/fruits", Some(r#"{"name":"Plum"}"#)).await;
        let id = json_of(&body)["id"].as_str().unwrap().to_string();
        let (status, body) = call(&r, "DELETE", &format!("/fruits/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let v = json_of(&body);
        assert_eq!(v["message"], "Fruit deleted successfully");
        assert_eq!(v["deleted"]["id"], id.as_str());
        let (status, _) = call(&r, "DELETE", &format!("/fruits/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_method_is_405() {
        let (status, _) = call(&router(), "PATCH", "/fruits", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
