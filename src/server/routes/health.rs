use axum::Json;
use serde_json::{Value, json};

pub(super) async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
