use axum::Json;
use serde_json::{json, Value};

/// Liveness message for the API root.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Gaming API is running" }))
}
