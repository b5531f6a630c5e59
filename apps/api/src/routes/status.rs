use axum::Json;
use serde_json::{json, Value};

use crate::llm_client::MODEL;

/// GET /
/// Static status payload identifying the service and its model engine.
/// Never touches the generation API.
pub async fn status_handler() -> Json<Value> {
    Json(json!({
        "status": "online",
        "engine": MODEL,
        "message": "Resume analysis service is running"
    }))
}
