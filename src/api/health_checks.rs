use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::app::{App, ReadinessError};

pub async fn ok() -> &'static str {
    "OK"
}

/// `GET /`
pub async fn welcome() -> Json<Value> {
    Json(json!({ "msg": "Welcome to my app" }))
}

/// Ready once the database answers a ping.
pub async fn ready(State(app): State<App>) -> Result<&'static str, ReadinessError> {
    app.db.ping().await.map_err(|err| {
        warn!(error = %err, "Readiness check failed");
        ReadinessError::DatabaseError(err)
    })?;

    Ok("OK")
}
