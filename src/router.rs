use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{adverts, api, app::App};

pub fn router(app: App) -> Router {
    let api_router = Router::new().nest("/api", adverts::routes());

    Router::new()
        .route("/", get(api::health_checks::welcome))
        .route("/liveness", get(api::health_checks::ok))
        .route("/readiness", get(api::health_checks::ready))
        .merge(api_router)
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}
