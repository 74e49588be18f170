//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use mongodb::Client;

/// `GET /ready`, nested under `/api`
pub fn router(mongo_client: Client) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(mongo_client)
}

/// Readiness check - verifies MongoDB answers a ping
async fn readiness_check(State(client): State<Client>) -> impl IntoResponse {
    let mongodb: HealthCheckFuture<'_> = Box::pin(async move {
        let status = database::mongodb::check_health_detailed(&client).await;
        tracing::debug!(latency_ms = status.response_time_ms, "MongoDB ping");
        if status.healthy {
            Ok(())
        } else {
            Err(status
                .message
                .unwrap_or_else(|| "ping failed".to_string()))
        }
    });

    run_health_checks(vec![("mongodb", mongodb)]).await
}
