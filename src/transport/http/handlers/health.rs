use crate::transport::http::handlers::common::ok_response;
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok_response(&serde_json::json!({
        "status": "ok",
        "codecs": state.registry.len(),
    }))
}
