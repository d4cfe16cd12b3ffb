use crate::domain::DynSearchCodec;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

pub type ApiError = (StatusCode, Json<ApiResponse>);

pub fn ensure_codec_registered(
    state: &AppState,
    codec_name: &str,
) -> Result<Arc<dyn DynSearchCodec>, ApiError> {
    state.registry.get(codec_name).ok_or_else(|| {
        error_response(
            StatusCode::NOT_FOUND,
            format!("Codec '{}' is not registered", codec_name),
        )
    })
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }),
    )
}

/// 200 with `data` serialized into the envelope.
pub fn ok_response<T: Serialize>(data: &T) -> ApiError {
    match serde_json::to_value(data) {
        Ok(value) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(value),
                error: None,
            }),
        ),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to serialize response: {}", e),
        ),
    }
}
