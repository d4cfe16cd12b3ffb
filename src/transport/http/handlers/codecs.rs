use crate::domain::SearchParams;
use crate::transport::http::handlers::common::{ensure_codec_registered, error_response, ok_response};
use crate::transport::http::types::{
    json_422, AppState, CodecListResponse, FormatRequest, FormatResponse,
    ParseResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/codecs",
    responses(
        (status = 200, description = "Registered codec names", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn list_codecs_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok_response(&CodecListResponse {
        codecs: state.registry.list_codecs(),
    })
}

/// Parses the request's own query string with the named codec.
///
/// Never fails on query content: unknown keys are ignored and invalid values fall
/// back to their defaults. The response carries the typed value and its canonical
/// query string (what the URL should be replaced with).
#[utoipa::path(
    get,
    path = "/api/codecs/{codec}/parse",
    params(
        ("codec" = String, Path, description = "Codec name (e.g. animals)")
    ),
    responses(
        (status = 200, description = "Typed value + canonical query", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "Unknown codec", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Internal server error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn parse_handler(
    State(state): State<AppState>,
    Path(codec): Path<String>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let codec_name = codec.trim().to_lowercase();
    let codec = match ensure_codec_registered(&state, &codec_name) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let params = SearchParams::from_query(query.as_deref().unwrap_or(""));
    let value = match codec.parse_json(&params) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(codec = %codec_name, error = %e, "typed value did not serialize");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize parsed value: {}", e),
            );
        }
    };
    let canonical = codec.normalize(&params);
    tracing::debug!(
        codec = %codec_name,
        keys_in = params.len(),
        keys_out = canonical.len(),
        "parsed search params"
    );

    ok_response(&ParseResponse {
        codec: codec_name,
        value,
        query: canonical.to_query(),
    })
}

/// Formats a typed value into its canonical query string.
///
/// With `current`, the codec's own keys in that query are replaced (or removed when
/// the field is at its default) and keys belonging to other components survive.
#[utoipa::path(
    post,
    path = "/api/codecs/{codec}/format",
    params(
        ("codec" = String, Path, description = "Codec name (e.g. animals)")
    ),
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Canonical query", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "Unknown codec", body = crate::transport::http::types::ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body or typed value)", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn format_handler(
    State(state): State<AppState>,
    Path(codec): Path<String>,
    request: Result<Json<FormatRequest>, JsonRejection>,
) -> impl IntoResponse {
    let codec_name = codec.trim().to_lowercase();
    let codec = match ensure_codec_registered(&state, &codec_name) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"value\": {...}, \"current\": \"<query>\"?}"),
    };

    let mut params = request
        .current
        .as_deref()
        .map(SearchParams::from_query)
        .unwrap_or_default();
    if let Err(e) = codec.write_json(request.value, &mut params) {
        tracing::warn!(codec = %codec_name, error = %e, "rejected typed value");
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Invalid value for codec '{}': {}", codec_name, e),
        );
    }

    ok_response(&FormatResponse {
        codec: codec_name,
        query: params.to_query(),
        params,
    })
}
