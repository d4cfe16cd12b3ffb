use crate::transport::http::handlers::common::{ensure_codec_registered, ok_response};
use crate::transport::http::types::{AppState, CodecSchemaResponse, FieldSchema};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// Field list of a codec: logical name, wire key, kind, default and accepted literals.
///
/// Front-ends use this to build links without hard-coding the short keys.
#[utoipa::path(
    get,
    path = "/api/codecs/{codec}/schema",
    params(
        ("codec" = String, Path, description = "Codec name (e.g. animals)")
    ),
    responses(
        (status = 200, description = "Codec fields", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "Unknown codec", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn codec_schema_handler(
    State(state): State<AppState>,
    Path(codec): Path<String>,
) -> impl IntoResponse {
    let codec_name = codec.trim().to_lowercase();
    let codec = match ensure_codec_registered(&state, &codec_name) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let fields: Vec<FieldSchema> = codec.describe().into_iter().map(FieldSchema::from).collect();
    ok_response(&CodecSchemaResponse {
        codec: codec_name,
        fields,
    })
}
