use crate::transport::http::handlers::{codecs, health, schema};
use crate::transport::http::types::{
    ApiResponse, CodecListResponse, CodecSchemaResponse, FieldSchema, FormatRequest,
    FormatResponse, ParseResponse,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        codecs::list_codecs_handler,
        codecs::parse_handler,
        codecs::format_handler,
        schema::codec_schema_handler
    ),
    components(schemas(
        ApiResponse,
        CodecListResponse,
        CodecSchemaResponse,
        FieldSchema,
        FormatRequest,
        FormatResponse,
        ParseResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/codecs", get(codecs::list_codecs_handler))
        .route("/api/codecs/:codec/parse", get(codecs::parse_handler))
        .route("/api/codecs/:codec/format", post(codecs::format_handler))
        .route("/api/codecs/:codec/schema", get(schema::codec_schema_handler))
        .with_state(app_state)
}
