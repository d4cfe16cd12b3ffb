use crate::domain::codec::FieldDescription;
use crate::domain::{CodecRegistry, SearchParams};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared handler state. The registry is immutable after startup, so no lock.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CodecRegistry>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct FormatRequest {
    /// Typed filter value. Missing fields take their defaults.
    #[schema(value_type = Object)]
    pub value: JsonValue,
    /// Query string currently in the URL (with or without the leading `?`).
    ///
    /// Keys owned by the codec are replaced or cleared; any other key is kept.
    #[serde(default)]
    pub current: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ParseResponse {
    pub codec: String,
    /// Typed filter, every field populated (decoded value or default).
    #[schema(value_type = Object)]
    pub value: JsonValue,
    /// Canonical query string for `value` (no leading `?`, empty when all defaults).
    pub query: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct FormatResponse {
    pub codec: String,
    pub query: String,
    /// Same content as `query`, as `key -> [values]`.
    #[schema(value_type = Object)]
    pub params: SearchParams,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CodecListResponse {
    pub codecs: Vec<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct FieldSchema {
    /// Logical field name in the typed value.
    pub name: String,
    /// Query-string key.
    pub key: String,
    /// `string`, `enum`, `date`, `number` or `boolean`.
    pub kind: String,
    /// True for set fields (repeated key).
    pub multi: bool,
    /// Wire form of the default; omitted from URLs.
    pub default: Vec<String>,
    /// Accepted literals for enum and boolean fields.
    pub literals: Vec<String>,
}

impl From<FieldDescription> for FieldSchema {
    fn from(d: FieldDescription) -> Self {
        Self {
            name: d.name.to_string(),
            key: d.key,
            kind: d.shape.kind.as_str().to_string(),
            multi: d.shape.multi,
            default: d.shape.default,
            literals: d.shape.literals.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CodecSchemaResponse {
    pub codec: String,
    pub fields: Vec<FieldSchema>,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(format!("Invalid JSON body: {} (expected: {})", err, expected)),
        }),
    )
}
