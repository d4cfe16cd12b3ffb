//! CodecRegistry for mapping list names to their search-params codecs.

use crate::domain::codec::{DefinitionError, FieldDescription, SearchParamsCodec};
use crate::domain::filters::{animal, exhibitor, foster_family, user};
use crate::domain::params::SearchParams;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Object-safe view of a `SearchParamsCodec<T>` with its typed value carried as JSON.
///
/// This lets the HTTP surface serve any registered codec without knowing `T`.
pub trait DynSearchCodec: Send + Sync {
    fn name(&self) -> &str;

    fn describe(&self) -> Vec<FieldDescription>;

    /// Canonical form of `params`: `format(parse(params))`.
    fn normalize(&self, params: &SearchParams) -> SearchParams;

    fn parse_json(&self, params: &SearchParams) -> Result<JsonValue, serde_json::Error>;

    /// Fields missing from `value` take the typed value's defaults.
    fn format_json(&self, value: JsonValue) -> Result<SearchParams, serde_json::Error>;

    /// Like `format_json`, but updates `target` in place: keys this codec owns are
    /// replaced or cleared, other keys are kept.
    fn write_json(&self, value: JsonValue, target: &mut SearchParams) -> Result<(), serde_json::Error>;
}

pub struct NamedCodec<T> {
    name: String,
    codec: SearchParamsCodec<T>,
}

impl<T> NamedCodec<T> {
    pub fn new(name: impl Into<String>, codec: SearchParamsCodec<T>) -> Self {
        Self {
            name: name.into(),
            codec,
        }
    }
}

impl<T> DynSearchCodec for NamedCodec<T>
where
    T: Default + Serialize + DeserializeOwned + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> Vec<FieldDescription> {
        self.codec.describe()
    }

    fn normalize(&self, params: &SearchParams) -> SearchParams {
        self.codec.normalize(params)
    }

    fn parse_json(&self, params: &SearchParams) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self.codec.parse(params))
    }

    fn format_json(&self, value: JsonValue) -> Result<SearchParams, serde_json::Error> {
        let typed: T = serde_json::from_value(value)?;
        Ok(self.codec.format(&typed))
    }

    fn write_json(&self, value: JsonValue, target: &mut SearchParams) -> Result<(), serde_json::Error> {
        let typed: T = serde_json::from_value(value)?;
        self.codec.write_into(&typed, target);
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("codec '{name}' has an invalid definition: {source}")]
    Definition {
        name: &'static str,
        #[source]
        source: DefinitionError,
    },
    #[error("codec '{0}' is registered twice")]
    DuplicateName(String),
}

/// A registry that maps list names to their codecs.
///
/// Built once at startup and shared read-only; codecs are immutable.
pub struct CodecRegistry {
    codecs: HashMap<String, Arc<dyn DynSearchCodec>>,
}

impl CodecRegistry {
    /// Creates a new empty CodecRegistry.
    pub fn new() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    /// Registry holding every list page of the suite.
    ///
    /// Fails on the first invalid definition, so a bad call site stops the
    /// process at startup instead of surfacing per request.
    pub fn with_builtin() -> Result<Self, RegistryError> {
        let mut reg = Self::new();
        reg.register_built(animal::CODEC_NAME, animal::codec())?;
        reg.register_built(foster_family::CODEC_NAME, foster_family::codec())?;
        reg.register_built(user::CODEC_NAME, user::codec())?;
        reg.register_built(exhibitor::CODEC_NAME, exhibitor::codec())?;
        tracing::info!(codecs = reg.codecs.len(), "builtin search params codecs registered");
        Ok(reg)
    }

    fn register_built<T>(
        &mut self,
        name: &'static str,
        built: Result<SearchParamsCodec<T>, DefinitionError>,
    ) -> Result<(), RegistryError>
    where
        T: Default + Serialize + DeserializeOwned + 'static,
    {
        let codec = built.map_err(|source| RegistryError::Definition { name, source })?;
        self.register(name, codec)
    }

    /// Registers a codec under `name`. Names are unique.
    pub fn register<T>(&mut self, name: &str, codec: SearchParamsCodec<T>) -> Result<(), RegistryError>
    where
        T: Default + Serialize + DeserializeOwned + 'static,
    {
        if self.codecs.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        self.codecs
            .insert(name.to_string(), Arc::new(NamedCodec::new(name, codec)));
        Ok(())
    }

    /// Retrieves a codec by name.
    /// Returns None if the codec is not registered.
    pub fn get(&self, name: &str) -> Option<Arc<dyn DynSearchCodec>> {
        self.codecs.get(name).cloned()
    }

    /// Returns all registered codec names, sorted.
    pub fn list_codecs(&self) -> Vec<String> {
        let mut names: Vec<String> = self.codecs.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
