//! Codec definitions: field bindings assembled into a `SearchParamsCodec<T>`.

use crate::domain::codec::field::{FieldCodec, FieldShape};
use crate::domain::params::SearchParams;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("wire key '{key}' is declared by both '{first}' and '{second}'")]
    DuplicateKey {
        key: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("field '{0}' is declared twice")]
    DuplicateField(&'static str),
    #[error("field '{field}' has invalid wire key '{key}'")]
    InvalidKey { field: &'static str, key: String },
}

/// Description of one declared field, as reported by [`SearchParamsCodec::describe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescription {
    pub name: &'static str,
    pub key: String,
    #[serde(flatten)]
    pub shape: FieldShape,
}

/// Type-erased binding of one field codec to one field of `T`.
trait FieldBinding<T>: Send + Sync {
    fn name(&self) -> &'static str;

    fn key(&self) -> &str;

    fn read(&self, source: &SearchParams, target: &mut T);

    fn write(&self, value: &T, target: &mut SearchParams);

    fn describe(&self) -> FieldDescription;
}

struct Binding<T, C: FieldCodec> {
    name: &'static str,
    key: String,
    codec: C,
    get: fn(&T) -> &C::Value,
    set: fn(&mut T, C::Value),
}

impl<T, C: FieldCodec> FieldBinding<T> for Binding<T, C> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self, source: &SearchParams, target: &mut T) {
        let value = self.codec.decode(source.get_all(&self.key));
        (self.set)(target, value);
    }

    fn write(&self, value: &T, target: &mut SearchParams) {
        let encoded = self.codec.encode((self.get)(value));
        // An empty encoding removes the key, which clears stale values.
        target.set_all(self.key.clone(), encoded);
    }

    fn describe(&self) -> FieldDescription {
        FieldDescription {
            name: self.name,
            key: self.key.clone(),
            shape: self.codec.shape(),
        }
    }
}

/// Characters allowed in a wire key: unreserved URL characters only, so keys
/// survive query-string encoding verbatim.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

/// Collects field bindings for a typed value `T`.
///
/// ```
/// use search_params::domain::codec::{Defaulted, NumberCodec, Optional, SearchParamsCodec, StringCodec};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Filter {
///     search: Option<String>,
///     page: u32,
/// }
///
/// let codec = SearchParamsCodec::<Filter>::builder()
///     .field("search", "q", Optional::new(StringCodec), |f| &f.search, |f, v| f.search = v)
///     .field_named("page", Defaulted::new(NumberCodec::<u32>::new(), 0), |f| &f.page, |f, v| f.page = v)
///     .build()
///     .unwrap();
///
/// let filter = codec.parse_query("q=rex&page=2");
/// assert_eq!(filter, Filter { search: Some("rex".into()), page: 2 });
/// assert_eq!(codec.format(&Filter::default()).to_query(), "");
/// ```
pub struct SearchParamsCodecBuilder<T> {
    fields: Vec<Box<dyn FieldBinding<T>>>,
}

impl<T: Default + 'static> SearchParamsCodecBuilder<T> {
    fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declares field `name` stored under wire key `key`.
    pub fn field<C: FieldCodec>(
        mut self,
        name: &'static str,
        key: &'static str,
        codec: C,
        get: fn(&T) -> &C::Value,
        set: fn(&mut T, C::Value),
    ) -> Self {
        self.fields.push(Box::new(Binding {
            name,
            key: key.to_string(),
            codec,
            get,
            set,
        }));
        self
    }

    /// Shorthand for fields whose wire key is the field name (`page`, `sort`).
    pub fn field_named<C: FieldCodec>(
        self,
        name: &'static str,
        codec: C,
        get: fn(&T) -> &C::Value,
        set: fn(&mut T, C::Value),
    ) -> Self {
        self.field(name, name, codec, get, set)
    }

    /// Checks the definition and freezes it.
    ///
    /// Wire keys and field names must be unique and keys must be URL-safe.
    pub fn build(self) -> Result<SearchParamsCodec<T>, DefinitionError> {
        let mut names: HashSet<&'static str> = HashSet::new();
        let mut keys: HashMap<&str, &'static str> = HashMap::new();

        for field in &self.fields {
            if !names.insert(field.name()) {
                return Err(DefinitionError::DuplicateField(field.name()));
            }
            if !is_valid_key(field.key()) {
                return Err(DefinitionError::InvalidKey {
                    field: field.name(),
                    key: field.key().to_string(),
                });
            }
            if let Some(first) = keys.insert(field.key(), field.name()) {
                return Err(DefinitionError::DuplicateKey {
                    key: field.key().to_string(),
                    first,
                    second: field.name(),
                });
            }
        }

        tracing::debug!(fields = self.fields.len(), "search params codec built");
        Ok(SearchParamsCodec {
            fields: self.fields,
        })
    }
}

/// Immutable, bidirectional mapping between [`SearchParams`] and `T`.
///
/// `parse(format(v)) == v` for every `v` that `parse` can produce.
pub struct SearchParamsCodec<T> {
    fields: Vec<Box<dyn FieldBinding<T>>>,
}

impl<T: Default + 'static> SearchParamsCodec<T> {
    pub fn builder() -> SearchParamsCodecBuilder<T> {
        SearchParamsCodecBuilder::new()
    }

    /// Builds a fresh `T` from `source`. Unknown keys are ignored; invalid or
    /// missing values leave the field at its default.
    pub fn parse(&self, source: &SearchParams) -> T {
        let mut value = T::default();
        for field in &self.fields {
            field.read(source, &mut value);
        }
        value
    }

    pub fn parse_query(&self, query: &str) -> T {
        self.parse(&SearchParams::from_query(query))
    }

    /// Fresh map holding only the non-default fields of `value`.
    pub fn format(&self, value: &T) -> SearchParams {
        let mut params = SearchParams::new();
        self.write_into(value, &mut params);
        params
    }

    /// Updates `target` in place: every declared key is replaced by the encoding
    /// of `value`, or removed when the field is at its default. Keys this codec
    /// does not declare are left as they are.
    pub fn write_into(&self, value: &T, target: &mut SearchParams) {
        for field in &self.fields {
            field.write(value, target);
        }
    }

    /// `format(parse(source))`: drops unknown keys, defaults and invalid values.
    pub fn normalize(&self, source: &SearchParams) -> SearchParams {
        self.format(&self.parse(source))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key())
    }

    pub fn owns_key(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key() == key)
    }

    pub fn describe(&self) -> Vec<FieldDescription> {
        self.fields.iter().map(|f| f.describe()).collect()
    }
}

impl<T> fmt::Debug for SearchParamsCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.fields.iter().map(|b| (b.name(), b.key())))
            .finish()
    }
}
