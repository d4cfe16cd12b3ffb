//! Field codecs: the raw value list under one key <-> one typed field.
//!
//! Every field codec carries an explicit default. Decoding falls back to it and
//! encoding it produces no wire values, which is what keeps formatted query
//! strings minimal.

use crate::domain::codec::scalar::{ScalarCodec, ScalarKind};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Static description of a field codec (used by `describe()` and the schema endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldShape {
    pub kind: ScalarKind,
    pub multi: bool,
    /// Wire form of the default; empty when the default is "absent"/empty set.
    pub default: Vec<String>,
    pub literals: Vec<&'static str>,
}

pub trait FieldCodec: Send + Sync + 'static {
    type Value: Clone + PartialEq + fmt::Debug + Send + Sync + 'static;

    fn default_value(&self) -> Self::Value;

    /// Never fails: invalid input resolves to the default.
    fn decode(&self, raw: &[String]) -> Self::Value;

    /// An empty result means "omit the key".
    fn encode(&self, value: &Self::Value) -> Vec<String>;

    fn shape(&self) -> FieldShape;
}

/// Encodes `value` only if the result decodes again, so formatting never writes
/// a wire value that parsing would throw away (e.g. an empty search string).
fn encode_canonical<C: ScalarCodec>(codec: &C, value: &C::Value) -> Option<String> {
    let raw = codec.encode(value);
    codec.decode(&raw).map(|_| raw)
}

fn decode_first<C: ScalarCodec>(codec: &C, raw: &[String]) -> Option<C::Value> {
    raw.first().and_then(|first| codec.decode(first))
}

// --- Optional ---

/// Scalar with no default: absent or invalid input decodes to `None`.
#[derive(Debug, Clone, Default)]
pub struct Optional<C>(C);

impl<C: ScalarCodec> Optional<C> {
    pub fn new(codec: C) -> Self {
        Self(codec)
    }
}

impl<C: ScalarCodec> FieldCodec for Optional<C> {
    type Value = Option<C::Value>;

    fn default_value(&self) -> Self::Value {
        None
    }

    fn decode(&self, raw: &[String]) -> Self::Value {
        decode_first(&self.0, raw)
    }

    fn encode(&self, value: &Self::Value) -> Vec<String> {
        value
            .as_ref()
            .and_then(|v| encode_canonical(&self.0, v))
            .into_iter()
            .collect()
    }

    fn shape(&self) -> FieldShape {
        FieldShape {
            kind: self.0.kind(),
            multi: false,
            default: Vec::new(),
            literals: self.0.literals(),
        }
    }
}

// --- Defaulted ---

/// Scalar with a declared default (sort order, page index, flags).
#[derive(Debug, Clone)]
pub struct Defaulted<C: ScalarCodec> {
    codec: C,
    default: C::Value,
}

impl<C: ScalarCodec> Defaulted<C> {
    pub fn new(codec: C, default: C::Value) -> Self {
        Self { codec, default }
    }
}

impl<C: ScalarCodec> FieldCodec for Defaulted<C> {
    type Value = C::Value;

    fn default_value(&self) -> Self::Value {
        self.default.clone()
    }

    fn decode(&self, raw: &[String]) -> Self::Value {
        decode_first(&self.codec, raw).unwrap_or_else(|| self.default.clone())
    }

    fn encode(&self, value: &Self::Value) -> Vec<String> {
        if *value == self.default {
            return Vec::new();
        }
        encode_canonical(&self.codec, value).into_iter().collect()
    }

    fn shape(&self) -> FieldShape {
        FieldShape {
            kind: self.codec.kind(),
            multi: false,
            default: vec![self.codec.encode(&self.default)],
            literals: self.codec.literals(),
        }
    }
}

// --- Set ---

/// Deduplicated collection wired as a repeated key.
///
/// Elements are decoded one by one and the ones that fail are dropped; the
/// rest of the set is kept. Iteration order is the value order of `C::Value`,
/// so encoding is deterministic. Float sets use `FiniteF64`/`FiniteF32`.
#[derive(Debug, Clone, Default)]
pub struct SetOf<C>(C);

impl<C> SetOf<C>
where
    C: ScalarCodec,
    C::Value: Ord,
{
    pub fn new(codec: C) -> Self {
        Self(codec)
    }
}

impl<C> FieldCodec for SetOf<C>
where
    C: ScalarCodec,
    C::Value: Ord,
{
    type Value = BTreeSet<C::Value>;

    fn default_value(&self) -> Self::Value {
        BTreeSet::new()
    }

    fn decode(&self, raw: &[String]) -> Self::Value {
        raw.iter().filter_map(|r| self.0.decode(r)).collect()
    }

    fn encode(&self, value: &Self::Value) -> Vec<String> {
        value
            .iter()
            .filter_map(|v| encode_canonical(&self.0, v))
            .collect()
    }

    fn shape(&self) -> FieldShape {
        FieldShape {
            kind: self.0.kind(),
            multi: true,
            default: Vec::new(),
            literals: self.0.literals(),
        }
    }
}
