//! Search-params codec framework.
//!
//! A call site declares, per field of its typed filter, a wire key and a field
//! codec; the resulting [`SearchParamsCodec`] parses a query string into the
//! filter and formats the filter back into the shortest equivalent query string.
//!
//! Parsing never fails. Malformed or stale values (e.g. a bookmarked link with an
//! enum literal that no longer exists) resolve to the field's default so the page
//! still renders.

pub mod definition;
pub mod field;
pub mod scalar;

pub use definition::{DefinitionError, FieldDescription, SearchParamsCodec, SearchParamsCodecBuilder};
pub use field::{Defaulted, FieldCodec, FieldShape, Optional, SetOf};
pub use scalar::{
    end_of_day, parse_calendar_day, start_of_day, BoolCodec, DateCodec, DateTransform, EnumCodec,
    FiniteF32, FiniteF64, FiniteFloatError, NumberCodec, ScalarCodec, ScalarKind, StringCodec,
    WireEnum, WireNumber,
};
