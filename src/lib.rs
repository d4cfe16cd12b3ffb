// Lets `wire_enum!` name this crate the same way inside and outside of it.
extern crate self as search_params;

pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::codec::{
    BoolCodec, DateCodec, Defaulted, DefinitionError, EnumCodec, FieldCodec, NumberCodec, Optional,
    ScalarCodec, SetOf, StringCodec, WireEnum,
};
pub use domain::filters::{AnimalSearch, ExhibitorSearch, FosterFamilySearch, UserSearch};
pub use domain::{CodecRegistry, DynSearchCodec, SearchParams, SearchParamsCodec};

// Used by `wire_enum!` so callers do not need their own serde dependency.
#[doc(hidden)]
pub use serde as __serde;
