//! Search-params codecs and the list filters built on them.

pub mod codec;
pub mod filters;
pub mod params;
pub mod registry;

pub use codec::{SearchParamsCodec, SearchParamsCodecBuilder};
pub use params::SearchParams;
pub use registry::{CodecRegistry, DynSearchCodec, RegistryError};
