//! Foster family list filter (admin dashboard).

use crate::domain::codec::{
    BoolCodec, Defaulted, DefinitionError, EnumCodec, Optional, SearchParamsCodec, SetOf,
    StringCodec,
};
use crate::domain::filters::{page_codec, Species, PAGE_KEY};
use crate::wire_enum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const CODEC_NAME: &str = "foster-families";

wire_enum! {
    #[derive(Default)]
    pub enum FosterFamilySort {
        Created => "created",
        #[default]
        Name => "name",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FosterFamilySearch {
    pub display_name: Option<String>,
    pub species_to_host: BTreeSet<Species>,
    pub city: Option<String>,
    pub is_available: Option<bool>,
    pub sort: FosterFamilySort,
    pub page: u32,
}

pub fn codec() -> Result<SearchParamsCodec<FosterFamilySearch>, DefinitionError> {
    SearchParamsCodec::<FosterFamilySearch>::builder()
        .field(
            "display_name",
            "q",
            Optional::new(StringCodec),
            |f| &f.display_name,
            |f, v| f.display_name = v,
        )
        .field(
            "species_to_host",
            "sp",
            SetOf::new(EnumCodec::<Species>::new()),
            |f| &f.species_to_host,
            |f, v| f.species_to_host = v,
        )
        .field_named(
            "city",
            Optional::new(StringCodec),
            |f| &f.city,
            |f, v| f.city = v,
        )
        .field(
            "is_available",
            "avail",
            Optional::new(BoolCodec),
            |f| &f.is_available,
            |f, v| f.is_available = v,
        )
        .field_named(
            "sort",
            Defaulted::new(EnumCodec::<FosterFamilySort>::new(), FosterFamilySort::default()),
            |f| &f.sort,
            |f, v| f.sort = v,
        )
        .field("page", PAGE_KEY, page_codec(), |f| &f.page, |f, v| f.page = v)
        .build()
}
