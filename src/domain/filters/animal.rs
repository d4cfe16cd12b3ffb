//! Animal list filter (admin dashboard).

use crate::domain::codec::{
    BoolCodec, DateCodec, Defaulted, DefinitionError, EnumCodec, Optional, SearchParamsCodec,
    SetOf, StringCodec,
};
use crate::domain::filters::{page_codec, Species, PAGE_KEY};
use crate::wire_enum;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const CODEC_NAME: &str = "animals";

wire_enum! {
    pub enum AnimalStatus {
        Adopted => "adopted",
        Deceased => "deceased",
        Fostered => "fostered",
        Open => "open",
        Returned => "returned",
        Unavailable => "unavailable",
    }
}

wire_enum! {
    pub enum Gender {
        Female => "f",
        Male => "m",
    }
}

wire_enum! {
    #[derive(Default)]
    pub enum AnimalSort {
        Name => "name",
        #[default]
        PickUp => "pick-up",
        Relevance => "relevance",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimalSearch {
    pub name_or_alias: Option<String>,
    pub species: BTreeSet<Species>,
    pub statuses: BTreeSet<AnimalStatus>,
    pub gender: Option<Gender>,
    /// `None` means "either".
    pub is_sterilized: Option<bool>,
    pub pick_up_date_start: Option<NaiveDateTime>,
    /// Inclusive: decoded to the last millisecond of the day.
    pub pick_up_date_end: Option<NaiveDateTime>,
    pub sort: AnimalSort,
    pub page: u32,
}

pub fn codec() -> Result<SearchParamsCodec<AnimalSearch>, DefinitionError> {
    SearchParamsCodec::<AnimalSearch>::builder()
        .field(
            "name_or_alias",
            "q",
            Optional::new(StringCodec),
            |f| &f.name_or_alias,
            |f, v| f.name_or_alias = v,
        )
        .field(
            "species",
            "sp",
            SetOf::new(EnumCodec::<Species>::new()),
            |f| &f.species,
            |f, v| f.species = v,
        )
        .field(
            "statuses",
            "st",
            SetOf::new(EnumCodec::<AnimalStatus>::new()),
            |f| &f.statuses,
            |f, v| f.statuses = v,
        )
        .field(
            "gender",
            "g",
            Optional::new(EnumCodec::<Gender>::new()),
            |f| &f.gender,
            |f, v| f.gender = v,
        )
        .field(
            "is_sterilized",
            "sterilized",
            Optional::new(BoolCodec),
            |f| &f.is_sterilized,
            |f, v| f.is_sterilized = v,
        )
        .field(
            "pick_up_date_start",
            "pds",
            Optional::new(DateCodec::new()),
            |f| &f.pick_up_date_start,
            |f, v| f.pick_up_date_start = v,
        )
        .field(
            "pick_up_date_end",
            "pde",
            Optional::new(DateCodec::end_of_day()),
            |f| &f.pick_up_date_end,
            |f, v| f.pick_up_date_end = v,
        )
        .field_named(
            "sort",
            Defaulted::new(EnumCodec::<AnimalSort>::new(), AnimalSort::default()),
            |f| &f.sort,
            |f, v| f.sort = v,
        )
        .field(
            "page",
            PAGE_KEY,
            page_codec(),
            |f| &f.page,
            |f, v| f.page = v,
        )
        .build()
}
