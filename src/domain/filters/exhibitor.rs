//! Show exhibitor list filter (trade-show portal).

use crate::domain::codec::{
    BoolCodec, Defaulted, DefinitionError, EnumCodec, Optional, SearchParamsCodec, SetOf,
    StringCodec,
};
use crate::domain::filters::{page_codec, PAGE_KEY};
use crate::wire_enum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const CODEC_NAME: &str = "show-exhibitors";

wire_enum! {
    pub enum StandSize {
        Small => "s",
        Medium => "m",
        Large => "l",
    }
}

wire_enum! {
    pub enum ActivityField {
        Accessories => "accessories",
        Alimentation => "alimentation",
        Association => "association",
        Behavior => "behavior",
        Care => "care",
        Photography => "photography",
        Services => "services",
        Training => "training",
        Other => "other",
    }
}

wire_enum! {
    #[derive(Default)]
    pub enum ExhibitorSort {
        #[default]
        Name => "name",
        UpdatedAt => "updated",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhibitorSearch {
    pub name: Option<String>,
    pub stand_sizes: BTreeSet<StandSize>,
    pub activity_fields: BTreeSet<ActivityField>,
    pub has_paid: Option<bool>,
    pub sort: ExhibitorSort,
    pub page: u32,
}

pub fn codec() -> Result<SearchParamsCodec<ExhibitorSearch>, DefinitionError> {
    SearchParamsCodec::<ExhibitorSearch>::builder()
        .field("name", "q", Optional::new(StringCodec), |f| &f.name, |f, v| f.name = v)
        .field(
            "stand_sizes",
            "size",
            SetOf::new(EnumCodec::<StandSize>::new()),
            |f| &f.stand_sizes,
            |f, v| f.stand_sizes = v,
        )
        .field(
            "activity_fields",
            "act",
            SetOf::new(EnumCodec::<ActivityField>::new()),
            |f| &f.activity_fields,
            |f, v| f.activity_fields = v,
        )
        .field(
            "has_paid",
            "paid",
            Optional::new(BoolCodec),
            |f| &f.has_paid,
            |f, v| f.has_paid = v,
        )
        .field_named(
            "sort",
            Defaulted::new(EnumCodec::<ExhibitorSort>::new(), ExhibitorSort::default()),
            |f| &f.sort,
            |f, v| f.sort = v,
        )
        .field("page", PAGE_KEY, page_codec(), |f| &f.page, |f, v| f.page = v)
        .build()
}
