//! User list filter (admin dashboard).

use crate::domain::codec::{
    BoolCodec, Defaulted, DefinitionError, EnumCodec, Optional, SearchParamsCodec, SetOf,
    StringCodec,
};
use crate::domain::filters::{page_codec, PAGE_KEY};
use crate::wire_enum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const CODEC_NAME: &str = "users";

wire_enum! {
    pub enum UserGroup {
        Admin => "admin",
        AnimalEditor => "animal-editor",
        Blogger => "blogger",
        ShowOrganizer => "show-organizer",
        Veterinarian => "veterinarian",
        Volunteer => "volunteer",
    }
}

wire_enum! {
    #[derive(Default)]
    pub enum UserSort {
        LastActivity => "last-activity",
        #[default]
        Name => "name",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSearch {
    pub display_name: Option<String>,
    pub groups: BTreeSet<UserGroup>,
    pub is_disabled: Option<bool>,
    pub sort: UserSort,
    pub page: u32,
}

pub fn codec() -> Result<SearchParamsCodec<UserSearch>, DefinitionError> {
    SearchParamsCodec::<UserSearch>::builder()
        .field(
            "display_name",
            "q",
            Optional::new(StringCodec),
            |f| &f.display_name,
            |f, v| f.display_name = v,
        )
        .field(
            "groups",
            "gr",
            SetOf::new(EnumCodec::<UserGroup>::new()),
            |f| &f.groups,
            |f, v| f.groups = v,
        )
        .field(
            "is_disabled",
            "disabled",
            Optional::new(BoolCodec),
            |f| &f.is_disabled,
            |f, v| f.is_disabled = v,
        )
        .field_named(
            "sort",
            Defaulted::new(EnumCodec::<UserSort>::new(), UserSort::default()),
            |f| &f.sort,
            |f, v| f.sort = v,
        )
        .field("page", PAGE_KEY, page_codec(), |f| &f.page, |f, v| f.page = v)
        .build()
}
