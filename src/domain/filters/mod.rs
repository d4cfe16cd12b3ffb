//! Search-params definitions of the shelter suite's list pages.
//!
//! Each module declares the typed filter of one list page together with the
//! codec mapping it onto short wire keys.

use crate::domain::codec::{Defaulted, NumberCodec};
use crate::wire_enum;

pub mod animal;
pub mod exhibitor;
pub mod foster_family;
pub mod index_filter;
pub mod user;

pub use animal::{AnimalSearch, AnimalSort, AnimalStatus, Gender};
pub use exhibitor::{ActivityField, ExhibitorSearch, ExhibitorSort, StandSize};
pub use foster_family::{FosterFamilySearch, FosterFamilySort};
pub use index_filter::{animal_index_filter, AnimalIndexQuery};
pub use user::{UserGroup, UserSearch, UserSort};

/// Wire key shared by every paginated list.
pub const PAGE_KEY: &str = "page";

/// Zero-based page index; page 0 never appears in the URL.
pub fn page_codec() -> Defaulted<NumberCodec<u32>> {
    Defaulted::new(NumberCodec::new(), 0)
}

wire_enum! {
    /// Species handled by the association (animals and foster families).
    pub enum Species {
        Bird => "bird",
        Cat => "cat",
        Dog => "dog",
        Reptile => "reptile",
        Rodent => "rodent",
    }
}
