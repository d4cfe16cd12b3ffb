//! Scalar codecs: one raw string <-> one typed value.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::num::ParseFloatError;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of scalar kinds, reported by `describe()` on a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    String,
    Enum,
    Date,
    Number,
    Boolean,
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Enum => "enum",
            Self::Date => "date",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// Decodes/encodes a single wire value.
///
/// `decode` returns `None` for anything it does not accept; it never panics and
/// never reports an error. `encode` must produce a string that `decode` maps back
/// to an equal value for every value `decode` can produce.
pub trait ScalarCodec: Send + Sync + 'static {
    type Value: Clone + PartialEq + fmt::Debug + Send + Sync + 'static;

    fn kind(&self) -> ScalarKind;

    fn decode(&self, raw: &str) -> Option<Self::Value>;

    fn encode(&self, value: &Self::Value) -> String;

    /// Accepted wire literals, for closed kinds (enums, booleans).
    fn literals(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

// --- String ---

#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl StringCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ScalarCodec for StringCodec {
    type Value = String;

    fn kind(&self) -> ScalarKind {
        ScalarKind::String
    }

    fn decode(&self, raw: &str) -> Option<String> {
        if raw.is_empty() {
            return None;
        }
        Some(raw.to_string())
    }

    fn encode(&self, value: &String) -> String {
        value.clone()
    }
}

// --- Enum ---

/// An enum with stable wire literals, independent of its display label.
///
/// Usually implemented through [`wire_enum!`](crate::wire_enum).
pub trait WireEnum: Copy + Eq + Ord + fmt::Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    fn wire(self) -> &'static str;

    /// Exact, case-sensitive lookup.
    fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.wire() == raw)
    }
}

pub struct EnumCodec<E>(PhantomData<fn() -> E>);

impl<E: WireEnum> EnumCodec<E> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E: WireEnum> Default for EnumCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: WireEnum> ScalarCodec for EnumCodec<E> {
    type Value = E;

    fn kind(&self) -> ScalarKind {
        ScalarKind::Enum
    }

    fn decode(&self, raw: &str) -> Option<E> {
        E::from_wire(raw)
    }

    fn encode(&self, value: &E) -> String {
        value.wire().to_string()
    }

    fn literals(&self) -> Vec<&'static str> {
        E::ALL.iter().map(|v| v.wire()).collect()
    }
}

/// Declares an enum together with its wire literals and implements
/// [`WireEnum`](crate::domain::codec::WireEnum) for it.
///
/// ```
/// search_params::wire_enum! {
///     pub enum Size {
///         Small => "s",
///         Large => "l",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            $crate::__serde::Serialize, $crate::__serde::Deserialize,
        )]
        #[serde(crate = "search_params::__serde")]
        $vis enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $crate::domain::codec::WireEnum for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }
    };
}

// --- Date ---

/// Fixes the time of day of a decoded calendar day.
pub type DateTransform = fn(NaiveDate) -> NaiveDateTime;

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

/// Calendar-day codec. Wire form is always `YYYY-MM-DD`; the time of day is
/// dropped on encode and rebuilt by the transform on decode.
#[derive(Clone, Copy)]
pub struct DateCodec {
    transform: DateTransform,
}

impl DateCodec {
    /// Days decode to midnight.
    pub fn new() -> Self {
        Self::with_transform(start_of_day)
    }

    /// Days decode to `23:59:59.999`, for inclusive upper bounds.
    pub fn end_of_day() -> Self {
        Self::with_transform(end_of_day)
    }

    pub fn with_transform(transform: DateTransform) -> Self {
        Self { transform }
    }
}

impl Default for DateCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DateCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateCodec").finish_non_exhaustive()
    }
}

/// Strict `YYYY-MM-DD`: four-digit year, two-digit month and day, real calendar day.
pub fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let all_digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    if !(all_digits(0..4) && all_digits(5..7) && all_digits(8..10)) {
        return None;
    }
    let year = raw[0..4].parse::<i32>().ok()?;
    let month = raw[5..7].parse::<u32>().ok()?;
    let day = raw[8..10].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

impl ScalarCodec for DateCodec {
    type Value = NaiveDateTime;

    fn kind(&self) -> ScalarKind {
        ScalarKind::Date
    }

    fn decode(&self, raw: &str) -> Option<NaiveDateTime> {
        parse_calendar_day(raw).map(self.transform)
    }

    fn encode(&self, value: &NaiveDateTime) -> String {
        value.date().format("%Y-%m-%d").to_string()
    }
}

// --- Number ---

/// Numeric types accepted by [`NumberCodec`].
pub trait WireNumber:
    FromStr + fmt::Display + Copy + PartialEq + fmt::Debug + Send + Sync + 'static
{
    fn is_finite(self) -> bool {
        true
    }
}

macro_rules! impl_wire_number_int {
    ($($t:ty),*) => {
        $(impl WireNumber for $t {})*
    };
}

impl_wire_number_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl WireNumber for f32 {
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl WireNumber for f64 {
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FiniteFloatError {
    #[error(transparent)]
    Parse(#[from] ParseFloatError),
    #[error("number is not finite")]
    NonFinite,
}

macro_rules! finite_float {
    ($name:ident, $float:ty, $float_name:literal) => {
        /// Finite float with a total order, usable as a set element.
        ///
        /// `-0` is stored as `0`, so both spellings land on the same set entry.
        #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
        #[serde(try_from = $float_name, into = $float_name)]
        pub struct $name($float);

        impl $name {
            pub fn new(value: $float) -> Option<Self> {
                if !value.is_finite() {
                    return None;
                }
                Some(Self(if value == 0.0 { 0.0 } else { value }))
            }

            pub fn get(self) -> $float {
                self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl TryFrom<$float> for $name {
            type Error = FiniteFloatError;

            fn try_from(value: $float) -> Result<Self, Self::Error> {
                Self::new(value).ok_or(FiniteFloatError::NonFinite)
            }
        }

        impl From<$name> for $float {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = FiniteFloatError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::try_from(raw.parse::<$float>()?)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl WireNumber for $name {}
    };
}

finite_float!(FiniteF32, f32, "f32");
finite_float!(FiniteF64, f64, "f64");

pub struct NumberCodec<N>(PhantomData<fn() -> N>);

impl<N: WireNumber> NumberCodec<N> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<N: WireNumber> Default for NumberCodec<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: WireNumber> ScalarCodec for NumberCodec<N> {
    type Value = N;

    fn kind(&self) -> ScalarKind {
        ScalarKind::Number
    }

    fn decode(&self, raw: &str) -> Option<N> {
        raw.parse::<N>().ok().filter(|n| n.is_finite())
    }

    fn encode(&self, value: &N) -> String {
        value.to_string()
    }
}

// --- Boolean ---

pub const TRUE_TOKEN: &str = "true";
pub const FALSE_TOKEN: &str = "false";

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolCodec;

impl BoolCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ScalarCodec for BoolCodec {
    type Value = bool;

    fn kind(&self) -> ScalarKind {
        ScalarKind::Boolean
    }

    fn decode(&self, raw: &str) -> Option<bool> {
        match raw {
            TRUE_TOKEN => Some(true),
            FALSE_TOKEN => Some(false),
            _ => None,
        }
    }

    fn encode(&self, value: &bool) -> String {
        let token = if *value { TRUE_TOKEN } else { FALSE_TOKEN };
        token.to_string()
    }

    fn literals(&self) -> Vec<&'static str> {
        vec![TRUE_TOKEN, FALSE_TOKEN]
    }
}
