//! Per-field decode/encode behavior: permissive decoding, default omission, sets.

use chrono::{NaiveDate, NaiveDateTime};
use search_params::domain::codec::{
    parse_calendar_day, BoolCodec, DateCodec, Defaulted, EnumCodec, FieldCodec, FiniteF64,
    NumberCodec, Optional, ScalarCodec, ScalarKind, SetOf, StringCodec,
};
use search_params::wire_enum;
use std::collections::BTreeSet;

wire_enum! {
    pub enum Status {
        Open => "OPEN",
        Closed => "CLOSED",
    }
}

fn raw(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_milli_opt(h, min, s, ms))
        .expect("valid datetime")
}

#[test]
fn string_codec_rejects_empty_and_keeps_everything_else() {
    let field = Optional::new(StringCodec);
    assert_eq!(field.decode(&raw(&[])), None);
    assert_eq!(field.decode(&raw(&[""])), None);
    assert_eq!(field.decode(&raw(&["rex"])), Some("rex".to_string()));
    assert_eq!(field.decode(&raw(&["  spaced  "])), Some("  spaced  ".to_string()));

    assert_eq!(field.encode(&Some("rex".to_string())), raw(&["rex"]));
    assert!(field.encode(&None).is_empty());
    // An empty string would not survive a parse, so it is not written.
    assert!(field.encode(&Some(String::new())).is_empty());
}

#[test]
fn scalar_fields_only_read_the_first_value() {
    let field = Optional::new(StringCodec);
    assert_eq!(field.decode(&raw(&["first", "second"])), Some("first".to_string()));

    // An invalid first value is not rescued by a valid second one.
    let status = Optional::new(EnumCodec::<Status>::new());
    assert_eq!(status.decode(&raw(&["nope", "OPEN"])), None);
}

#[test]
fn enum_codec_is_exact_and_case_sensitive() {
    let codec = EnumCodec::<Status>::new();
    assert_eq!(codec.decode("OPEN"), Some(Status::Open));
    assert_eq!(codec.decode("open"), None);
    assert_eq!(codec.decode(" OPEN"), None);
    assert_eq!(codec.decode("not-a-valid-enum-token"), None);
    assert_eq!(codec.encode(&Status::Closed), "CLOSED");
    assert_eq!(codec.kind(), ScalarKind::Enum);
    assert_eq!(codec.literals(), vec!["OPEN", "CLOSED"]);
}

#[test]
fn unknown_enum_falls_back_to_declared_default() {
    let field = Defaulted::new(EnumCodec::<Status>::new(), Status::Open);
    assert_eq!(field.decode(&raw(&["ARCHIVED"])), Status::Open);
    assert_eq!(field.decode(&raw(&[])), Status::Open);
    assert_eq!(field.decode(&raw(&["CLOSED"])), Status::Closed);

    assert!(field.encode(&Status::Open).is_empty());
    assert_eq!(field.encode(&Status::Closed), raw(&["CLOSED"]));
}

#[test]
fn calendar_day_pattern_is_strict() {
    assert_eq!(parse_calendar_day("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(parse_calendar_day("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));

    for bad in [
        "2024-13-50",
        "2024-02-30",
        "2023-02-29",
        "2024-3-01",
        "2024-03-1",
        "24-03-01",
        "2024/03/01",
        "2024-03-01T10:00:00",
        "+202-03-01",
        "",
    ] {
        assert_eq!(parse_calendar_day(bad), None, "{} should be rejected", bad);
    }
}

#[test]
fn date_codec_start_and_end_of_day() {
    let start = Optional::new(DateCodec::new());
    assert_eq!(
        start.decode(&raw(&["2024-03-01"])),
        Some(datetime(2024, 3, 1, 0, 0, 0, 0))
    );

    let end = Optional::new(DateCodec::end_of_day());
    let decoded = end.decode(&raw(&["2024-03-01"]));
    assert_eq!(decoded, Some(datetime(2024, 3, 1, 23, 59, 59, 999)));

    // Time of day is discarded on the way back out.
    assert_eq!(end.encode(&decoded), raw(&["2024-03-01"]));
    assert_eq!(
        start.encode(&Some(datetime(2024, 3, 1, 15, 30, 0, 0))),
        raw(&["2024-03-01"])
    );
}

#[test]
fn invalid_dates_resolve_to_absent() {
    let field = Optional::new(DateCodec::new());
    assert_eq!(field.decode(&raw(&["2024-13-50"])), None);
    assert_eq!(field.decode(&raw(&["2024-02-30"])), None);
    assert_eq!(field.decode(&raw(&["yesterday"])), None);
}

#[test]
fn date_codec_accepts_custom_transform() {
    fn noon(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(12, 0, 0).expect("valid time")
    }
    let codec = DateCodec::with_transform(noon);
    assert_eq!(codec.decode("2024-06-15"), Some(datetime(2024, 6, 15, 12, 0, 0, 0)));
}

#[test]
fn number_codec_requires_finite_decimal() {
    let page = Defaulted::new(NumberCodec::<u32>::new(), 0);
    assert_eq!(page.decode(&raw(&["3"])), 3);
    assert_eq!(page.decode(&raw(&["-1"])), 0);
    assert_eq!(page.decode(&raw(&["3.5"])), 0);
    assert_eq!(page.decode(&raw(&["three"])), 0);
    assert_eq!(page.decode(&raw(&[" 3"])), 0);
    assert!(page.encode(&0).is_empty());
    assert_eq!(page.encode(&3), raw(&["3"]));

    let ratio = Optional::new(NumberCodec::<f64>::new());
    assert_eq!(ratio.decode(&raw(&["0.25"])), Some(0.25));
    assert_eq!(ratio.decode(&raw(&["inf"])), None);
    assert_eq!(ratio.decode(&raw(&["NaN"])), None);
    assert_eq!(ratio.encode(&Some(0.25)), raw(&["0.25"]));
}

#[test]
fn bool_codec_only_accepts_literal_tokens() {
    let field = Optional::new(BoolCodec);
    assert_eq!(field.decode(&raw(&["true"])), Some(true));
    assert_eq!(field.decode(&raw(&["false"])), Some(false));
    for bad in ["1", "0", "yes", "TRUE", "on", ""] {
        assert_eq!(field.decode(&raw(&[bad])), None, "{} should be rejected", bad);
    }
    assert_eq!(field.encode(&Some(false)), raw(&["false"]));

    let flag = Defaulted::new(BoolCodec, false);
    assert!(flag.encode(&false).is_empty());
    assert_eq!(flag.encode(&true), raw(&["true"]));
}

#[test]
fn set_decode_drops_invalid_entries_and_dedups() {
    let field = SetOf::new(EnumCodec::<Status>::new());

    let decoded = field.decode(&raw(&["OPEN", "OPEN", "CLOSED"]));
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded, BTreeSet::from([Status::Open, Status::Closed]));

    let with_garbage = field.decode(&raw(&["OPEN", "garbage", "", "OPEN"]));
    assert_eq!(with_garbage, BTreeSet::from([Status::Open]));

    assert!(field.decode(&raw(&[])).is_empty());
}

#[test]
fn set_encode_writes_one_value_per_element() {
    let field = SetOf::new(EnumCodec::<Status>::new());
    assert!(field.encode(&BTreeSet::new()).is_empty());

    let encoded = field.encode(&BTreeSet::from([Status::Open, Status::Closed]));
    let as_set: BTreeSet<String> = encoded.iter().cloned().collect();
    assert_eq!(encoded.len(), 2);
    assert_eq!(as_set, BTreeSet::from(["OPEN".to_string(), "CLOSED".to_string()]));

    // Same input, same output.
    assert_eq!(
        encoded,
        field.encode(&BTreeSet::from([Status::Closed, Status::Open]))
    );
}

#[test]
fn every_field_decodes_its_own_encoding() {
    let sizes = SetOf::new(NumberCodec::<u16>::new());
    let value = sizes.decode(&raw(&["4", "2", "4", "x"]));
    assert_eq!(sizes.decode(&sizes.encode(&value)), value);

    let date = Optional::new(DateCodec::end_of_day());
    let value = date.decode(&raw(&["2020-02-29"]));
    assert_eq!(date.decode(&date.encode(&value)), value);

    let status = Defaulted::new(EnumCodec::<Status>::new(), Status::Closed);
    for v in [Status::Open, Status::Closed] {
        assert_eq!(status.decode(&status.encode(&v)), v);
    }
}

#[test]
fn shape_reports_kind_default_and_multiplicity() {
    let page = Defaulted::new(NumberCodec::<u32>::new(), 0).shape();
    assert_eq!(page.kind, ScalarKind::Number);
    assert!(!page.multi);
    assert_eq!(page.default, raw(&["0"]));

    let statuses = SetOf::new(EnumCodec::<Status>::new()).shape();
    assert!(statuses.multi);
    assert!(statuses.default.is_empty());
    assert_eq!(statuses.literals, vec!["OPEN", "CLOSED"]);
}

#[test]
fn float_sets_use_finite_floats() {
    let field = SetOf::new(NumberCodec::<FiniteF64>::new());
    let decoded = field.decode(&raw(&["0.5", "0.50", "-0", "0", "NaN", "inf", "1e400", "x"]));

    let values: Vec<f64> = decoded.iter().map(|v| v.get()).collect();
    assert_eq!(values, vec![0.0, 0.5]);
    assert_eq!(field.encode(&decoded), raw(&["0", "0.5"]));
    assert_eq!(field.decode(&field.encode(&decoded)), decoded);
    assert_eq!(field.shape().kind, ScalarKind::Number);

    assert_eq!(FiniteF64::new(-0.0), FiniteF64::new(0.0));
    assert!(FiniteF64::new(f64::NAN).is_none());
    assert!(FiniteF64::new(f64::INFINITY).is_none());
}

#[test]
fn finite_floats_reject_non_finite_json() {
    let value: FiniteF64 = serde_json::from_value(serde_json::json!(2.5)).expect("finite");
    assert_eq!(value.get(), 2.5);
    assert_eq!(serde_json::to_value(value).expect("serialize"), serde_json::json!(2.5));
    assert!(serde_json::from_value::<FiniteF64>(serde_json::json!("2.5")).is_err());
}

fn assert_serde_through_crate<T>()
where
    T: search_params::__serde::Serialize + for<'de> search_params::__serde::Deserialize<'de>,
{
}

#[test]
fn wire_enum_serializes_with_its_wire_literals() {
    assert_serde_through_crate::<Status>();
    assert_eq!(
        serde_json::to_value(Status::Closed).expect("serialize"),
        serde_json::json!("CLOSED")
    );
    let parsed: Status = serde_json::from_value(serde_json::json!("OPEN")).expect("known literal");
    assert_eq!(parsed, Status::Open);
    assert!(serde_json::from_value::<Status>(serde_json::json!("Open")).is_err());
}
