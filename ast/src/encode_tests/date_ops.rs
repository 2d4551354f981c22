use crate::{
    codec::EncodeContext,
    definitions::{DayOfWeek, Expression, TimeUnit},
    encoder::Encoder,
    expressions::*,
};
use bson::Bson;

test_encode_expr!(
    date_trunc_with_bin_size,
    expected = r#"{"$dateTrunc":{"date":"$date","unit":"day","binSize":2}}"#,
    input = date_trunc(field("date"), TimeUnit::Day).bin_size(2)
);

test_encode_expr!(
    date_trunc_all_options,
    expected = r#"{"$dateTrunc":{"date":"$date","unit":"week","binSize":1,"timezone":"Europe/Paris","startOfWeek":"monday"}}"#,
    input = date_trunc(field("date"), TimeUnit::Week)
        .start_of_week(DayOfWeek::Monday)
        .timezone("Europe/Paris")
        .bin_size(1)
);

test_encode_expr!(
    date_diff_required_only,
    expected = r#"{"$dateDiff":{"startDate":"$start","endDate":"$end","unit":"day"}}"#,
    input = date_diff(field("start"), field("end"), TimeUnit::Day)
);

test_encode_expr!(
    date_diff_all_options,
    expected = r#"{"$dateDiff":{"startDate":"$start","endDate":"$end","unit":"week","timezone":"$tz","startOfWeek":"friday"}}"#,
    input = date_diff(field("start"), field("end"), TimeUnit::Week)
        .timezone(field("tz"))
        .start_of_week(DayOfWeek::Friday)
);

#[test]
fn date_diff_omits_unset_keys() {
    let expr: Expression = date_diff(field("start"), field("end"), TimeUnit::Quarter).into();
    let context = EncodeContext::default();
    let encoded = Encoder::new(&context).encode_expression(&expr).unwrap();
    let inner = encoded
        .as_document()
        .and_then(|d| d.get_document("$dateDiff").ok())
        .unwrap();
    assert_eq!(
        vec!["startDate", "endDate", "unit"],
        inner.keys().map(String::as_str).collect::<Vec<_>>()
    );
    assert_eq!(Some("quarter"), inner.get_str("unit").ok());
}

test_encode_expr!(
    date_add_amount,
    expected = r#"{"$dateAdd":{"startDate":"$d","unit":"hour","amount":3}}"#,
    input = date_add(field("d"), TimeUnit::Hour, 3)
);

test_encode_expr!(
    date_subtract_with_timezone,
    expected = r#"{"$dateSubtract":{"startDate":"$$NOW","unit":"month","amount":1,"timezone":"UTC"}}"#,
    input = date_subtract(variables::now(), TimeUnit::Month, 1).timezone("UTC")
);

#[test]
fn date_delta_amount_is_int64() {
    let expr: Expression = date_add(field("d"), TimeUnit::Millisecond, 250).into();
    let context = EncodeContext::default();
    let encoded = Encoder::new(&context).encode_expression(&expr).unwrap();
    let amount = encoded
        .as_document()
        .and_then(|d| d.get_document("$dateAdd").ok())
        .and_then(|d| d.get("amount"))
        .cloned();
    assert_eq!(Some(Bson::Int64(250)), amount);
}

test_encode_expr!(year_without_timezone, expected = r#"{"$year":"$d"}"#, input = year(field("d")));

test_encode_expr!(
    year_with_timezone,
    expected = r#"{"$year":{"date":"$d","timezone":"UTC"}}"#,
    input = year(field("d")).timezone("UTC")
);

test_encode_expr!(
    iso_day_of_week_is_bare,
    expected = r#"{"$isoDayOfWeek":"$d"}"#,
    input = iso_day_of_week(field("d"))
);

test_encode_expr!(
    millisecond_with_offset,
    expected = r#"{"$millisecond":{"date":"$d","timezone":"+04:30"}}"#,
    input = millisecond(field("d")).timezone("+04:30")
);

test_encode_expr!(
    date_from_parts_calendar_order,
    expected = r#"{"$dateFromParts":{"year":2024,"month":2,"day":29,"hour":12}}"#,
    input = date_from_parts().hour(12).day(29).month(2).year(2024)
);

test_encode_expr!(
    date_from_parts_iso_week,
    expected = r#"{"$dateFromParts":{"isoWeekYear":2017,"isoWeek":1,"isoDayOfWeek":7,"timezone":"UTC"}}"#,
    input = date_from_parts()
        .timezone("UTC")
        .iso_day_of_week(7)
        .iso_week(1)
        .iso_week_year(2017)
);

test_encode_expr!(
    date_from_string_with_fallback,
    expected = r#"{"$dateFromString":{"dateString":"$s","format":"%Y-%m-%d","onError":null}}"#,
    input = date_from_string(field("s"))
        .on_error(None::<i32>)
        .format("%Y-%m-%d")
);

test_encode_expr!(
    date_to_parts_iso,
    expected = r#"{"$dateToParts":{"date":"$d","iso8601":true}}"#,
    input = date_to_parts(field("d")).iso8601(true)
);

test_encode_expr!(
    date_to_string_order,
    expected = r#"{"$dateToString":{"date":"$d","format":"%H:%M","timezone":"+02:00","onNull":"n/a"}}"#,
    input = date_to_string(field("d"))
        .on_null("n/a")
        .timezone("+02:00")
        .format("%H:%M")
);

test_encode_expr!(
    to_date_is_bare,
    expected = r#"{"$toDate":"$ts"}"#,
    input = to_date(field("ts"))
);

test_encode_expr!(
    ts_second_is_bare,
    expected = r#"{"$tsSecond":"$ts"}"#,
    input = ts_second(field("ts"))
);
