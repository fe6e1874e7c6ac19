// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

#[parameterized(
    null = { json!(null), false },
    false_ = { json!(false), false },
    true_ = { json!(true), true },
    zero = { json!(0), false },
    zero_float = { json!(0.0), false },
    negative = { json!(-1), true },
    empty_string = { json!(""), false },
    string = { json!("x"), true },
    empty_array = { json!([]), true },
    empty_object = { json!({}), true },
    object = { json!({"v": 1}), true },
)]
fn truthiness(value: Value, expected: bool) {
    assert_eq!(is_truthy(&value), expected);
}

#[parameterized(
    get_upper = { "GET", HttpMethod::Get },
    get_lower = { "get", HttpMethod::Get },
    post_upper = { "POST", HttpMethod::Post },
    post_mixed = { "Post", HttpMethod::Post },
)]
fn method_from_str(input: &str, expected: HttpMethod) {
    assert_eq!(input.parse::<HttpMethod>().unwrap(), expected);
}

#[test]
fn method_rejects_unknown() {
    let err = "DELETE".parse::<HttpMethod>().unwrap_err();
    assert!(matches!(err, Error::InvalidMethod(ref m) if m == "DELETE"));
}

#[test]
fn method_defaults_to_post() {
    assert_eq!(HttpMethod::default(), HttpMethod::Post);
    assert_eq!(HttpMethod::Post.to_string(), "POST");
}

#[test]
fn body_with_all_fields_parses() {
    let body = br#"{"channel":"presence-cache-sync","event":"sync","data":{"v":1}}"#;
    let request = RelayRequest::from_json_body(body).unwrap();
    assert_eq!(request.channel, "presence-cache-sync");
    assert_eq!(request.event, "sync");
    assert_eq!(request.data, json!({"v": 1}));
}

#[test]
fn body_accepts_empty_array_payload() {
    let body = br#"{"channel":"c","event":"sync","data":[]}"#;
    let request = RelayRequest::from_json_body(body).unwrap();
    assert_eq!(request.data, json!([]));
}

#[parameterized(
    no_channel = { json!({"event": "e", "data": 1}), Field::Channel },
    empty_channel = { json!({"channel": "", "event": "e", "data": 1}), Field::Channel },
    numeric_channel = { json!({"channel": 7, "event": "e", "data": 1}), Field::Channel },
    no_event = { json!({"channel": "c", "data": 1}), Field::Event },
    empty_event = { json!({"channel": "c", "event": "", "data": 1}), Field::Event },
    no_data = { json!({"channel": "c", "event": "e"}), Field::Data },
    null_data = { json!({"channel": "c", "event": "e", "data": null}), Field::Data },
    zero_data = { json!({"channel": "c", "event": "e", "data": 0}), Field::Data },
    empty_string_data = { json!({"channel": "c", "event": "e", "data": ""}), Field::Data },
)]
fn body_missing_field(body: Value, field: Field) {
    let bytes = serde_json::to_vec(&body).unwrap();
    let err = RelayRequest::from_json_body(&bytes).unwrap_err();
    assert!(matches!(err, Error::MissingField(f) if f == field));
}

#[parameterized(
    empty = { b"" as &[u8] },
    garbage = { b"not json" as &[u8] },
    array = { b"[1, 2]" as &[u8] },
)]
fn body_malformed(body: &[u8]) {
    let err = RelayRequest::from_json_body(body).unwrap_err();
    assert!(matches!(err, Error::MalformedBody(_)));
}

#[test]
fn query_keeps_data_as_string() {
    let request = RelayRequest::from_query(
        Some("c".into()),
        Some("sync".into()),
        Some(r#"{"a":1}"#.into()),
    )
    .unwrap();
    assert_eq!(request.data, json!(r#"{"a":1}"#));
}

#[parameterized(
    channel = { None, Some("e"), Some("d"), Field::Channel },
    event = { Some("c"), None, Some("d"), Field::Event },
    data = { Some("c"), Some("e"), None, Field::Data },
    empty_data = { Some("c"), Some("e"), Some(""), Field::Data },
)]
fn query_missing_field(
    channel: Option<&str>,
    event: Option<&str>,
    data: Option<&str>,
    field: Field,
) {
    let err = RelayRequest::from_query(
        channel.map(String::from),
        event.map(String::from),
        data.map(String::from),
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingField(f) if f == field));
}

#[test]
fn to_json_has_three_fields() {
    let request = RelayRequest::new("c", "sync", json!({"v": 1}));
    let parsed: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
    assert_eq!(parsed, json!({"channel": "c", "event": "sync", "data": {"v": 1}}));
}

#[parameterized(
    string = { json!("hello"), "hello" },
    object = { json!({"a": 1}), r#"{"a":1}"# },
    array = { json!([]), "[]" },
    number = { json!(42), "42" },
)]
fn payload_text_encoding(data: Value, expected: &str) {
    assert_eq!(payload_text(&data).unwrap(), expected);
}
