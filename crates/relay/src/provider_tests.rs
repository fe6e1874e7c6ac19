// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

use super::*;

fn config(host: Option<String>) -> PusherConfig {
    PusherConfig {
        app_id: "3".into(),
        key: "278d425bdf160c739803".into(),
        secret: "7ad3773142a6692b25b8".into(),
        cluster: "ap1".into(),
        use_tls: host.is_none(),
        host,
    }
}

#[test]
fn signature_matches_published_example() {
    let query = "auth_key=278d425bdf160c739803&auth_timestamp=1353088179\
                 &auth_version=1.0&body_md5=ec365a775a4cd0599faeb73354201b6f";

    let signature = sign("7ad3773142a6692b25b8", "POST", "/apps/3/events", query).unwrap();

    assert_eq!(
        signature,
        "da454824c97ba181a32ccc17a72625ba02771f50b50e1e7430e47a1f3f457e6c"
    );
}

#[test]
fn body_md5_is_hex_digest() {
    assert_eq!(body_md5(""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(body_md5("abc"), "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn signed_query_is_sorted_and_signed() {
    let trigger = PusherTrigger::new(&config(None));
    let body = r#"{"channels":["c"],"data":"d","name":"e"}"#;

    let query = trigger
        .signed_query("/apps/3/events", body, 1353088179)
        .unwrap();

    let (unsigned, signature) = query.split_once("&auth_signature=").unwrap();
    assert_eq!(
        unsigned,
        format!(
            "auth_key=278d425bdf160c739803&auth_timestamp=1353088179&auth_version=1.0&body_md5={}",
            body_md5(body)
        )
    );
    assert_eq!(
        signature,
        sign("7ad3773142a6692b25b8", "POST", "/apps/3/events", unsigned).unwrap()
    );
}

#[test]
fn event_body_encodes_non_string_data() {
    let object = PusherTrigger::event_body("presence-cache-sync", "sync", &json!({"v": 1})).unwrap();
    let string = PusherTrigger::event_body("c", "e", &json!("plain")).unwrap();

    let object: Value = serde_json::from_str(&object).unwrap();
    let string: Value = serde_json::from_str(&string).unwrap();
    assert_eq!(
        object,
        json!({"name": "sync", "channels": ["presence-cache-sync"], "data": "{\"v\":1}"})
    );
    assert_eq!(string["data"], "plain");
}

#[test]
fn events_path_uses_app_id() {
    assert_eq!(PusherTrigger::new(&config(None)).events_path(), "/apps/3/events");
}

#[derive(Debug, Clone)]
struct Captured {
    app_id: String,
    query: String,
    body: String,
}

#[derive(Clone)]
struct FakePusher {
    captured: Arc<Mutex<Vec<Captured>>>,
    status: StatusCode,
}

async fn fake_events(
    State(fake): State<FakePusher>,
    Path(app_id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> (StatusCode, &'static str) {
    fake.captured.lock().unwrap().push(Captured {
        app_id,
        query: query.unwrap_or_default(),
        body: String::from_utf8(body.to_vec()).unwrap(),
    });
    (fake.status, "{}")
}

async fn start_fake(status: StatusCode) -> (SocketAddr, Arc<Mutex<Vec<Captured>>>) {
    let fake = FakePusher {
        captured: Arc::default(),
        status,
    };
    let captured = fake.captured.clone();
    let app = Router::new()
        .route("/apps/:app_id/events", post(fake_events))
        .with_state(fake);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, captured)
}

#[tokio::test]
async fn trigger_posts_signed_event() {
    let (addr, captured) = start_fake(StatusCode::OK).await;
    let trigger = PusherTrigger::new(&config(Some(addr.to_string())));

    trigger
        .trigger("presence-cache-sync", "sync", &json!({"v": 1}))
        .await
        .unwrap();

    let captured = captured.lock().unwrap().clone();
    assert_eq!(captured.len(), 1);
    let request = &captured[0];
    assert_eq!(request.app_id, "3");

    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["name"], "sync");
    assert_eq!(body["channels"], json!(["presence-cache-sync"]));

    let params: HashMap<&str, &str> = request
        .query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect();
    assert_eq!(params["auth_key"], "278d425bdf160c739803");
    assert_eq!(params["auth_version"], "1.0");
    assert_eq!(params["body_md5"], body_md5(&request.body));

    let (unsigned, signature) = request.query.split_once("&auth_signature=").unwrap();
    assert_eq!(
        signature,
        sign("7ad3773142a6692b25b8", "POST", "/apps/3/events", unsigned).unwrap()
    );
}

#[tokio::test]
async fn trigger_reports_rejection() {
    let (addr, _) = start_fake(StatusCode::FORBIDDEN).await;
    let trigger = PusherTrigger::new(&config(Some(addr.to_string())));

    let err = trigger.trigger("c", "e", &json!(1)).await.unwrap_err();

    assert!(matches!(err, ProviderError::Status { status: 403, .. }));
}

#[tokio::test]
async fn trigger_reports_unreachable_host() {
    let trigger = PusherTrigger::new(&config(Some("127.0.0.1:9".into())));

    let err = trigger.trigger("c", "e", &json!(1)).await.unwrap_err();

    assert!(matches!(err, ProviderError::Request(_)));
}
