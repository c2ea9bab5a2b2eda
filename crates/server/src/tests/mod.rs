// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use svc_orders_persistence::Persistence;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::context::ACTOR_HEADER;
use crate::{AppState, build_router};

/// Helper to create test app state with in-memory persistence.
pub fn create_test_app() -> Router {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    build_router(AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    })
}

/// Sends one request and returns the status with the decoded JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    actor: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor_id) = actor {
        builder = builder.header(ACTOR_HEADER, actor_id);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, json)
}

pub fn valid_order_body() -> Value {
    serde_json::json!({
        "client_name": "Client",
        "client_phone": "8(111)222-33-44",
        "address": "1 Main Street",
        "client_description": "Oven does not heat"
    })
}

/// Creates an order and returns its id and public link.
pub async fn create_order(app: &Router) -> (i64, String) {
    let (status, body) = send(app, "POST", "/api/v1/orders", Some(valid_order_body()), None).await;
    assert_eq!(status, StatusCode::CREATED);
    (
        body["id"].as_i64().unwrap(),
        body["public_link"].as_str().unwrap().to_string(),
    )
}

/// Creates an employee and returns their id.
pub async fn create_employee(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/employees",
        Some(serde_json::json!({ "name": name })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

pub fn future_date_string() -> String {
    let date = time::OffsetDateTime::now_utc() + time::Duration::days(5);
    date.format(&time::format_description::well_known::Rfc3339)
        .unwrap()
}
