// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use super::*;
use svc_orders_domain::{Employee, PrimaryOrder, create_new_order};

fn test_order() -> Order {
    create_new_order(&PrimaryOrder {
        client_name: String::from("Client"),
        client_phone: String::from("2223344"),
        address: String::from("1 Main Street"),
        client_description: String::new(),
    })
    .unwrap()
}

fn test_event(before: Option<OrderSnapshot>, after: OrderSnapshot) -> AuditEvent {
    AuditEvent::new(
        Some(3),
        Actor::new(String::from("dispatcher-1"), String::from("operator")),
        Cause::new(String::from("req-1"), String::from("PATCH /orders/3/cancel")),
        Action::new(String::from("Cancel"), Some(String::from("duplicate"))),
        before,
        after,
    )
}

#[test]
fn test_snapshot_captures_lifecycle_fields() {
    let mut order = test_order();
    order.status = OrderStatus::Assigned;
    order.employee = Some(Employee::new(9, String::from("Employee")));

    let snapshot = OrderSnapshot::of(&order);
    assert_eq!(snapshot.status, OrderStatus::Assigned);
    assert_eq!(snapshot.employee_id, Some(9));
    assert_eq!(snapshot.scheduled_for, None);
    assert_eq!(snapshot.cancel_reason, None);
}

#[test]
fn test_creation_event_has_no_before() {
    let order = test_order();
    let event = test_event(None, OrderSnapshot::of(&order));
    assert!(event.is_creation());
    assert_eq!(event.event_id, None);
}

#[test]
fn test_transition_event_keeps_both_snapshots() {
    let mut order = test_order();
    let before = OrderSnapshot::of(&order);
    order.cancel(String::from("duplicate")).unwrap();
    let after = OrderSnapshot::of(&order);

    let event = test_event(Some(before.clone()), after.clone());
    assert!(!event.is_creation());
    assert_eq!(event.before, Some(before));
    assert_eq!(event.after.status, OrderStatus::Canceled);
    assert_eq!(event.after.cancel_reason.as_deref(), Some("duplicate"));
}

#[test]
fn test_for_order_binds_id() {
    let order = test_order();
    let event = AuditEvent::new(
        None,
        Actor::anonymous(),
        Cause::new(String::from("req-2"), String::from("POST /orders")),
        Action::new(String::from("Create"), None),
        None,
        OrderSnapshot::of(&order),
    )
    .for_order(42);
    assert_eq!(event.order_id, Some(42));
    assert_eq!(event.actor.id, "anonymous");
}

#[test]
fn test_snapshot_json_uses_rfc3339_dates() {
    let mut order = test_order();
    order.scheduled_for = Some(time::macros::datetime!(2030-05-01 10:00 UTC));
    let json = serde_json::to_string(&OrderSnapshot::of(&order)).unwrap();
    assert!(json.contains("\"2030-05-01T10:00:00Z\""));
    assert!(json.contains("\"status\":\"New\""));

    let parsed: OrderSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.scheduled_for, order.scheduled_for);
}
