// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, CreateOrderRequest, PatchOrderRequest, create_order, get_order, get_order_history,
    list_orders, patch_order, track_order,
};

use super::helpers::{
    create_stored_order, create_test_actor, create_test_cause, create_test_persistence,
    create_valid_request,
};

#[test]
fn test_create_order_returns_id_and_link() {
    let mut persistence = create_test_persistence();

    let response = create_stored_order(&mut persistence);

    assert!(response.id > 0);
    assert_eq!(response.public_link.len(), 12);
}

#[test]
fn test_created_order_is_new_with_normalized_phone() {
    let mut persistence = create_test_persistence();
    let created = create_stored_order(&mut persistence);

    let order = get_order(&mut persistence, created.id).unwrap();

    assert_eq!(order.id, created.id);
    assert_eq!(order.status, "New");
    assert_eq!(order.client_phone, "+71112223344");
    assert_eq!(order.employee, None);
    assert_eq!(order.scheduled_for, None);
}

#[test]
fn test_create_order_with_empty_name_names_client_name() {
    let mut persistence = create_test_persistence();
    let request = CreateOrderRequest {
        client_name: String::new(),
        client_phone: String::new(),
        ..create_valid_request()
    };

    let result = create_order(
        &mut persistence,
        request,
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "client_name"
    ));
    assert!(list_orders(&mut persistence).unwrap().orders.is_empty());
}

#[test]
fn test_create_order_with_bad_phone() {
    let mut persistence = create_test_persistence();
    let request = CreateOrderRequest {
        client_phone: String::from("+7111222334"),
        ..create_valid_request()
    };

    let result = create_order(
        &mut persistence,
        request,
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "client_phone"
    ));
}

#[test]
fn test_get_missing_order() {
    let mut persistence = create_test_persistence();

    let result = get_order(&mut persistence, 404);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Order"
    ));
}

#[test]
fn test_list_orders_returns_all() {
    let mut persistence = create_test_persistence();
    let first = create_stored_order(&mut persistence);
    let second = create_stored_order(&mut persistence);

    let response = list_orders(&mut persistence).unwrap();

    let ids: Vec<i64> = response.orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn test_patch_changes_only_present_fields() {
    let mut persistence = create_test_persistence();
    let created = create_stored_order(&mut persistence);
    let request = PatchOrderRequest {
        address: Some(String::from("2 Side Street")),
        ..PatchOrderRequest::default()
    };

    let patched = patch_order(
        &mut persistence,
        created.id,
        request,
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(patched.address, "2 Side Street");
    assert_eq!(patched.client_name, "Client");
    assert_eq!(patched.status, "New");
    assert_eq!(get_order(&mut persistence, created.id).unwrap(), patched);
}

#[test]
fn test_track_order_exposes_status_only() {
    let mut persistence = create_test_persistence();
    let created = create_stored_order(&mut persistence);

    let view = track_order(&mut persistence, &created.public_link).unwrap();

    assert_eq!(view.status, "New");
    assert_eq!(view.scheduled_for, None);
}

#[test]
fn test_track_unknown_link() {
    let mut persistence = create_test_persistence();

    let result = track_order(&mut persistence, "missing-link");

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_history_starts_with_creation() {
    let mut persistence = create_test_persistence();
    let created = create_stored_order(&mut persistence);

    let history = get_order_history(&mut persistence, created.id).unwrap();

    assert_eq!(history.order_id, created.id);
    assert_eq!(history.entries.len(), 1);
    let entry = &history.entries[0];
    assert_eq!(entry.action, "Create");
    assert_eq!(entry.actor_id, "dispatcher-7");
    assert_eq!(entry.status_before, None);
    assert_eq!(entry.status_after, "New");
}

#[test]
fn test_history_of_missing_order() {
    let mut persistence = create_test_persistence();

    let result = get_order_history(&mut persistence, 9);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
