// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    create_creation_result, create_test_actor, create_test_cause, create_test_persistence,
    future_date, store_test_order,
};
use crate::PersistenceError;
use svc_orders::{Command, OrderRepository, RepositoryError, apply};
use svc_orders_domain::{Employee, OrderStatus};

#[test]
fn test_created_order_round_trips() {
    let mut persistence = create_test_persistence();
    let creation = create_creation_result();

    let order_id = persistence.persist_creation(&creation).unwrap();
    let stored = persistence.get_order(order_id).unwrap();

    let mut expected = creation.order;
    expected.order_id = Some(order_id);
    assert_eq!(stored, expected);
    assert_eq!(stored.client_phone, "+71112223344");
    assert_eq!(stored.status, OrderStatus::New);
}

#[test]
fn test_get_missing_order_returns_not_found() {
    let mut persistence = create_test_persistence();

    let result = persistence.get_order(42);

    assert_eq!(result, Err(PersistenceError::OrderNotFound(42)));
}

#[test]
fn test_missing_order_maps_to_repository_not_found() {
    let mut persistence = create_test_persistence();

    let result = OrderRepository::get_order(&mut persistence, 7);

    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn test_find_by_public_link() {
    let mut persistence = create_test_persistence();
    let order_id = store_test_order(&mut persistence);
    let link = persistence.get_order(order_id).unwrap().public_link;

    let found = persistence.find_order_by_public_link(&link).unwrap();

    assert_eq!(found.order_id, Some(order_id));
}

#[test]
fn test_find_by_unknown_public_link() {
    let mut persistence = create_test_persistence();
    store_test_order(&mut persistence);

    let result = persistence.find_order_by_public_link("nope");

    assert_eq!(
        result,
        Err(PersistenceError::PublicLinkNotFound(String::from("nope")))
    );
}

#[test]
fn test_list_orders_in_id_order() {
    let mut persistence = create_test_persistence();
    let first = store_test_order(&mut persistence);
    let second = store_test_order(&mut persistence);
    let third = store_test_order(&mut persistence);

    let ids: Vec<Option<i64>> = persistence
        .list_orders()
        .unwrap()
        .into_iter()
        .map(|order| order.order_id)
        .collect();

    assert_eq!(ids, vec![Some(first), Some(second), Some(third)]);
}

#[test]
fn test_list_orders_empty() {
    let mut persistence = create_test_persistence();

    assert!(persistence.list_orders().unwrap().is_empty());
}

#[test]
fn test_transition_stores_employee_and_schedule() {
    let mut persistence = create_test_persistence();
    let order_id = store_test_order(&mut persistence);
    let employee = persistence.create_employee("Ivan").unwrap();

    let order = persistence.get_order(order_id).unwrap();
    let assigned = apply(
        &order,
        Command::Assign {
            employee: employee.clone(),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    persistence.persist_transition(&assigned).unwrap();

    let scheduled = apply(
        &assigned.new_order,
        Command::Schedule {
            scheduled_for: Some(future_date()),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    persistence.persist_transition(&scheduled).unwrap();

    let stored = persistence.get_order(order_id).unwrap();
    assert_eq!(stored.status, OrderStatus::Scheduled);
    assert_eq!(stored.employee, Some(employee));
    assert_eq!(stored.scheduled_for, Some(future_date()));
}

#[test]
fn test_cancel_clears_schedule_and_keeps_reason() {
    let mut persistence = create_test_persistence();
    let order_id = store_test_order(&mut persistence);
    let order = persistence.get_order(order_id).unwrap();

    let prescheduled = apply(
        &order,
        Command::Preschedule {
            scheduled_for: Some(future_date()),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    persistence.persist_transition(&prescheduled).unwrap();

    let canceled = apply(
        &prescheduled.new_order,
        Command::Cancel {
            reason: String::from("client changed their mind"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    persistence.persist_transition(&canceled).unwrap();

    let stored = persistence.get_order(order_id).unwrap();
    assert_eq!(stored.status, OrderStatus::Canceled);
    assert_eq!(stored.scheduled_for, None);
    assert_eq!(
        stored.cancel_reason.as_deref(),
        Some("client changed their mind")
    );
}

#[test]
fn test_update_unsaved_order_is_rejected() {
    let mut persistence = create_test_persistence();
    let order = create_creation_result().order;

    let result = persistence.update_order(&order);

    assert_eq!(result, Err(PersistenceError::MissingOrderId));
}

#[test]
fn test_update_missing_order_returns_not_found() {
    let mut persistence = create_test_persistence();
    let mut order = create_creation_result().order;
    order.order_id = Some(99);

    let result = OrderRepository::update_order(&mut persistence, &order);

    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
}

#[test]
fn test_unknown_employee_is_rejected_by_foreign_key() {
    let mut persistence = create_test_persistence();
    let order_id = store_test_order(&mut persistence);
    let mut order = persistence.get_order(order_id).unwrap();
    order.employee = Some(Employee::new(404, String::from("Ghost")));
    order.status = OrderStatus::Assigned;

    let result = persistence.update_order(&order);

    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
    assert_eq!(
        persistence.get_order(order_id).unwrap().status,
        OrderStatus::New
    );
}

#[test]
fn test_duplicate_public_link_is_rejected() {
    let mut persistence = create_test_persistence();
    let creation = create_creation_result();
    persistence.create_order(&creation.order).unwrap();

    let result = persistence.create_order(&creation.order);

    assert!(result.is_err());
    assert_eq!(persistence.list_orders().unwrap().len(), 1);
}
