// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    InMemoryStore, create_test_actor, create_test_cause, create_test_primary_order, future_date,
};
use crate::{Command, CoreError, OrderService, RepositoryError};
use svc_orders_domain::{ErrorKind, OrderStatus};

fn create_order(store: &mut InMemoryStore) -> i64 {
    OrderService::new(store)
        .create(
            &create_test_primary_order(),
            create_test_actor(),
            create_test_cause(),
        )
        .unwrap()
        .order_id
        .unwrap()
}

fn run(store: &mut InMemoryStore, order_id: i64, command: Command) -> Result<OrderStatus, CoreError> {
    OrderService::new(store)
        .execute(order_id, command, create_test_actor(), create_test_cause())
        .map(|order| order.status)
}

#[test]
fn test_create_assigns_id_and_records_event() {
    let mut store = InMemoryStore::default();
    let order_id = create_order(&mut store);

    assert_eq!(store.orders.len(), 1);
    assert_eq!(store.orders[0].order_id, Some(order_id));
    assert_eq!(store.events.len(), 1);
    assert_eq!(store.events[0].order_id, Some(order_id));
    assert!(store.events[0].is_creation());
}

#[test]
fn test_get_missing_order() {
    let mut store = InMemoryStore::default();
    let err = OrderService::new(&mut store).get_by_id(99).unwrap_err();
    assert_eq!(err, CoreError::OrderNotFound(99));
}

#[test]
fn test_get_all_and_public_link_lookup() {
    let mut store = InMemoryStore::default();
    create_order(&mut store);
    create_order(&mut store);

    let mut service = OrderService::new(&mut store);
    let orders = service.get_all().unwrap();
    assert_eq!(orders.len(), 2);

    let link = orders[1].public_link.clone();
    let found = service.get_by_public_link(&link).unwrap();
    assert_eq!(found.order_id, orders[1].order_id);

    let err = service.get_by_public_link("missing").unwrap_err();
    assert_eq!(err, CoreError::PublicLinkNotFound(String::from("missing")));
}

#[test]
fn test_full_lifecycle_through_service() {
    let mut store = InMemoryStore::default();
    let order_id = create_order(&mut store);
    let employee = OrderService::new(&mut store)
        .register_employee("Technician")
        .unwrap();

    assert_eq!(
        run(
            &mut store,
            order_id,
            Command::Preschedule {
                scheduled_for: Some(future_date())
            }
        ),
        Ok(OrderStatus::Prescheduled)
    );

    let assigned = OrderService::new(&mut store)
        .assign(
            order_id,
            employee.employee_id,
            create_test_actor(),
            create_test_cause(),
        )
        .unwrap();
    assert_eq!(assigned.status, OrderStatus::Assigned);
    assert_eq!(assigned.employee, Some(employee));

    assert_eq!(
        run(&mut store, order_id, Command::ConfirmSchedule),
        Ok(OrderStatus::Scheduled)
    );
    assert_eq!(
        run(
            &mut store,
            order_id,
            Command::Progress {
                employee_description: String::from("on site")
            }
        ),
        Ok(OrderStatus::InProgress)
    );
    assert_eq!(run(&mut store, order_id, Command::Complete), Ok(OrderStatus::Done));
    assert_eq!(run(&mut store, order_id, Command::Close), Ok(OrderStatus::Paid));

    let history = OrderService::new(&mut store).history(order_id).unwrap();
    let names: Vec<&str> = history.iter().map(|e| e.action.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Create",
            "Preschedule",
            "Assign",
            "ConfirmSchedule",
            "Progress",
            "Complete",
            "Close"
        ]
    );
}

#[test]
fn test_rejected_command_writes_nothing() {
    let mut store = InMemoryStore::default();
    let order_id = create_order(&mut store);

    let err = run(&mut store, order_id, Command::Complete).unwrap_err();
    match err {
        CoreError::DomainViolation(e) => {
            assert_eq!(e.kind(), ErrorKind::ActionNotPermittedByStatus);
        }
        other => panic!("expected domain violation, got {other:?}"),
    }
    assert_eq!(store.orders[0].status, OrderStatus::New);
    assert_eq!(store.events.len(), 1);
}

#[test]
fn test_assign_unknown_employee() {
    let mut store = InMemoryStore::default();
    let order_id = create_order(&mut store);

    let err = OrderService::new(&mut store)
        .assign(order_id, 42, create_test_actor(), create_test_cause())
        .unwrap_err();
    assert_eq!(err, CoreError::EmployeeNotFound(42));
}

#[test]
fn test_execute_on_missing_order() {
    let mut store = InMemoryStore::default();
    let err = run(&mut store, 7, Command::Close).unwrap_err();
    assert_eq!(err, CoreError::OrderNotFound(7));
}

#[test]
fn test_history_of_missing_order() {
    let mut store = InMemoryStore::default();
    let err = OrderService::new(&mut store).history(5).unwrap_err();
    assert_eq!(err, CoreError::OrderNotFound(5));
}

#[test]
fn test_register_employee_rejects_blank_name() {
    let mut store = InMemoryStore::default();
    let err = OrderService::new(&mut store)
        .register_employee("  ")
        .unwrap_err();
    assert!(matches!(err, CoreError::DomainViolation(e) if e.kind() == ErrorKind::EmptyField));
    assert!(store.employees.is_empty());
}

#[test]
fn test_register_employee_trims_name() {
    let mut store = InMemoryStore::default();
    let mut service = OrderService::new(&mut store);
    let employee = service.register_employee("  Technician ").unwrap();
    assert_eq!(employee.name, "Technician");
    assert_eq!(service.list_employees().unwrap(), vec![employee]);
}

#[test]
fn test_backend_failure_surfaces_as_repository_error() {
    let mut store = InMemoryStore::default();
    let order_id = create_order(&mut store);
    store.fail_writes = true;

    let err = run(
        &mut store,
        order_id,
        Command::Cancel {
            reason: String::from("duplicate"),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        CoreError::Repository(RepositoryError::Backend(String::from("store is read-only")))
    );
    assert_eq!(store.orders[0].status, OrderStatus::New);
}
