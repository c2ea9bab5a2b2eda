// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Employee, Order, OrderStatus, PrimaryOrder, create_new_order};
use time::{Duration, OffsetDateTime};

pub fn create_test_primary_order() -> PrimaryOrder {
    PrimaryOrder {
        client_name: String::from("Client"),
        client_phone: String::from("8(111)222-33-44"),
        address: String::from("1 Main Street"),
        client_description: String::from("Washing machine leaks"),
    }
}

pub fn create_test_order() -> Order {
    create_new_order(&create_test_primary_order()).expect("valid primary order")
}

/// Returns a fresh order forced into `status`, with the fields that
/// status normally implies filled in.
pub fn create_test_order_with_status(status: OrderStatus) -> Order {
    let mut order = create_test_order();
    order.status = status;
    if !matches!(status, OrderStatus::New | OrderStatus::Prescheduled) {
        order.employee = Some(create_test_employee());
    }
    if matches!(status, OrderStatus::Scheduled) {
        order.scheduled_for = Some(future_date());
    }
    if matches!(status, OrderStatus::Canceled) {
        order.cancel_reason = Some(String::from("client changed their mind"));
    }
    order
}

pub fn create_test_employee() -> Employee {
    Employee::new(1, String::from("Employee"))
}

pub fn future_date() -> OffsetDateTime {
    OffsetDateTime::now_utc() + Duration::days(1)
}

pub fn past_date() -> OffsetDateTime {
    OffsetDateTime::now_utc() - Duration::days(1)
}
