// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use svc_orders::{CoreError, RepositoryError};
use svc_orders_domain::{DomainError, ErrorKind, Field, OrderStatus};

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_empty_field_becomes_invalid_input() {
    let err = translate_domain_error(&DomainError::empty_field(Field::Address));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("address"),
            message: String::from("Field 'address' must not be empty"),
        }
    );
}

#[test]
fn test_status_violation_becomes_rule_violation() {
    let err = translate_domain_error(&DomainError::not_permitted_by_status(
        OrderStatus::Canceled,
    ));

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref message, .. } if message.contains("Canceled")
    ));
}

#[test]
fn test_not_implemented_is_internal() {
    let err = translate_domain_error(&DomainError::new(ErrorKind::NotImplemented));

    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_not_found_core_errors() {
    assert!(matches!(
        translate_core_error(CoreError::OrderNotFound(1)),
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Order"
    ));
    assert!(matches!(
        translate_core_error(CoreError::PublicLinkNotFound(String::from("abc"))),
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Order"
    ));
    assert!(matches!(
        translate_core_error(CoreError::EmployeeNotFound(2)),
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Employee"
    ));
}

#[test]
fn test_repository_failure_is_internal() {
    let err = translate_core_error(CoreError::Repository(RepositoryError::Backend(
        String::from("disk full"),
    )));

    assert!(matches!(err, ApiError::Internal { ref message } if message.contains("disk full")));
}

#[test]
fn test_order_info_serializes_dates_as_rfc3339() {
    let info = crate::OrderInfo {
        id: 1,
        client_name: String::from("Client"),
        client_phone: String::from("+71112223344"),
        address: String::from("1 Main Street"),
        client_description: String::new(),
        public_link: String::from("abcdefghijkl"),
        employee: None,
        cancel_reason: None,
        status: String::from("Scheduled"),
        employee_description: String::new(),
        scheduled_for: Some(time::macros::datetime!(2099-01-02 03:04:05 UTC)),
    };

    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["scheduled_for"], "2099-01-02T03:04:05Z");
    assert_eq!(json["employee"], serde_json::Value::Null);
}
