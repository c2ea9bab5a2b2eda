// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, Field};
use crate::status::OrderStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An employee who can be assigned to orders.
///
/// Owned by the employee directory; an order only holds a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Numeric identifier assigned by the directory.
    pub employee_id: i64,
    pub name: String,
}

impl Employee {
    #[must_use]
    pub const fn new(employee_id: i64, name: String) -> Self {
        Self { employee_id, name }
    }

    /// Checks a name submitted for a new employee.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the name is empty or only whitespace.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::empty_field(Field::EmployeeName));
        }
        Ok(())
    }
}

/// A service order.
///
/// Client details are set at creation and only change through a patch.
/// The public link never changes. Status, employee, schedule and cancel
/// reason change exclusively through the lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier assigned by the persistence layer.
    /// `None` until the order has been stored.
    pub order_id: Option<i64>,
    pub client_name: String,
    /// Normalized client phone number.
    pub client_phone: String,
    pub address: String,
    pub client_description: String,
    /// Opaque token used for client-side tracking.
    pub public_link: String,
    pub employee: Option<Employee>,
    /// Set exactly when the status is `Canceled`.
    pub cancel_reason: Option<String>,
    pub status: OrderStatus,
    pub employee_description: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub scheduled_for: Option<OffsetDateTime>,
}

impl Order {
    /// Returns the assigned employee's id, if any.
    #[must_use]
    pub fn employee_id(&self) -> Option<i64> {
        self.employee.as_ref().map(|employee| employee.employee_id)
    }
}

/// Client-submitted data for a new order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryOrder {
    pub client_name: String,
    pub client_phone: String,
    pub address: String,
    #[serde(default)]
    pub client_description: String,
}

/// Partial edit of an order's free-text fields.
///
/// `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPatcher {
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub address: Option<String>,
    pub client_description: Option<String>,
    pub employee_description: Option<String>,
}

impl OrderPatcher {
    /// Returns true when the patch carries no changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.client_name.is_none()
            && self.client_phone.is_none()
            && self.address.is_none()
            && self.client_description.is_none()
            && self.employee_description.is_none()
    }
}
