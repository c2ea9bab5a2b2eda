// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as RFC 3339 strings. Statuses travel by name.

use serde::{Deserialize, Serialize};
use svc_orders_audit::AuditEvent;
use svc_orders_domain::{Employee, Order, OrderPatcher, PrimaryOrder};
use time::OffsetDateTime;

use crate::error::ApiError;

/// API request to create a new order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOrderRequest {
    pub client_name: String,
    pub client_phone: String,
    pub address: String,
    #[serde(default)]
    pub client_description: String,
}

impl From<CreateOrderRequest> for PrimaryOrder {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            client_name: request.client_name,
            client_phone: request.client_phone,
            address: request.address,
            client_description: request.client_description,
        }
    }
}

/// API response for a successful order creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    /// The canonical numeric identifier.
    pub id: i64,
    /// Token the client uses to track the order.
    pub public_link: String,
}

/// API request to edit an order's free-text fields.
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatchOrderRequest {
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub client_description: Option<String>,
    #[serde(default)]
    pub employee_description: Option<String>,
}

impl From<PatchOrderRequest> for OrderPatcher {
    fn from(request: PatchOrderRequest) -> Self {
        Self {
            client_name: request.client_name,
            client_phone: request.client_phone,
            address: request.address,
            client_description: request.client_description,
            employee_description: request.employee_description,
        }
    }
}

/// API request carrying an optional visit date.
///
/// Used by both preschedule and schedule; schedule rejects a missing date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub scheduled_for: Option<OffsetDateTime>,
}

/// API request to start work on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProgressRequest {
    #[serde(default)]
    pub employee_description: String,
}

/// API request to cancel an order. An empty reason is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CancelRequest {
    #[serde(default)]
    pub cancel_reason: String,
}

/// Employee as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub id: i64,
    pub name: String,
}

impl From<Employee> for EmployeeInfo {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.employee_id,
            name: employee.name,
        }
    }
}

/// Full order view for operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub id: i64,
    pub client_name: String,
    pub client_phone: String,
    pub address: String,
    pub client_description: String,
    pub public_link: String,
    pub employee: Option<EmployeeInfo>,
    pub cancel_reason: Option<String>,
    pub status: String,
    pub employee_description: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub scheduled_for: Option<OffsetDateTime>,
}

impl TryFrom<Order> for OrderInfo {
    type Error = ApiError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        let id: i64 = order.order_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Order has no canonical ID"),
        })?;
        Ok(Self {
            id,
            client_name: order.client_name,
            client_phone: order.client_phone,
            address: order.address,
            client_description: order.client_description,
            public_link: order.public_link,
            employee: order.employee.map(EmployeeInfo::from),
            cancel_reason: order.cancel_reason,
            status: order.status.as_str().to_string(),
            employee_description: order.employee_description,
            scheduled_for: order.scheduled_for,
        })
    }
}

/// API response listing all orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<OrderInfo>,
}

/// What a client sees when tracking an order by its public link.
///
/// Deliberately omits client and employee details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicOrderView {
    pub status: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub scheduled_for: Option<OffsetDateTime>,
}

impl From<&Order> for PublicOrderView {
    fn from(order: &Order) -> Self {
        Self {
            status: order.status.as_str().to_string(),
            scheduled_for: order.scheduled_for,
        }
    }
}

/// API request to add an employee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub name: String,
}

/// API response for a successful employee creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeResponse {
    pub id: i64,
}

/// API response listing all employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    pub employees: Vec<EmployeeInfo>,
}

/// One entry of an order's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntryInfo {
    pub event_id: Option<i64>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action: String,
    pub details: Option<String>,
    /// Status before the change; absent for the creation entry.
    pub status_before: Option<String>,
    pub status_after: String,
    pub employee_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub scheduled_for: Option<OffsetDateTime>,
}

impl From<AuditEvent> for HistoryEntryInfo {
    fn from(event: AuditEvent) -> Self {
        Self {
            event_id: event.event_id,
            actor_id: event.actor.id,
            actor_type: event.actor.actor_type,
            cause_id: event.cause.id,
            cause_description: event.cause.description,
            action: event.action.name,
            details: event.action.details,
            status_before: event
                .before
                .map(|snapshot| snapshot.status.as_str().to_string()),
            status_after: event.after.status.as_str().to_string(),
            employee_id: event.after.employee_id,
            scheduled_for: event.after.scheduled_for,
        }
    }
}

/// API response for an order's history, oldest entry first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderHistoryResponse {
    pub order_id: i64,
    pub entries: Vec<HistoryEntryInfo>,
}
