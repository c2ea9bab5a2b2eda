// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversion to domain values.
//!
//! Dates are stored as RFC 3339 text and statuses by name.

use diesel::prelude::*;
use svc_orders_audit::AuditEvent;
use svc_orders_domain::{Employee, Order, OrderStatus};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{employees, order_events, orders};
use crate::error::PersistenceError;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
    pub order_id: i64,
    pub client_name: String,
    pub client_phone: String,
    pub address: String,
    pub client_description: String,
    pub public_link: String,
    pub employee_id: Option<i64>,
    pub cancel_reason: Option<String>,
    pub status: String,
    pub employee_description: String,
    pub scheduled_for: Option<String>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub name: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = order_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderEventRow {
    pub event_id: i64,
    pub order_id: i64,
    pub actor_json: String,
    pub cause_json: String,
    pub action_json: String,
    pub before_json: Option<String>,
    pub after_json: String,
}

#[derive(Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrder<'a> {
    pub client_name: &'a str,
    pub client_phone: &'a str,
    pub address: &'a str,
    pub client_description: &'a str,
    pub public_link: &'a str,
    pub employee_id: Option<i64>,
    pub cancel_reason: Option<&'a str>,
    pub status: &'a str,
    pub employee_description: &'a str,
    pub scheduled_for: Option<String>,
}

/// Every column a lifecycle transition or patch may change.
///
/// `None` writes NULL, so clearing the schedule or employee is persisted.
#[derive(AsChangeset)]
#[diesel(table_name = orders)]
#[diesel(treat_none_as_null = true)]
pub struct OrderChangeset<'a> {
    pub client_name: &'a str,
    pub client_phone: &'a str,
    pub address: &'a str,
    pub client_description: &'a str,
    pub employee_id: Option<i64>,
    pub cancel_reason: Option<&'a str>,
    pub status: &'a str,
    pub employee_description: &'a str,
    pub scheduled_for: Option<String>,
    pub updated_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = order_events)]
pub struct NewOrderEvent<'a> {
    pub order_id: i64,
    pub action_name: &'a str,
    pub actor_json: String,
    pub cause_json: String,
    pub action_json: String,
    pub before_json: Option<String>,
    pub after_json: String,
}

/// Formats a timestamp for a text column.
///
/// # Errors
///
/// Returns `SerializationError` if the date cannot be represented.
pub fn format_timestamp(date: OffsetDateTime) -> Result<String, PersistenceError> {
    date.format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| {
        PersistenceError::SerializationError(format!("invalid timestamp '{value}': {e}"))
    })
}

impl<'a> NewOrder<'a> {
    /// # Errors
    ///
    /// Returns `SerializationError` if the scheduled date cannot be formatted.
    pub fn from_order(order: &'a Order) -> Result<Self, PersistenceError> {
        Ok(Self {
            client_name: &order.client_name,
            client_phone: &order.client_phone,
            address: &order.address,
            client_description: &order.client_description,
            public_link: &order.public_link,
            employee_id: order.employee_id(),
            cancel_reason: order.cancel_reason.as_deref(),
            status: order.status.as_str(),
            employee_description: &order.employee_description,
            scheduled_for: order.scheduled_for.map(format_timestamp).transpose()?,
        })
    }
}

impl<'a> OrderChangeset<'a> {
    /// # Errors
    ///
    /// Returns `SerializationError` if a date cannot be formatted.
    pub fn from_order(order: &'a Order) -> Result<Self, PersistenceError> {
        Ok(Self {
            client_name: &order.client_name,
            client_phone: &order.client_phone,
            address: &order.address,
            client_description: &order.client_description,
            employee_id: order.employee_id(),
            cancel_reason: order.cancel_reason.as_deref(),
            status: order.status.as_str(),
            employee_description: &order.employee_description,
            scheduled_for: order.scheduled_for.map(format_timestamp).transpose()?,
            updated_at: format_timestamp(OffsetDateTime::now_utc())?,
        })
    }
}

impl<'a> NewOrderEvent<'a> {
    /// # Errors
    ///
    /// Returns `MissingOrderId` if the event is not bound to an order, or
    /// `SerializationError` if a part cannot be encoded.
    pub fn from_event(event: &'a AuditEvent) -> Result<Self, PersistenceError> {
        let order_id = event.order_id.ok_or(PersistenceError::MissingOrderId)?;
        Ok(Self {
            order_id,
            action_name: &event.action.name,
            actor_json: serde_json::to_string(&event.actor)?,
            cause_json: serde_json::to_string(&event.cause)?,
            action_json: serde_json::to_string(&event.action)?,
            before_json: event
                .before
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
            after_json: serde_json::to_string(&event.after)?,
        })
    }
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self::new(row.employee_id, row.name)
    }
}

impl OrderRow {
    /// Rebuilds the domain order, attaching the joined employee row.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the stored status or date is invalid.
    pub fn into_order(self, employee: Option<EmployeeRow>) -> Result<Order, PersistenceError> {
        let status: OrderStatus = self
            .status
            .parse()
            .map_err(|e| PersistenceError::SerializationError(format!("{e}")))?;
        let scheduled_for = self
            .scheduled_for
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(Order {
            order_id: Some(self.order_id),
            client_name: self.client_name,
            client_phone: self.client_phone,
            address: self.address,
            client_description: self.client_description,
            public_link: self.public_link,
            employee: employee.map(Employee::from),
            cancel_reason: self.cancel_reason,
            status,
            employee_description: self.employee_description,
            scheduled_for,
        })
    }
}

impl OrderEventRow {
    /// # Errors
    ///
    /// Returns `SerializationError` if any stored JSON is malformed.
    pub fn into_event(self) -> Result<AuditEvent, PersistenceError> {
        Ok(AuditEvent {
            event_id: Some(self.event_id),
            order_id: Some(self.order_id),
            actor: serde_json::from_str(&self.actor_json)?,
            cause: serde_json::from_str(&self.cause_json)?,
            action: serde_json::from_str(&self.action_json)?,
            before: self
                .before_json
                .as_deref()
                .map(serde_json::from_str)
                .transpose()?,
            after: serde_json::from_str(&self.after_json)?,
        })
    }
}
