// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Order history.
//!
//! Every successful creation or transition of an order yields exactly one
//! [`AuditEvent`]. Events are written once and never updated.

use serde::{Deserialize, Serialize};
use svc_orders_domain::{Order, OrderStatus};
use time::OffsetDateTime;

#[cfg(test)]
mod tests;

/// Who initiated a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Operator identifier as supplied by the caller.
    pub id: String,
    /// Kind of actor, e.g. `"operator"` or `"system"`.
    pub actor_type: String,
}

impl Actor {
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// An operator who did not identify themselves.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::new(String::from("anonymous"), String::from("operator"))
    }
}

/// What triggered a change, typically the inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    pub id: String,
    pub description: String,
}

impl Cause {
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// The operation that was applied, e.g. `"Cancel"` with the reason as
/// details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub details: Option<String>,
}

impl Action {
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The lifecycle-relevant part of an order at one point in time.
///
/// Free-text client fields are deliberately left out; they are visible on
/// the order itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub status: OrderStatus,
    pub employee_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub scheduled_for: Option<OffsetDateTime>,
    pub cancel_reason: Option<String>,
}

impl OrderSnapshot {
    /// Captures the snapshot fields of `order`.
    #[must_use]
    pub fn of(order: &Order) -> Self {
        Self {
            status: order.status,
            employee_id: order.employee_id(),
            scheduled_for: order.scheduled_for,
            cancel_reason: order.cancel_reason.clone(),
        }
    }
}

/// One entry in an order's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Assigned when the event is stored.
    pub event_id: Option<i64>,
    /// The order this event belongs to. `None` only for a creation event
    /// that has not been stored yet.
    pub order_id: Option<i64>,
    pub actor: Actor,
    pub cause: Cause,
    pub action: Action,
    /// State before the change. `None` for the creation event.
    pub before: Option<OrderSnapshot>,
    pub after: OrderSnapshot,
}

impl AuditEvent {
    /// Creates an unsaved event.
    ///
    /// # Arguments
    ///
    /// * `order_id` - The order the event belongs to, if already known
    /// * `actor` - Who initiated the change
    /// * `cause` - What triggered it
    /// * `action` - The operation applied
    /// * `before` - Snapshot before the change, `None` on creation
    /// * `after` - Snapshot after the change
    #[must_use]
    pub const fn new(
        order_id: Option<i64>,
        actor: Actor,
        cause: Cause,
        action: Action,
        before: Option<OrderSnapshot>,
        after: OrderSnapshot,
    ) -> Self {
        Self {
            event_id: None,
            order_id,
            actor,
            cause,
            action,
            before,
            after,
        }
    }

    /// Returns a copy of this event bound to `order_id`.
    #[must_use]
    pub fn for_order(mut self, order_id: i64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Returns true if this event records the creation of the order.
    #[must_use]
    pub const fn is_creation(&self) -> bool {
        self.before.is_none()
    }
}
