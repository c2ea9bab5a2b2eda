// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use svc_orders_audit::AuditEvent;
use svc_orders_domain::Order;

/// Outcome of applying a command to an existing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The order after the transition.
    pub new_order: Order,
    /// The history entry recording this transition.
    pub audit_event: AuditEvent,
}

/// Outcome of creating an order.
///
/// Neither the order nor the event carries an id yet; both are bound when
/// the result is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationResult {
    pub order: Order,
    pub audit_event: AuditEvent,
}
