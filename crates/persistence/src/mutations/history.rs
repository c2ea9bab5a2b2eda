// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use svc_orders_audit::AuditEvent;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::data_models::NewOrderEvent;
use crate::diesel_schema::order_events;
use crate::error::PersistenceError;

/// Appends an event to its order's history and returns the event id.
///
/// # Errors
///
/// Returns `MissingOrderId` if the event is not bound to an order, or an
/// error if encoding or the insert fails.
pub fn insert_event(conn: &mut SqliteConnection, event: &AuditEvent) -> Result<i64, PersistenceError> {
    let row = NewOrderEvent::from_event(event)?;
    diesel::insert_into(order_events::table)
        .values(&row)
        .execute(conn)?;

    let event_id: i64 = conn.get_last_insert_rowid()?;
    debug!(
        event_id,
        order_id = row.order_id,
        action = row.action_name,
        "Order event recorded"
    );
    Ok(event_id)
}
