// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use svc_orders_audit::AuditEvent;
use tracing::debug;

use crate::data_models::OrderEventRow;
use crate::diesel_schema::order_events;
use crate::error::PersistenceError;

/// Returns an order's history, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or an event cannot be decoded.
pub fn order_history(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    let rows: Vec<OrderEventRow> = order_events::table
        .filter(order_events::order_id.eq(order_id))
        .order(order_events::event_id.asc())
        .select(OrderEventRow::as_select())
        .load(conn)?;

    debug!(order_id, count = rows.len(), "Loaded order history");

    rows.into_iter().map(OrderEventRow::into_event).collect()
}

/// Counts all stored events with the given action name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_events_by_action(
    conn: &mut SqliteConnection,
    action_name: &str,
) -> Result<i64, PersistenceError> {
    Ok(order_events::table
        .filter(order_events::action_name.eq(action_name))
        .count()
        .get_result(conn)?)
}
