// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::Connection;
use diesel::SqliteConnection;
use svc_orders::{CreationResult, TransitionResult};

use super::history::insert_event;
use super::orders::{insert_order, update_order};
use crate::error::PersistenceError;

/// Stores a new order and its creation event atomically.
///
/// # Errors
///
/// Returns an error if either insert fails; nothing is written in that case.
pub fn persist_creation(
    conn: &mut SqliteConnection,
    result: &CreationResult,
) -> Result<i64, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let order_id = insert_order(conn, &result.order)?;
        insert_event(conn, &result.audit_event.clone().for_order(order_id))?;
        Ok(order_id)
    })
}

/// Stores a transitioned order and its event atomically.
///
/// # Errors
///
/// Returns an error if either write fails; nothing is written in that case.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<(), PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        update_order(conn, &result.new_order)?;
        insert_event(conn, &result.audit_event)?;
        Ok(())
    })
}
