// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use svc_orders_domain::Order;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{NewOrder, OrderChangeset};
use crate::diesel_schema::orders;
use crate::error::PersistenceError;

/// Inserts a new order and returns its id.
///
/// Any id already on `order` is ignored.
///
/// # Errors
///
/// Returns an error if the insert fails, e.g. on a duplicate public link
/// or an unknown employee.
pub fn insert_order(conn: &mut SqliteConnection, order: &Order) -> Result<i64, PersistenceError> {
    let row = NewOrder::from_order(order)?;
    diesel::insert_into(orders::table)
        .values(&row)
        .execute(conn)?;

    let order_id: i64 = conn.get_last_insert_rowid()?;
    info!(order_id, status = %order.status, "Order created");
    Ok(order_id)
}

/// Overwrites the stored order with `order`'s current field values.
///
/// The public link is never rewritten.
///
/// # Errors
///
/// Returns `MissingOrderId` if the order was never stored, or
/// `OrderNotFound` if no row has its id.
pub fn update_order(conn: &mut SqliteConnection, order: &Order) -> Result<(), PersistenceError> {
    let order_id = order.order_id.ok_or(PersistenceError::MissingOrderId)?;
    let changeset = OrderChangeset::from_order(order)?;

    let rows_affected: usize = diesel::update(orders::table.find(order_id))
        .set(&changeset)
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::OrderNotFound(order_id));
    }

    debug!(order_id, status = %order.status, "Order updated");
    Ok(())
}
