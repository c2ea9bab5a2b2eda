// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use svc_orders_domain::Order;
use tracing::debug;

use crate::data_models::{EmployeeRow, OrderRow};
use crate::diesel_schema::{employees, orders};
use crate::error::PersistenceError;

type OrderWithEmployee = (OrderRow, Option<EmployeeRow>);

/// Retrieves an order by id, with its assigned employee.
///
/// # Errors
///
/// Returns `OrderNotFound` if no such order exists.
pub fn get_order(conn: &mut SqliteConnection, order_id: i64) -> Result<Order, PersistenceError> {
    debug!(order_id, "Loading order");

    let result: Result<OrderWithEmployee, diesel::result::Error> = orders::table
        .left_join(employees::table)
        .filter(orders::order_id.eq(order_id))
        .select((OrderRow::as_select(), Option::<EmployeeRow>::as_select()))
        .first(conn);

    match result {
        Ok((row, employee)) => row.into_order(employee),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::OrderNotFound(order_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves an order by its public tracking link.
///
/// # Errors
///
/// Returns `PublicLinkNotFound` if no order carries the link.
pub fn find_order_by_public_link(
    conn: &mut SqliteConnection,
    public_link: &str,
) -> Result<Order, PersistenceError> {
    debug!(public_link, "Loading order by public link");

    let result: Result<OrderWithEmployee, diesel::result::Error> = orders::table
        .left_join(employees::table)
        .filter(orders::public_link.eq(public_link))
        .select((OrderRow::as_select(), Option::<EmployeeRow>::as_select()))
        .first(conn);

    match result {
        Ok((row, employee)) => row.into_order(employee),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::PublicLinkNotFound(public_link.to_string()))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists every order in id order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn list_orders(conn: &mut SqliteConnection) -> Result<Vec<Order>, PersistenceError> {
    let rows: Vec<OrderWithEmployee> = orders::table
        .left_join(employees::table)
        .order(orders::order_id.asc())
        .select((OrderRow::as_select(), Option::<EmployeeRow>::as_select()))
        .load(conn)?;

    debug!(count = rows.len(), "Loaded orders");

    rows.into_iter()
        .map(|(row, employee)| row.into_order(employee))
        .collect()
}
