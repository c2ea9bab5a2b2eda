// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use svc_orders_domain::Employee;
use tracing::debug;

use crate::data_models::EmployeeRow;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// # Errors
///
/// Returns `EmployeeNotFound` if no such employee exists.
pub fn get_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Employee, PersistenceError> {
    debug!(employee_id, "Loading employee");

    employees::table
        .find(employee_id)
        .select(EmployeeRow::as_select())
        .first(conn)
        .map(Employee::from)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => PersistenceError::EmployeeNotFound(employee_id),
            other => PersistenceError::from(other),
        })
}

/// Lists every employee in id order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_employees(conn: &mut SqliteConnection) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .order(employees::employee_id.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Employee::from).collect())
}
