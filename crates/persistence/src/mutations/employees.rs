// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use svc_orders_domain::Employee;
use tracing::info;

use crate::data_models::EmployeeRow;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Adds an employee and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_employee(conn: &mut SqliteConnection, name: &str) -> Result<Employee, PersistenceError> {
    let row: EmployeeRow = diesel::insert_into(employees::table)
        .values(employees::name.eq(name))
        .returning(EmployeeRow::as_returning())
        .get_result(conn)?;

    info!(employee_id = row.employee_id, name = %row.name, "Employee created");
    Ok(Employee::from(row))
}
