// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::{apply, apply_create};
use crate::command::Command;
use crate::error::CoreError;
use crate::repository::{EmployeeRepository, OrderStore, RepositoryError};
use svc_orders_audit::{Actor, AuditEvent, Cause};
use svc_orders_domain::{Employee, Order, PrimaryOrder};

/// Load, apply, store.
///
/// Borrows the store mutably for its whole lifetime, so a caller that
/// shares a store must serialize access (e.g. behind a mutex).
pub struct OrderService<'a, S> {
    store: &'a mut S,
}

impl<'a, S> OrderService<'a, S>
where
    S: OrderStore + EmployeeRepository,
{
    pub const fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Validates and stores a new order.
    ///
    /// # Errors
    ///
    /// Returns a domain violation for invalid input, or a repository error
    /// if the order cannot be stored.
    pub fn create(
        &mut self,
        primary: &PrimaryOrder,
        actor: Actor,
        cause: Cause,
    ) -> Result<Order, CoreError> {
        let result = apply_create(primary, actor, cause)?;
        let order_id = self.store.persist_creation(&result)?;
        let mut order = result.order;
        order.order_id = Some(order_id);
        Ok(order)
    }

    /// # Errors
    ///
    /// Returns `CoreError::OrderNotFound` if the order does not exist.
    pub fn get_by_id(&mut self, order_id: i64) -> Result<Order, CoreError> {
        self.store
            .get_order(order_id)
            .map_err(|e| not_found_or(e, CoreError::OrderNotFound(order_id)))
    }

    /// # Errors
    ///
    /// Returns a repository error if the store cannot be read.
    pub fn get_all(&mut self) -> Result<Vec<Order>, CoreError> {
        Ok(self.store.list_orders()?)
    }

    /// # Errors
    ///
    /// Returns `CoreError::PublicLinkNotFound` if no order carries the link.
    pub fn get_by_public_link(&mut self, public_link: &str) -> Result<Order, CoreError> {
        self.store.find_order_by_public_link(public_link).map_err(|e| {
            not_found_or(e, CoreError::PublicLinkNotFound(public_link.to_string()))
        })
    }

    /// Loads an order, applies `command` and stores the result.
    ///
    /// Nothing is written when the command is rejected.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::OrderNotFound`, a domain violation from the
    /// lifecycle, or a repository error.
    pub fn execute(
        &mut self,
        order_id: i64,
        command: Command,
        actor: Actor,
        cause: Cause,
    ) -> Result<Order, CoreError> {
        let order = self.get_by_id(order_id)?;
        let result = apply(&order, command, actor, cause)?;
        self.store.persist_transition(&result)?;
        Ok(result.new_order)
    }

    /// Resolves the employee, then assigns them to the order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmployeeNotFound` if the employee does not exist,
    /// otherwise as [`Self::execute`].
    pub fn assign(
        &mut self,
        order_id: i64,
        employee_id: i64,
        actor: Actor,
        cause: Cause,
    ) -> Result<Order, CoreError> {
        let employee = self.get_employee(employee_id)?;
        self.execute(order_id, Command::Assign { employee }, actor, cause)
    }

    /// # Errors
    ///
    /// Returns `CoreError::OrderNotFound` if the order does not exist.
    pub fn history(&mut self, order_id: i64) -> Result<Vec<AuditEvent>, CoreError> {
        self.get_by_id(order_id)?;
        Ok(self.store.order_history(order_id)?)
    }

    /// Validates the name and adds an employee to the directory.
    ///
    /// # Errors
    ///
    /// Returns a domain violation for a blank name, or a repository error.
    pub fn register_employee(&mut self, name: &str) -> Result<Employee, CoreError> {
        Employee::validate_name(name)?;
        Ok(self.store.create_employee(name.trim())?)
    }

    /// # Errors
    ///
    /// Returns `CoreError::EmployeeNotFound` if the employee does not exist.
    pub fn get_employee(&mut self, employee_id: i64) -> Result<Employee, CoreError> {
        self.store
            .get_employee(employee_id)
            .map_err(|e| not_found_or(e, CoreError::EmployeeNotFound(employee_id)))
    }

    /// # Errors
    ///
    /// Returns a repository error if the store cannot be read.
    pub fn list_employees(&mut self) -> Result<Vec<Employee>, CoreError> {
        Ok(self.store.list_employees()?)
    }
}

fn not_found_or(err: RepositoryError, not_found: CoreError) -> CoreError {
    if err.is_not_found() {
        not_found
    } else {
        CoreError::Repository(err)
    }
}
