// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EmployeeRepository, OrderHistory, OrderRepository, OrderStore, RepositoryError};
use svc_orders_audit::{Actor, AuditEvent, Cause};
use svc_orders_domain::{Employee, Order, PrimaryOrder};
use time::{Duration, OffsetDateTime};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("dispatcher-1"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Operator request"))
}

pub fn create_test_primary_order() -> PrimaryOrder {
    PrimaryOrder {
        client_name: String::from("Client"),
        client_phone: String::from("8 111 222 33 44"),
        address: String::from("1 Main Street"),
        client_description: String::from("Fridge is warm"),
    }
}

pub fn future_date() -> OffsetDateTime {
    OffsetDateTime::now_utc() + Duration::days(2)
}

/// Vec-backed store for exercising the service without a database.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub orders: Vec<Order>,
    pub employees: Vec<Employee>,
    pub events: Vec<AuditEvent>,
    /// When set, every write fails with a backend error.
    pub fail_writes: bool,
}

impl InMemoryStore {
    fn check_writable(&self) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::Backend(String::from("store is read-only")));
        }
        Ok(())
    }
}

impl OrderRepository for InMemoryStore {
    fn create_order(&mut self, order: &Order) -> Result<i64, RepositoryError> {
        self.check_writable()?;
        let order_id = i64::try_from(self.orders.len()).unwrap() + 1;
        let mut stored = order.clone();
        stored.order_id = Some(order_id);
        self.orders.push(stored);
        Ok(order_id)
    }

    fn get_order(&mut self, order_id: i64) -> Result<Order, RepositoryError> {
        self.orders
            .iter()
            .find(|o| o.order_id == Some(order_id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("order", order_id))
    }

    fn list_orders(&mut self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.clone())
    }

    fn update_order(&mut self, order: &Order) -> Result<(), RepositoryError> {
        self.check_writable()?;
        let slot = self
            .orders
            .iter_mut()
            .find(|o| o.order_id.is_some() && o.order_id == order.order_id)
            .ok_or_else(|| RepositoryError::not_found("order", format!("{:?}", order.order_id)))?;
        *slot = order.clone();
        Ok(())
    }

    fn find_order_by_public_link(&mut self, public_link: &str) -> Result<Order, RepositoryError> {
        self.orders
            .iter()
            .find(|o| o.public_link == public_link)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("order", public_link))
    }
}

impl EmployeeRepository for InMemoryStore {
    fn create_employee(&mut self, name: &str) -> Result<Employee, RepositoryError> {
        self.check_writable()?;
        let employee_id = i64::try_from(self.employees.len()).unwrap() + 1;
        let employee = Employee::new(employee_id, name.to_string());
        self.employees.push(employee.clone());
        Ok(employee)
    }

    fn get_employee(&mut self, employee_id: i64) -> Result<Employee, RepositoryError> {
        self.employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("employee", employee_id))
    }

    fn list_employees(&mut self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.employees.clone())
    }
}

impl OrderHistory for InMemoryStore {
    fn record_event(&mut self, event: &AuditEvent) -> Result<i64, RepositoryError> {
        self.check_writable()?;
        let event_id = i64::try_from(self.events.len()).unwrap() + 1;
        let mut stored = event.clone();
        stored.event_id = Some(event_id);
        self.events.push(stored);
        Ok(event_id)
    }

    fn order_history(&mut self, order_id: i64) -> Result<Vec<AuditEvent>, RepositoryError> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.order_id == Some(order_id))
            .cloned()
            .collect())
    }
}

impl OrderStore for InMemoryStore {}
