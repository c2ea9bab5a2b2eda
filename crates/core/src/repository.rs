// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage ports.
//!
//! The lifecycle never touches storage; callers load an order through these
//! traits, apply a command, then write the result back.

use crate::state::{CreationResult, TransitionResult};
use svc_orders_audit::AuditEvent;
use svc_orders_domain::{Employee, Order};

/// Failure reported by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested record does not exist.
    NotFound {
        entity: &'static str,
        key: String,
    },
    /// Anything else: connection, query or serialization failure.
    Backend(String),
}

impl RepositoryError {
    #[must_use]
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, key } => write!(f, "{entity} '{key}' not found"),
            Self::Backend(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Order storage.
pub trait OrderRepository {
    /// Stores a new order and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the order cannot be stored.
    fn create_order(&mut self, order: &Order) -> Result<i64, RepositoryError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no order has this id.
    fn get_order(&mut self, order_id: i64) -> Result<Order, RepositoryError>;

    /// Returns every order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_orders(&mut self) -> Result<Vec<Order>, RepositoryError>;

    /// Overwrites the stored order with the same id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order has no id or no stored counterpart.
    fn update_order(&mut self, order: &Order) -> Result<(), RepositoryError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no order carries this public link.
    fn find_order_by_public_link(&mut self, public_link: &str) -> Result<Order, RepositoryError>;
}

/// Employee directory.
pub trait EmployeeRepository {
    /// Stores a new employee and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee cannot be stored.
    fn create_employee(&mut self, name: &str) -> Result<Employee, RepositoryError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no employee has this id.
    fn get_employee(&mut self, employee_id: i64) -> Result<Employee, RepositoryError>;

    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_employees(&mut self) -> Result<Vec<Employee>, RepositoryError>;
}

/// Order history storage.
pub trait OrderHistory {
    /// Appends an event and returns its id. The event must carry an order id.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be stored.
    fn record_event(&mut self, event: &AuditEvent) -> Result<i64, RepositoryError>;

    /// Returns an order's events, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn order_history(&mut self, order_id: i64) -> Result<Vec<AuditEvent>, RepositoryError>;
}

/// A store that keeps orders together with their history.
///
/// The provided methods write the order and its event one after the other.
/// Stores that support transactions should override them so both writes
/// land together.
pub trait OrderStore: OrderRepository + OrderHistory {
    /// Stores a freshly created order and its creation event.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails.
    fn persist_creation(&mut self, result: &CreationResult) -> Result<i64, RepositoryError> {
        let order_id = self.create_order(&result.order)?;
        self.record_event(&result.audit_event.clone().for_order(order_id))?;
        Ok(order_id)
    }

    /// Stores a transitioned order and its event.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails.
    fn persist_transition(&mut self, result: &TransitionResult) -> Result<(), RepositoryError> {
        self.update_order(&result.new_order)?;
        self.record_event(&result.audit_event)?;
        Ok(())
    }
}
