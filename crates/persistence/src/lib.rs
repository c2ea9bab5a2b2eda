// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` persistence for orders, employees and order history.
//!
//! Built on Diesel with embedded migrations. The [`Persistence`] adapter
//! implements the storage ports from the core crate; an order write and
//! its history entry always share one transaction.
//!
//! ## Testing
//!
//! [`Persistence::new_in_memory`] gives every caller its own shared-cache
//! in-memory database, so tests never see each other's rows.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use svc_orders::{
    CreationResult, EmployeeRepository, OrderHistory, OrderRepository, OrderStore,
    RepositoryError, TransitionResult,
};
use svc_orders_audit::AuditEvent;
use svc_orders_domain::{Employee, Order};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Unique suffix for each in-memory database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Opens a fresh, isolated in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_orders_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Opens (or creates) a database file and migrates it.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_order(&mut self, order: &Order) -> Result<i64, PersistenceError> {
        mutations::orders::insert_order(&mut self.conn, order)
    }

    /// # Errors
    ///
    /// Returns `OrderNotFound` if no such order exists.
    pub fn get_order(&mut self, order_id: i64) -> Result<Order, PersistenceError> {
        queries::orders::get_order(&mut self.conn, order_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_orders(&mut self) -> Result<Vec<Order>, PersistenceError> {
        queries::orders::list_orders(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns `OrderNotFound` or `MissingOrderId` if there is nothing to update.
    pub fn update_order(&mut self, order: &Order) -> Result<(), PersistenceError> {
        mutations::orders::update_order(&mut self.conn, order)
    }

    /// # Errors
    ///
    /// Returns `PublicLinkNotFound` if no order carries the link.
    pub fn find_order_by_public_link(&mut self, public_link: &str) -> Result<Order, PersistenceError> {
        queries::orders::find_order_by_public_link(&mut self.conn, public_link)
    }

    // ========================================================================
    // Employees
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_employee(&mut self, name: &str) -> Result<Employee, PersistenceError> {
        mutations::employees::insert_employee(&mut self.conn, name)
    }

    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no such employee exists.
    pub fn get_employee(&mut self, employee_id: i64) -> Result<Employee, PersistenceError> {
        queries::employees::get_employee(&mut self.conn, employee_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(&mut self) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::list_employees(&mut self.conn)
    }

    // ========================================================================
    // History
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the event is unbound or the insert fails.
    pub fn record_event(&mut self, event: &AuditEvent) -> Result<i64, PersistenceError> {
        mutations::history::insert_event(&mut self.conn, event)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn order_history(&mut self, order_id: i64) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::history::order_history(&mut self.conn, order_id)
    }

    /// Counts stored events with the given action name across all orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_events_by_action(&mut self, action_name: &str) -> Result<i64, PersistenceError> {
        queries::history::count_events_by_action(&mut self.conn, action_name)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if persistence fails; nothing is written in that case.
    pub fn persist_creation(&mut self, result: &CreationResult) -> Result<i64, PersistenceError> {
        mutations::persist_creation(&mut self.conn, result)
    }

    /// # Errors
    ///
    /// Returns an error if persistence fails; nothing is written in that case.
    pub fn persist_transition(&mut self, result: &TransitionResult) -> Result<(), PersistenceError> {
        mutations::persist_transition(&mut self.conn, result)
    }
}

impl OrderRepository for Persistence {
    fn create_order(&mut self, order: &Order) -> Result<i64, RepositoryError> {
        Ok(Self::create_order(self, order)?)
    }

    fn get_order(&mut self, order_id: i64) -> Result<Order, RepositoryError> {
        Ok(Self::get_order(self, order_id)?)
    }

    fn list_orders(&mut self) -> Result<Vec<Order>, RepositoryError> {
        Ok(Self::list_orders(self)?)
    }

    fn update_order(&mut self, order: &Order) -> Result<(), RepositoryError> {
        Ok(Self::update_order(self, order)?)
    }

    fn find_order_by_public_link(&mut self, public_link: &str) -> Result<Order, RepositoryError> {
        Ok(Self::find_order_by_public_link(self, public_link)?)
    }
}

impl EmployeeRepository for Persistence {
    fn create_employee(&mut self, name: &str) -> Result<Employee, RepositoryError> {
        Ok(Self::create_employee(self, name)?)
    }

    fn get_employee(&mut self, employee_id: i64) -> Result<Employee, RepositoryError> {
        Ok(Self::get_employee(self, employee_id)?)
    }

    fn list_employees(&mut self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(Self::list_employees(self)?)
    }
}

impl OrderHistory for Persistence {
    fn record_event(&mut self, event: &AuditEvent) -> Result<i64, RepositoryError> {
        Ok(Self::record_event(self, event)?)
    }

    fn order_history(&mut self, order_id: i64) -> Result<Vec<AuditEvent>, RepositoryError> {
        Ok(Self::order_history(self, order_id)?)
    }
}

impl OrderStore for Persistence {
    fn persist_creation(&mut self, result: &CreationResult) -> Result<i64, RepositoryError> {
        Ok(Self::persist_creation(self, result)?)
    }

    fn persist_transition(&mut self, result: &TransitionResult) -> Result<(), RepositoryError> {
        Ok(Self::persist_transition(self, result)?)
    }
}
