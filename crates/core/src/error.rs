// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::repository::RepositoryError;
use svc_orders_domain::DomainError;

/// Errors that can occur while applying or orchestrating order operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No order exists with this id.
    OrderNotFound(i64),
    /// No order exists with this public link.
    PublicLinkNotFound(String),
    /// No employee exists with this id.
    EmployeeNotFound(i64),
    /// The store failed for a reason unrelated to the request.
    Repository(RepositoryError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::OrderNotFound(id) => write!(f, "Order {id} not found"),
            Self::PublicLinkNotFound(link) => write!(f, "No order with public link '{link}'"),
            Self::EmployeeNotFound(id) => write!(f, "Employee {id} not found"),
            Self::Repository(err) => write!(f, "Repository error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            Self::Repository(err) => Some(err),
            Self::OrderNotFound(_) | Self::PublicLinkNotFound(_) | Self::EmployeeNotFound(_) => {
                None
            }
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}
