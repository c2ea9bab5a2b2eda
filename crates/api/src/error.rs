// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use svc_orders::CoreError;
use svc_orders_domain::{DomainError, ErrorKind};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A lifecycle rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    match err.kind() {
        ErrorKind::EmptyField | ErrorKind::InvalidValue => ApiError::InvalidInput {
            field: err
                .field()
                .map_or_else(|| String::from("unknown"), |field| field.as_str().to_string()),
            message: err.to_string(),
        },
        ErrorKind::ActionNotPermittedByStatus => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message: err.to_string(),
        },
        ErrorKind::NotImplemented => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(&domain_err),
        CoreError::OrderNotFound(order_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Order"),
            message: format!("Order {order_id} does not exist"),
        },
        CoreError::PublicLinkNotFound(link) => ApiError::ResourceNotFound {
            resource_type: String::from("Order"),
            message: format!("No order is tracked by link '{link}'"),
        },
        CoreError::EmployeeNotFound(employee_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {employee_id} does not exist"),
        },
        CoreError::Repository(repo_err) => ApiError::Internal {
            message: format!("Storage failure: {repo_err}"),
        },
    }
}
