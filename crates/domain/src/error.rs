// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::OrderStatus;
use std::error::Error;
use std::sync::Arc;

/// The category of a domain failure.
///
/// Callers branch on the kind; the remaining detail on [`DomainError`]
/// is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field was empty or absent.
    EmptyField,
    /// A field was present but failed validation.
    InvalidValue,
    /// The operation is not allowed from the order's current status.
    ActionNotPermittedByStatus,
    /// Reserved. No lifecycle operation produces it.
    NotImplemented,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyField => "empty_field",
            Self::InvalidValue => "invalid_value",
            Self::ActionNotPermittedByStatus => "action_not_permitted_by_status",
            Self::NotImplemented => "not_implemented",
        }
    }
}

/// Input fields that validation can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ClientName,
    ClientPhone,
    Address,
    ScheduledFor,
    Status,
    EmployeeName,
}

impl Field {
    /// Returns the wire name of the field, as used in request bodies.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClientName => "client_name",
            Self::ClientPhone => "client_phone",
            Self::Address => "address",
            Self::ScheduledFor => "scheduled_for",
            Self::Status => "status",
            Self::EmployeeName => "name",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::ClientName => "client name",
            Self::ClientPhone => "client phone",
            Self::Address => "address",
            Self::ScheduledFor => "scheduled date",
            Self::Status => "status",
            Self::EmployeeName => "employee name",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned by every lifecycle operation.
///
/// Carries a kind tag plus optional detail: the offending field, the
/// status the order was in, and the underlying cause. Two errors compare
/// equal when their kinds match, regardless of detail.
#[derive(Debug, Clone)]
pub struct DomainError {
    kind: ErrorKind,
    field: Option<Field>,
    status: Option<OrderStatus>,
    cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl DomainError {
    /// Creates a bare error of the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            field: None,
            status: None,
            cause: None,
        }
    }

    /// A required field was empty.
    #[must_use]
    pub const fn empty_field(field: Field) -> Self {
        Self {
            kind: ErrorKind::EmptyField,
            field: Some(field),
            status: None,
            cause: None,
        }
    }

    /// A field failed validation with the given cause.
    #[must_use]
    pub fn invalid_value<E>(field: Field, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: ErrorKind::InvalidValue,
            field: Some(field),
            status: None,
            cause: Some(Arc::new(cause)),
        }
    }

    /// The order's current status forbids the requested operation.
    #[must_use]
    pub const fn not_permitted_by_status(status: OrderStatus) -> Self {
        Self {
            kind: ErrorKind::ActionNotPermittedByStatus,
            field: None,
            status: Some(status),
            cause: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        self.field
    }

    #[must_use]
    pub const fn status(&self) -> Option<OrderStatus> {
        self.status
    }
}

impl PartialEq for DomainError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for DomainError {}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.field) {
            (ErrorKind::EmptyField, Some(field)) => write!(f, "Field '{field}' must not be empty")?,
            (ErrorKind::EmptyField, None) => write!(f, "A required field is empty")?,
            (ErrorKind::InvalidValue, Some(field)) => write!(f, "Invalid value for '{field}'")?,
            (ErrorKind::InvalidValue, None) => write!(f, "Invalid value")?,
            (ErrorKind::ActionNotPermittedByStatus, _) => match self.status {
                Some(status) => write!(f, "Action is not permitted for an order in status {status}")?,
                None => write!(f, "Action is not permitted by the order status")?,
            },
            (ErrorKind::NotImplemented, _) => write!(f, "Operation is not implemented")?,
        }
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl Error for DomainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}
