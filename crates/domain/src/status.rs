// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order status states.
//!
//! The happy path runs `New → Prescheduled → Assigned → Scheduled →
//! InProgress → Done → Paid`. `Canceled` is reachable from every status
//! except `Paid` and `Canceled` itself. Which operation may run from which
//! status is decided in the lifecycle module, not here.

use crate::error::{DomainError, Field};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a service order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Accepted from the client, nothing planned yet.
    #[default]
    New,
    /// A tentative visit date may have been agreed.
    Prescheduled,
    /// An employee is attached to the order.
    Assigned,
    /// The visit date is fixed.
    Scheduled,
    /// Work has started.
    InProgress,
    /// Work is finished, payment pending.
    Done,
    /// Paid. Terminal.
    Paid,
    /// Canceled with a reason. Terminal.
    Canceled,
}

/// Raised when a stored or submitted status string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status '{0}'")]
pub struct UnknownStatusError(pub String);

impl OrderStatus {
    /// Every status, in lifecycle order with `Canceled` last.
    pub const ALL: [Self; 8] = [
        Self::New,
        Self::Prescheduled,
        Self::Assigned,
        Self::Scheduled,
        Self::InProgress,
        Self::Done,
        Self::Paid,
        Self::Canceled,
    ];

    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Prescheduled => "Prescheduled",
            Self::Assigned => "Assigned",
            Self::Scheduled => "Scheduled",
            Self::InProgress => "InProgress",
            Self::Done => "Done",
            Self::Paid => "Paid",
            Self::Canceled => "Canceled",
        }
    }

    /// Returns true for `Paid` and `Canceled`. Neither accepts edits,
    /// though a paid order may still be re-assigned.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Canceled)
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                DomainError::invalid_value(Field::Status, UnknownStatusError(s.to_string()))
            })
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
