// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use svc_orders_domain::{Employee, OrderPatcher};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A lifecycle operation requested on an existing order, as data only.
///
/// `Assign` carries the resolved employee; looking the employee up by id
/// is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Preschedule {
        scheduled_for: Option<OffsetDateTime>,
    },
    Assign {
        employee: Employee,
    },
    Schedule {
        scheduled_for: Option<OffsetDateTime>,
    },
    ConfirmSchedule,
    Progress {
        employee_description: String,
    },
    Complete,
    Close,
    Cancel {
        reason: String,
    },
    Patch {
        patcher: OrderPatcher,
    },
}

impl Command {
    /// Returns the action name recorded in order history.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Preschedule { .. } => "Preschedule",
            Self::Assign { .. } => "Assign",
            Self::Schedule { .. } => "Schedule",
            Self::ConfirmSchedule => "ConfirmSchedule",
            Self::Progress { .. } => "Progress",
            Self::Complete => "Complete",
            Self::Close => "Close",
            Self::Cancel { .. } => "Cancel",
            Self::Patch { .. } => "Patch",
        }
    }

    /// Returns a human-readable summary of the command's arguments.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::Preschedule { scheduled_for } | Self::Schedule { scheduled_for } => {
                Some(scheduled_for.and_then(|date| date.format(&Rfc3339).ok()).map_or_else(
                    || String::from("no date"),
                    |date| format!("date {date}"),
                ))
            }
            Self::Assign { employee } => Some(format!(
                "employee {} ({})",
                employee.employee_id, employee.name
            )),
            Self::Progress {
                employee_description,
            } => Some(employee_description.clone()),
            Self::Cancel { reason } => Some(reason.clone()),
            Self::Patch { patcher } => {
                let fields: Vec<&str> = [
                    ("client_name", patcher.client_name.is_some()),
                    ("client_phone", patcher.client_phone.is_some()),
                    ("address", patcher.address.is_some()),
                    ("client_description", patcher.client_description.is_some()),
                    ("employee_description", patcher.employee_description.is_some()),
                ]
                .into_iter()
                .filter_map(|(name, present)| present.then_some(name))
                .collect();
                Some(format!("fields: {}", fields.join(", ")))
            }
            Self::ConfirmSchedule | Self::Complete | Self::Close => None,
        }
    }
}
