// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order lifecycle transitions.
//!
//! Each operation checks the current status and its inputs first and only
//! then mutates the order. A failed call leaves the order untouched.
//!
//! | From                                                  | Operation         | To             |
//! |-------------------------------------------------------|-------------------|----------------|
//! | New, Prescheduled, Assigned, Scheduled, `InProgress`  | `preschedule`     | Prescheduled   |
//! | any except New, Canceled                              | `assign`          | Assigned       |
//! | Assigned, `InProgress`                                | `schedule`        | Scheduled      |
//! | Assigned                                              | `confirm_schedule`| Scheduled      |
//! | Scheduled                                             | `progress`        | `InProgress`   |
//! | `InProgress`                                          | `complete`        | Done           |
//! | Done                                                  | `close`           | Paid           |
//! | any except Paid, Canceled                             | `cancel`          | Canceled       |
//! | any except Paid, Canceled                             | `patch`           | unchanged      |

use crate::error::{DomainError, Field};
use crate::phone::normalize_phone_number;
use crate::public_link::generate_public_link;
use crate::schedule::must_not_be_past;
use crate::status::OrderStatus;
use crate::types::{Employee, Order, OrderPatcher, PrimaryOrder};
use time::OffsetDateTime;

use crate::status::OrderStatus::{Assigned, Canceled, Done, InProgress, New, Paid, Prescheduled, Scheduled};

const PRESCHEDULE_FROM: &[OrderStatus] = &[New, Prescheduled, Assigned, Scheduled, InProgress];
const ASSIGN_DENIED: &[OrderStatus] = &[New, Canceled];
const SCHEDULE_FROM: &[OrderStatus] = &[Assigned, InProgress];
const CONFIRM_SCHEDULE_FROM: &[OrderStatus] = &[Assigned];
const PROGRESS_FROM: &[OrderStatus] = &[Scheduled];
const COMPLETE_FROM: &[OrderStatus] = &[InProgress];
const CLOSE_FROM: &[OrderStatus] = &[Done];
const EDIT_DENIED: &[OrderStatus] = &[Paid, Canceled];

/// Builds a new order from client-submitted data.
///
/// Checks run in a fixed order and the first failure is returned:
/// empty name, empty phone, empty address, then phone format.
///
/// # Errors
///
/// Returns `EmptyField` naming the first empty required field, or
/// `InvalidValue` for the phone if it cannot be normalized.
pub fn create_new_order(primary: &PrimaryOrder) -> Result<Order, DomainError> {
    if primary.client_name.is_empty() {
        return Err(DomainError::empty_field(Field::ClientName));
    }
    if primary.client_phone.is_empty() {
        return Err(DomainError::empty_field(Field::ClientPhone));
    }
    if primary.address.is_empty() {
        return Err(DomainError::empty_field(Field::Address));
    }
    let client_phone = normalize_phone_number(&primary.client_phone)
        .map_err(|e| DomainError::invalid_value(Field::ClientPhone, e))?;

    Ok(Order {
        order_id: None,
        client_name: primary.client_name.clone(),
        client_phone,
        address: primary.address.clone(),
        client_description: primary.client_description.clone(),
        public_link: generate_public_link(),
        employee: None,
        cancel_reason: None,
        status: New,
        employee_description: String::new(),
        scheduled_for: None,
    })
}

impl Order {
    fn require_status(&self, allowed: &[OrderStatus]) -> Result<(), DomainError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(DomainError::not_permitted_by_status(self.status))
        }
    }

    fn reject_status(&self, denied: &[OrderStatus]) -> Result<(), DomainError> {
        if denied.contains(&self.status) {
            Err(DomainError::not_permitted_by_status(self.status))
        } else {
            Ok(())
        }
    }

    /// Records a tentative visit date, or clears it when `date` is `None`.
    ///
    /// # Errors
    ///
    /// `ActionNotPermittedByStatus` from `Done`, `Paid` or `Canceled`;
    /// `InvalidValue` if `date` is in the past.
    pub fn preschedule(&mut self, date: Option<OffsetDateTime>) -> Result<(), DomainError> {
        self.require_status(PRESCHEDULE_FROM)?;
        if let Some(date) = date {
            must_not_be_past(date, OffsetDateTime::now_utc())
                .map_err(|e| DomainError::invalid_value(Field::ScheduledFor, e))?;
        }

        self.status = Prescheduled;
        self.scheduled_for = date;
        Ok(())
    }

    /// Attaches an employee.
    ///
    /// Allowed from every status except `New` and `Canceled`.
    ///
    /// # Errors
    ///
    /// `ActionNotPermittedByStatus` from `New` or `Canceled`.
    pub fn assign(&mut self, employee: Employee) -> Result<(), DomainError> {
        self.reject_status(ASSIGN_DENIED)?;

        self.employee = Some(employee);
        self.status = Assigned;
        Ok(())
    }

    /// Fixes the visit date.
    ///
    /// # Errors
    ///
    /// `EmptyField` when `date` is `None`, `InvalidValue` when it is in the
    /// past, `ActionNotPermittedByStatus` unless the order is `Assigned`
    /// or `InProgress`.
    pub fn schedule(&mut self, date: Option<OffsetDateTime>) -> Result<(), DomainError> {
        let Some(date) = date else {
            return Err(DomainError::empty_field(Field::ScheduledFor));
        };
        must_not_be_past(date, OffsetDateTime::now_utc())
            .map_err(|e| DomainError::invalid_value(Field::ScheduledFor, e))?;
        self.require_status(SCHEDULE_FROM)?;

        self.status = Scheduled;
        self.scheduled_for = Some(date);
        Ok(())
    }

    /// Accepts the tentative date already on an assigned order.
    ///
    /// # Errors
    ///
    /// `ActionNotPermittedByStatus` unless `Assigned`; `EmptyField` if no
    /// date is recorded.
    pub fn confirm_schedule(&mut self) -> Result<(), DomainError> {
        self.require_status(CONFIRM_SCHEDULE_FROM)?;
        if self.scheduled_for.is_none() {
            return Err(DomainError::empty_field(Field::ScheduledFor));
        }

        self.status = Scheduled;
        Ok(())
    }

    /// Starts work and records the employee's notes.
    ///
    /// The schedule is cleared and `employee_description` is overwritten,
    /// even with an empty string.
    ///
    /// # Errors
    ///
    /// `ActionNotPermittedByStatus` unless `Scheduled`.
    pub fn progress(&mut self, employee_description: String) -> Result<(), DomainError> {
        self.require_status(PROGRESS_FROM)?;

        self.status = InProgress;
        self.scheduled_for = None;
        self.employee_description = employee_description;
        Ok(())
    }

    /// # Errors
    ///
    /// `ActionNotPermittedByStatus` unless `InProgress`.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.require_status(COMPLETE_FROM)?;
        self.status = Done;
        Ok(())
    }

    /// Marks a finished order as paid.
    ///
    /// # Errors
    ///
    /// `ActionNotPermittedByStatus` unless `Done`.
    pub fn close(&mut self) -> Result<(), DomainError> {
        self.require_status(CLOSE_FROM)?;
        self.status = Paid;
        Ok(())
    }

    /// Cancels the order, storing `reason` as given.
    ///
    /// # Errors
    ///
    /// `ActionNotPermittedByStatus` from `Paid` or `Canceled`.
    pub fn cancel(&mut self, reason: String) -> Result<(), DomainError> {
        self.reject_status(EDIT_DENIED)?;

        self.cancel_reason = Some(reason);
        self.status = Canceled;
        self.scheduled_for = None;
        Ok(())
    }

    /// Overwrites each free-text field the patcher carries.
    ///
    /// Status, schedule and employee are never touched. The phone is
    /// stored exactly as provided.
    ///
    /// # Errors
    ///
    /// `ActionNotPermittedByStatus` from `Paid` or `Canceled`.
    pub fn patch(&mut self, patcher: &OrderPatcher) -> Result<(), DomainError> {
        self.reject_status(EDIT_DENIED)?;

        if let Some(client_name) = &patcher.client_name {
            self.client_name.clone_from(client_name);
        }
        if let Some(client_phone) = &patcher.client_phone {
            self.client_phone.clone_from(client_phone);
        }
        if let Some(address) = &patcher.address {
            self.address.clone_from(address);
        }
        if let Some(client_description) = &patcher.client_description {
            self.client_description.clone_from(client_description);
        }
        if let Some(employee_description) = &patcher.employee_description {
            self.employee_description.clone_from(employee_description);
        }
        Ok(())
    }
}
