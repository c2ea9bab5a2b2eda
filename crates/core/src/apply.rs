// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CreationResult, TransitionResult};
use svc_orders_audit::{Action, Actor, AuditEvent, Cause, OrderSnapshot};
use svc_orders_domain::{Order, PrimaryOrder, create_new_order};

/// Creates a new order from client input.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the input fails validation.
pub fn apply_create(
    primary: &PrimaryOrder,
    actor: Actor,
    cause: Cause,
) -> Result<CreationResult, CoreError> {
    let order = create_new_order(primary)?;

    let action = Action::new(
        String::from("Create"),
        Some(format!("public link {}", order.public_link)),
    );
    let audit_event = AuditEvent::new(
        order.order_id,
        actor,
        cause,
        action,
        None,
        OrderSnapshot::of(&order),
    );

    Ok(CreationResult { order, audit_event })
}

/// Applies a command to an order.
///
/// This function is pure: the input order is never modified, and the
/// transitioned copy is returned together with its history entry.
///
/// # Arguments
///
/// * `order` - The current order
/// * `command` - The operation to apply
/// * `actor` - Who requested it
/// * `cause` - What triggered it
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the lifecycle rejects the
/// command. No history entry is produced in that case.
pub fn apply(
    order: &Order,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let action = Action::new(command.name().to_string(), command.details());
    let before = OrderSnapshot::of(order);

    let mut new_order = order.clone();
    match command {
        Command::Preschedule { scheduled_for } => new_order.preschedule(scheduled_for)?,
        Command::Assign { employee } => new_order.assign(employee)?,
        Command::Schedule { scheduled_for } => new_order.schedule(scheduled_for)?,
        Command::ConfirmSchedule => new_order.confirm_schedule()?,
        Command::Progress {
            employee_description,
        } => new_order.progress(employee_description)?,
        Command::Complete => new_order.complete()?,
        Command::Close => new_order.close()?,
        Command::Cancel { reason } => new_order.cancel(reason)?,
        Command::Patch { patcher } => new_order.patch(&patcher)?,
    }

    let audit_event = AuditEvent::new(
        order.order_id,
        actor,
        cause,
        action,
        Some(before),
        OrderSnapshot::of(&new_order),
    );

    Ok(TransitionResult {
        new_order,
        audit_event,
    })
}
