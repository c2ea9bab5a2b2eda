// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are generic over the storage ports so they run unchanged
//! against `SQLite` or an in-memory store.

use svc_orders::{Command, CoreError, EmployeeRepository, OrderService, OrderStore};
use svc_orders_audit::{Actor, Cause};
use svc_orders_domain::{Order, OrderPatcher, PrimaryOrder};
use tracing::{error, info, warn};

use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    CancelRequest, CreateEmployeeRequest, CreateEmployeeResponse, CreateOrderRequest,
    CreateOrderResponse, EmployeeInfo, HistoryEntryInfo, ListEmployeesResponse,
    ListOrdersResponse, OrderHistoryResponse, OrderInfo, PatchOrderRequest, ProgressRequest,
    PublicOrderView, ScheduleRequest,
};

/// Logs a failed operation at a level matching its cause and translates it.
fn reject(action: &str, order_id: Option<i64>, err: CoreError) -> ApiError {
    match &err {
        CoreError::Repository(repo_err) => {
            error!(action, ?order_id, error = %repo_err, "Storage failure");
        }
        other => {
            warn!(action, ?order_id, error = %other, "Operation rejected");
        }
    }
    translate_core_error(err)
}

/// Applies one lifecycle command and returns the updated order.
fn run_command<S>(
    store: &mut S,
    order_id: i64,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let action: &'static str = command.name();
    let order: Order = OrderService::new(store)
        .execute(order_id, command, actor, cause)
        .map_err(|e| reject(action, Some(order_id), e))?;

    info!(order_id, action, status = %order.status, "Order transitioned");
    OrderInfo::try_from(order)
}

/// Creates a new order from client input.
///
/// # Errors
///
/// Returns `InvalidInput` if a required field is empty or the phone number
/// is malformed, or `Internal` if the order cannot be stored.
pub fn create_order<S>(
    store: &mut S,
    request: CreateOrderRequest,
    actor: Actor,
    cause: Cause,
) -> Result<CreateOrderResponse, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let primary: PrimaryOrder = request.into();
    let order: Order = OrderService::new(store)
        .create(&primary, actor, cause)
        .map_err(|e| reject("Create", None, e))?;

    let id: i64 = order.order_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Stored order has no canonical ID"),
    })?;
    info!(order_id = id, "Order created");

    Ok(CreateOrderResponse {
        id,
        public_link: order.public_link,
    })
}

/// # Errors
///
/// Returns `Internal` if the store cannot be read.
pub fn list_orders<S>(store: &mut S) -> Result<ListOrdersResponse, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let orders: Vec<Order> = OrderService::new(store)
        .get_all()
        .map_err(|e| reject("ListOrders", None, e))?;

    let orders: Vec<OrderInfo> = orders
        .into_iter()
        .map(OrderInfo::try_from)
        .collect::<Result<_, _>>()?;

    Ok(ListOrdersResponse { orders })
}

/// # Errors
///
/// Returns `ResourceNotFound` if the order does not exist.
pub fn get_order<S>(store: &mut S, order_id: i64) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let order: Order = OrderService::new(store)
        .get_by_id(order_id)
        .map_err(|e| reject("GetOrder", Some(order_id), e))?;
    OrderInfo::try_from(order)
}

/// Overwrites the free-text fields present in the request.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the order does not exist, or
/// `DomainRuleViolation` if the order is paid or canceled.
pub fn patch_order<S>(
    store: &mut S,
    order_id: i64,
    request: PatchOrderRequest,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let patcher: OrderPatcher = request.into();
    run_command(store, order_id, Command::Patch { patcher }, actor, cause)
}

/// # Errors
///
/// Returns `InvalidInput` for a past date, or `DomainRuleViolation` if the
/// order's status does not allow prescheduling.
pub fn preschedule_order<S>(
    store: &mut S,
    order_id: i64,
    request: ScheduleRequest,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    run_command(
        store,
        order_id,
        Command::Preschedule {
            scheduled_for: request.scheduled_for,
        },
        actor,
        cause,
    )
}

/// Assigns a registered employee to the order.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the order or the employee does not exist,
/// or `DomainRuleViolation` for a new or canceled order.
pub fn assign_order<S>(
    store: &mut S,
    order_id: i64,
    employee_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let order: Order = OrderService::new(store)
        .assign(order_id, employee_id, actor, cause)
        .map_err(|e| reject("Assign", Some(order_id), e))?;

    info!(order_id, employee_id, status = %order.status, "Order transitioned");
    OrderInfo::try_from(order)
}

/// # Errors
///
/// Returns `InvalidInput` if the date is missing or in the past, or
/// `DomainRuleViolation` if the order's status does not allow scheduling.
pub fn schedule_order<S>(
    store: &mut S,
    order_id: i64,
    request: ScheduleRequest,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    run_command(
        store,
        order_id,
        Command::Schedule {
            scheduled_for: request.scheduled_for,
        },
        actor,
        cause,
    )
}

/// # Errors
///
/// Returns `DomainRuleViolation` unless the order is assigned, or
/// `InvalidInput` if it has no date to confirm.
pub fn confirm_schedule<S>(
    store: &mut S,
    order_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    run_command(store, order_id, Command::ConfirmSchedule, actor, cause)
}

/// # Errors
///
/// Returns `DomainRuleViolation` unless the order is scheduled.
pub fn progress_order<S>(
    store: &mut S,
    order_id: i64,
    request: ProgressRequest,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    run_command(
        store,
        order_id,
        Command::Progress {
            employee_description: request.employee_description,
        },
        actor,
        cause,
    )
}

/// # Errors
///
/// Returns `DomainRuleViolation` unless the order is in progress.
pub fn complete_order<S>(
    store: &mut S,
    order_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    run_command(store, order_id, Command::Complete, actor, cause)
}

/// # Errors
///
/// Returns `DomainRuleViolation` unless the order is done.
pub fn close_order<S>(
    store: &mut S,
    order_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    run_command(store, order_id, Command::Close, actor, cause)
}

/// # Errors
///
/// Returns `DomainRuleViolation` if the order is already paid or canceled.
pub fn cancel_order<S>(
    store: &mut S,
    order_id: i64,
    request: CancelRequest,
    actor: Actor,
    cause: Cause,
) -> Result<OrderInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    run_command(
        store,
        order_id,
        Command::Cancel {
            reason: request.cancel_reason,
        },
        actor,
        cause,
    )
}

/// # Errors
///
/// Returns `ResourceNotFound` if the order does not exist.
pub fn get_order_history<S>(store: &mut S, order_id: i64) -> Result<OrderHistoryResponse, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let events = OrderService::new(store)
        .history(order_id)
        .map_err(|e| reject("History", Some(order_id), e))?;

    Ok(OrderHistoryResponse {
        order_id,
        entries: events.into_iter().map(HistoryEntryInfo::from).collect(),
    })
}

/// Looks up an order by its public link for the client-facing tracker.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no order carries the link.
pub fn track_order<S>(store: &mut S, public_link: &str) -> Result<PublicOrderView, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let order: Order = OrderService::new(store)
        .get_by_public_link(public_link)
        .map_err(|e| reject("Track", None, e))?;
    Ok(PublicOrderView::from(&order))
}

/// # Errors
///
/// Returns `InvalidInput` for a blank name, or `Internal` if the employee
/// cannot be stored.
pub fn create_employee<S>(
    store: &mut S,
    request: &CreateEmployeeRequest,
) -> Result<CreateEmployeeResponse, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let employee = OrderService::new(store)
        .register_employee(&request.name)
        .map_err(|e| reject("CreateEmployee", None, e))?;

    info!(employee_id = employee.employee_id, "Employee created");
    Ok(CreateEmployeeResponse {
        id: employee.employee_id,
    })
}

/// # Errors
///
/// Returns `ResourceNotFound` if the employee does not exist.
pub fn get_employee<S>(store: &mut S, employee_id: i64) -> Result<EmployeeInfo, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    OrderService::new(store)
        .get_employee(employee_id)
        .map(EmployeeInfo::from)
        .map_err(|e| reject("GetEmployee", None, e))
}

/// # Errors
///
/// Returns `Internal` if the store cannot be read.
pub fn list_employees<S>(store: &mut S) -> Result<ListEmployeesResponse, ApiError>
where
    S: OrderStore + EmployeeRepository,
{
    let employees = OrderService::new(store)
        .list_employees()
        .map_err(|e| reject("ListEmployees", None, e))?;

    Ok(ListEmployeesResponse {
        employees: employees.into_iter().map(EmployeeInfo::from).collect(),
    })
}
