// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the service orders backend.
//!
//! Translates request DTOs into core commands, runs them through
//! [`svc_orders::OrderService`] and maps every failure to an [`ApiError`].
//! Transport concerns (routing, status codes, headers) live in the server.

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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    assign_order, cancel_order, close_order, complete_order, confirm_schedule, create_employee,
    create_order, get_employee, get_order, get_order_history, list_employees, list_orders,
    patch_order, preschedule_order, progress_order, schedule_order, track_order,
};
pub use request_response::{
    CancelRequest, CreateEmployeeRequest, CreateEmployeeResponse, CreateOrderRequest,
    CreateOrderResponse, EmployeeInfo, HistoryEntryInfo, ListEmployeesResponse,
    ListOrdersResponse, OrderHistoryResponse, OrderInfo, PatchOrderRequest, ProgressRequest,
    PublicOrderView, ScheduleRequest,
};
