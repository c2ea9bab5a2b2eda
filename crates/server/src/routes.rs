// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP handlers for `/api/v1`.
//!
//! Each handler parses its inputs, takes the persistence lock and delegates
//! to the matching API function. Path ids and bodies are validated here so
//! malformed requests get the same JSON error body as domain failures.

use axum::{
    Json, Router,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use svc_orders_api::{
    CancelRequest, CreateEmployeeRequest, CreateEmployeeResponse, CreateOrderRequest,
    CreateOrderResponse, EmployeeInfo, ListEmployeesResponse, ListOrdersResponse,
    OrderHistoryResponse, OrderInfo, PatchOrderRequest, ProgressRequest, PublicOrderView,
    ScheduleRequest, assign_order, cancel_order, close_order, complete_order, confirm_schedule,
    create_employee, create_order, get_employee, get_order, get_order_history, list_employees,
    list_orders, patch_order, preschedule_order, progress_order, schedule_order, track_order,
};
use tracing::info;

use crate::AppState;
use crate::context::RequestContext;
use crate::error::{HttpError, parse_id};

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

async fn handle_list_orders(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListOrdersResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_orders(&mut *persistence)?))
}

async fn handle_create_order(
    AxumState(app_state): AxumState<AppState>,
    context: RequestContext,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), HttpError> {
    let Json(request) = payload?;
    info!(actor_id = %context.actor.id, "Handling create_order request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateOrderResponse =
        create_order(&mut *persistence, request, context.actor, context.cause)?;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_get_order(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_order(&mut *persistence, order_id)?))
}

async fn handle_patch_order(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    context: RequestContext,
    payload: Result<Json<PatchOrderRequest>, JsonRejection>,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    let Json(request) = payload?;
    info!(order_id, actor_id = %context.actor.id, "Handling patch request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(patch_order(
        &mut *persistence,
        order_id,
        request,
        context.actor,
        context.cause,
    )?))
}

/// The body is optional; without one the order is prescheduled with no date.
async fn handle_preschedule(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    context: RequestContext,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    let request: ScheduleRequest = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => ScheduleRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    info!(order_id, actor_id = %context.actor.id, "Handling preschedule request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(preschedule_order(
        &mut *persistence,
        order_id,
        request,
        context.actor,
        context.cause,
    )?))
}

async fn handle_assign(
    AxumState(app_state): AxumState<AppState>,
    Path((raw_id, raw_employee_id)): Path<(String, String)>,
    context: RequestContext,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    let employee_id: i64 = parse_id(&raw_employee_id, "employee")?;
    info!(order_id, employee_id, actor_id = %context.actor.id, "Handling assign request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(assign_order(
        &mut *persistence,
        order_id,
        employee_id,
        context.actor,
        context.cause,
    )?))
}

async fn handle_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    context: RequestContext,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    let Json(request) = payload?;
    info!(order_id, actor_id = %context.actor.id, "Handling schedule request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(schedule_order(
        &mut *persistence,
        order_id,
        request,
        context.actor,
        context.cause,
    )?))
}

async fn handle_confirm_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    context: RequestContext,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    info!(order_id, actor_id = %context.actor.id, "Handling confirm_schedule request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(confirm_schedule(
        &mut *persistence,
        order_id,
        context.actor,
        context.cause,
    )?))
}

async fn handle_progress(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    context: RequestContext,
    payload: Result<Json<ProgressRequest>, JsonRejection>,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    let Json(request) = payload?;
    info!(order_id, actor_id = %context.actor.id, "Handling progress request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(progress_order(
        &mut *persistence,
        order_id,
        request,
        context.actor,
        context.cause,
    )?))
}

async fn handle_complete(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    context: RequestContext,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    info!(order_id, actor_id = %context.actor.id, "Handling complete request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(complete_order(
        &mut *persistence,
        order_id,
        context.actor,
        context.cause,
    )?))
}

async fn handle_close(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    context: RequestContext,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    info!(order_id, actor_id = %context.actor.id, "Handling close request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(close_order(
        &mut *persistence,
        order_id,
        context.actor,
        context.cause,
    )?))
}

async fn handle_cancel(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    context: RequestContext,
    payload: Result<Json<CancelRequest>, JsonRejection>,
) -> Result<Json<OrderInfo>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    let Json(request) = payload?;
    info!(order_id, actor_id = %context.actor.id, "Handling cancel request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(cancel_order(
        &mut *persistence,
        order_id,
        request,
        context.actor,
        context.cause,
    )?))
}

async fn handle_order_history(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<OrderHistoryResponse>, HttpError> {
    let order_id: i64 = parse_id(&raw_id, "order")?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_order_history(&mut *persistence, order_id)?))
}

async fn handle_track(
    AxumState(app_state): AxumState<AppState>,
    Path(public_link): Path<String>,
) -> Result<Json<PublicOrderView>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(track_order(&mut *persistence, &public_link)?))
}

async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_employees(&mut *persistence)?))
}

async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateEmployeeResponse>), HttpError> {
    let Json(request) = payload?;
    let mut persistence = app_state.persistence.lock().await;
    let response: CreateEmployeeResponse = create_employee(&mut *persistence, &request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    let employee_id: i64 = parse_id(&raw_id, "employee")?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_employee(&mut *persistence, employee_id)?))
}

/// Builds the `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handle_health))
        .route("/orders", get(handle_list_orders).post(handle_create_order))
        .route("/orders/{id}", get(handle_get_order).patch(handle_patch_order))
        .route("/orders/{id}/preschedule", patch(handle_preschedule))
        .route("/orders/{id}/assign/{employee_id}", patch(handle_assign))
        .route("/orders/{id}/schedule", patch(handle_schedule))
        .route("/orders/{id}/confirm_schedule", patch(handle_confirm_schedule))
        .route("/orders/{id}/progress", patch(handle_progress))
        .route("/orders/{id}/complete", patch(handle_complete))
        .route("/orders/{id}/close", patch(handle_close))
        .route("/orders/{id}/cancel", patch(handle_cancel))
        .route("/orders/{id}/history", get(handle_order_history))
        .route("/track/{public_link}", get(handle_track))
        .route(
            "/employees",
            get(handle_list_employees).post(handle_create_employee),
        )
        .route("/employees/{id}", get(handle_get_employee))
}
