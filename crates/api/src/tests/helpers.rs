// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use svc_orders_audit::{Actor, Cause};
use svc_orders_persistence::Persistence;
use time::{Duration, OffsetDateTime};

use crate::{CreateOrderRequest, CreateOrderResponse, create_order};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("dispatcher-7"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_valid_request() -> CreateOrderRequest {
    CreateOrderRequest {
        client_name: String::from("Client"),
        client_phone: String::from("8(111)222-33-44"),
        address: String::from("1 Main Street"),
        client_description: String::from("Dishwasher does not drain"),
    }
}

pub fn create_stored_order(persistence: &mut Persistence) -> CreateOrderResponse {
    create_order(
        persistence,
        create_valid_request(),
        create_test_actor(),
        create_test_cause(),
    )
    .expect("Valid order should be created")
}

pub fn future_date() -> OffsetDateTime {
    (OffsetDateTime::now_utc() + Duration::days(3))
        .replace_nanosecond(0)
        .expect("Valid nanosecond")
}

pub fn past_date() -> OffsetDateTime {
    OffsetDateTime::now_utc() - Duration::days(3)
}
