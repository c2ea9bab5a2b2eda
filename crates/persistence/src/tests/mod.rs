// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod order_tests;

use crate::Persistence;
use svc_orders::{CreationResult, apply_create};
use svc_orders_audit::{Actor, Cause};
use svc_orders_domain::PrimaryOrder;
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("test-actor"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn create_test_primary_order() -> PrimaryOrder {
    PrimaryOrder {
        client_name: String::from("Client"),
        client_phone: String::from("8(111)222-33-44"),
        address: String::from("1 Main Street"),
        client_description: String::from("Washing machine leaks"),
    }
}

/// A whole-second date far enough ahead to never be in the past.
pub const fn future_date() -> OffsetDateTime {
    datetime!(2099-03-15 10:30 UTC)
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_creation_result() -> CreationResult {
    apply_create(
        &create_test_primary_order(),
        create_test_actor(),
        create_test_cause(),
    )
    .expect("Valid primary order")
}

/// Stores a fresh order and returns its id.
pub fn store_test_order(persistence: &mut Persistence) -> i64 {
    persistence
        .persist_creation(&create_creation_result())
        .expect("Failed to store order")
}
