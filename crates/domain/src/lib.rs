// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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
mod lifecycle;
mod phone;
mod public_link;
mod schedule;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{DomainError, ErrorKind, Field};
pub use lifecycle::create_new_order;
pub use phone::{PhoneNumberError, normalize_phone_number};
pub use public_link::{PUBLIC_LINK_LENGTH, generate_public_link};
pub use schedule::{ScheduleError, must_not_be_past};
pub use status::{OrderStatus, UnknownStatusError};
pub use types::{Employee, Order, OrderPatcher, PrimaryOrder};
