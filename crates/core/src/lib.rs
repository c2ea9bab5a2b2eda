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

mod apply;
mod command;
mod error;
mod repository;
mod service;
mod state;

#[cfg(test)]
mod tests;

pub use apply::{apply, apply_create};
pub use command::Command;
pub use error::CoreError;
pub use repository::{EmployeeRepository, OrderHistory, OrderRepository, OrderStore, RepositoryError};
pub use service::OrderService;
pub use state::{CreationResult, TransitionResult};
