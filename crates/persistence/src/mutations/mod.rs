// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `orders` - insert and overwrite orders
//! - `employees` - add employees
//! - `history` - append order events
//! - `transition` - order write plus history entry in one transaction

pub mod employees;
pub mod history;
pub mod orders;
pub mod transition;

pub use transition::{persist_creation, persist_transition};
