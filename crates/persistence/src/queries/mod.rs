// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `orders` - orders joined with their assigned employee
//! - `employees` - the employee directory
//! - `history` - order history events

pub mod employees;
pub mod history;
pub mod orders;
