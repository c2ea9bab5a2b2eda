// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("date {date} is in the past")]
    DateInPast { date: OffsetDateTime },
}

/// Checks that `date` is not earlier than `now`.
///
/// # Errors
///
/// Returns `ScheduleError::DateInPast` if `date` precedes `now`.
pub fn must_not_be_past(date: OffsetDateTime, now: OffsetDateTime) -> Result<(), ScheduleError> {
    if date < now {
        return Err(ScheduleError::DateInPast { date });
    }
    Ok(())
}
