// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Why a phone number could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    #[error("phone number contains characters other than digits and separators")]
    NonDigit,
    #[error("phone number must have 7 or 11 digits, found {digits}")]
    InvalidLength { digits: usize },
}

/// Normalizes a client phone number.
///
/// Spaces, parentheses, hyphens and `+` are stripped. A 7-digit local
/// number is returned as-is. An 11-digit number is returned in
/// international form: a leading `8` becomes `7` and a `+` is prepended.
///
/// # Errors
///
/// Returns an error if anything other than digits remains after
/// stripping, or if the digit count is neither 7 nor 11.
pub fn normalize_phone_number(raw: &str) -> Result<String, PhoneNumberError> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')' | '-' | '+'))
        .collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(PhoneNumberError::NonDigit);
    }

    match digits.len() {
        7 => Ok(digits),
        11 => match digits.strip_prefix('8') {
            Some(rest) => Ok(format!("+7{rest}")),
            None => Ok(format!("+{digits}")),
        },
        n => Err(PhoneNumberError::InvalidLength { digits: n }),
    }
}
