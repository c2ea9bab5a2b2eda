// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated tracking tokens.
pub const PUBLIC_LINK_LENGTH: usize = 12;

/// Generates a random alphanumeric tracking token.
///
/// Not suitable as a secret: the generator is not cryptographic and
/// uniqueness is left to the store.
#[must_use]
pub fn generate_public_link() -> String {
    (0..PUBLIC_LINK_LENGTH)
        .map(|_| {
            #[allow(clippy::cast_possible_truncation)]
            let index = (rand::random::<u64>() % ALPHABET.len() as u64) as usize;
            char::from(ALPHABET[index])
        })
        .collect()
}
