//! Digit principle - at least one `[0-9]` character.

use super::Principle;

/// Builds the digit principle: satisfied when the password contains at
/// least one ASCII digit.
pub fn digit_principle() -> Principle {
    Principle::new("with at least one digit", |pwd: &str| {
        pwd.chars().any(|c| c.is_ascii_digit())
    })
}
