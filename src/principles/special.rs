//! Special character principle - at least one character outside `[A-Za-z0-9]`.

use super::Principle;

/// Builds the special character principle: satisfied when the password
/// contains at least one character outside the ASCII-alphanumeric range.
pub fn special_char_principle() -> Principle {
    Principle::new("with at least one special character", |pwd: &str| {
        pwd.chars().any(|c| !c.is_ascii_alphanumeric())
    })
}
