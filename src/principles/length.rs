//! Length principle - minimum character count.

use super::Principle;

pub const MIN_LENGTH: usize = 6;

/// Builds the length principle: satisfied when the password has at least
/// `min` characters (inclusive boundary, counted in chars rather than
/// bytes).
pub fn length_principle(min: usize) -> Principle {
    Principle::new(format!("{min}+ characters"), move |pwd: &str| {
        pwd.chars().count() >= min
    })
}
