//! Password quality principles
//!
//! Each principle is a named rule with an independently evaluable predicate.
//! The built-in rules live one per file; callers may override the whole set.

mod digit;
mod length;
mod special;

pub use digit::digit_principle;
pub use length::{MIN_LENGTH, length_principle};
pub use special::special_char_principle;

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// A named password-quality rule.
///
/// The predicate reads the password and reports whether the rule holds; it
/// never mutates anything. Predicate panics propagate to the caller.
pub struct Principle {
    label: Cow<'static, str>,
    predicate: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl Principle {
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The checklist label for this rule.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Applies the rule's predicate to a password.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

impl fmt::Debug for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principle")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrincipleSetError {
    #[error("Principle set must contain at least one principle")]
    Empty,
}

/// An ordered, non-empty set of principles.
///
/// Order determines checklist display order only, never the score. The set
/// is immutable once constructed; callers override it wholesale by building
/// a new one.
pub struct PrincipleSet {
    principles: Vec<Principle>,
}

impl PrincipleSet {
    /// Builds a set from the given principles.
    ///
    /// # Errors
    ///
    /// Returns [`PrincipleSetError::Empty`] if `principles` is empty. An
    /// empty set would make the percent calculation divide by zero, so it
    /// is rejected up front instead of producing NaN at evaluation time.
    pub fn new(principles: Vec<Principle>) -> Result<Self, PrincipleSetError> {
        if principles.is_empty() {
            return Err(PrincipleSetError::Empty);
        }
        Ok(Self { principles })
    }

    /// Number of principles in the set. Always at least 1.
    pub fn len(&self) -> usize {
        self.principles.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Principle> {
        self.principles.iter()
    }
}

impl fmt::Debug for PrincipleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.principles.iter()).finish()
    }
}

/// The built-in rules: 6+ characters, at least one digit, at least one
/// special character.
impl Default for PrincipleSet {
    fn default() -> Self {
        Self {
            principles: vec![
                length_principle(MIN_LENGTH),
                digit_principle(),
                special_char_principle(),
            ],
        }
    }
}
