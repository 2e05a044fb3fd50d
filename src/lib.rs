//! Principle-based password strength evaluation library
//!
//! This library evaluates a password against an ordered set of named
//! principles (rules with an evaluable predicate), derives the percent of
//! principles satisfied, and classifies the result into a display tier.
//! Display-state helpers for a checklist, a progress bar and an entry
//! field are included; actual rendering is left to the caller.
//!
//! # Features
//!
//! - `async` (default): Enables debounced result delivery over a channel
//!   with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{PrincipleSet, Tier, evaluate};
//! use secrecy::SecretString;
//!
//! // The built-in principles: 6+ chars, a digit, a special character.
//! let principles = PrincipleSet::default();
//!
//! let password = SecretString::new("hunter2!".to_string().into());
//! let result = evaluate(&password, &principles);
//!
//! println!("Satisfied: {}/{}", result.satisfied, result.total);
//! assert_eq!(result.percent, 100.0);
//! assert_eq!(result.tier(), Tier::High);
//! ```

// Internal modules
mod evaluator;
mod meter;
mod principles;
mod types;

// Public API
pub use evaluator::evaluate;
pub use meter::{ChecklistEntry, Progress, checklist, field_validation, progress};
pub use principles::{
    MIN_LENGTH, Principle, PrincipleSet, PrincipleSetError, digit_principle, length_principle,
    special_char_principle,
};
pub use types::{EvaluationResult, HIGH_FLOOR, MEDIUM_FLOOR, Tier};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
