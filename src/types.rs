//! Evaluation result and tier classification types.

/// Tier boundaries, in percent. Each tier is inclusive on its lower bound.
pub const MEDIUM_FLOOR: f64 = 33.4;
pub const HIGH_FLOOR: f64 = 66.7;

/// Strength tier derived from the percent of principles satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    /// Classifies a percent-satisfied value into a tier.
    ///
    /// - `percent < 33.4` → `Low`
    /// - `33.4 <= percent < 66.7` → `Medium`
    /// - `percent >= 66.7` → `High`
    pub fn from_percent(percent: f64) -> Self {
        if percent >= HIGH_FLOOR {
            Tier::High
        } else if percent >= MEDIUM_FLOOR {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    /// Validation state for the password entry field.
    pub fn field_style(&self) -> &'static str {
        match self {
            Tier::Low => "error",
            Tier::Medium => "warning",
            Tier::High => "success",
        }
    }

    /// Style for the proportional progress bar. Differs from the field
    /// style only in the low tier ("danger" vs "error").
    pub fn bar_style(&self) -> &'static str {
        match self {
            Tier::Low => "danger",
            Tier::Medium => "warning",
            Tier::High => "success",
        }
    }
}

/// Satisfaction summary for a password against a principle set.
///
/// Derived fresh on every evaluation, never cached. Invariant:
/// `percent == 100.0 * satisfied as f64 / total as f64`, with `total >= 1`
/// guaranteed by [`PrincipleSet`](crate::PrincipleSet) construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationResult {
    /// Number of principles whose predicate held.
    pub satisfied: usize,
    /// Number of principles in the set.
    pub total: usize,
    /// Percent of principles satisfied, in `[0, 100]`.
    pub percent: f64,
}

impl EvaluationResult {
    /// The tier this result falls into.
    pub fn tier(&self) -> Tier {
        Tier::from_percent(self.percent)
    }
}
