//! Display-state bindings for the two presentational surfaces.
//!
//! The renderers themselves live outside this crate; these helpers derive
//! the state they bind to: a checklist entry per principle, the progress
//! bar value and style, and the entry field validation state.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate;
use crate::principles::PrincipleSet;

/// One checklist row: a principle's label and whether the current password
/// satisfies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub label: String,
    pub satisfied: bool,
}

impl ChecklistEntry {
    /// Text style for this row.
    pub fn style(&self) -> &'static str {
        if self.satisfied {
            "text-success"
        } else {
            "text-danger"
        }
    }
}

/// Proportional progress indicator state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Bar position: the percent of principles satisfied.
    pub now: f64,
    /// Bar style per tier.
    pub style: &'static str,
}

/// Derives the checklist, one entry per principle in set order.
pub fn checklist(password: &SecretString, principles: &PrincipleSet) -> Vec<ChecklistEntry> {
    let pwd = password.expose_secret();
    principles
        .iter()
        .map(|p| ChecklistEntry {
            label: p.label().to_string(),
            satisfied: p.is_satisfied_by(pwd),
        })
        .collect()
}

/// Derives the progress bar state.
pub fn progress(password: &SecretString, principles: &PrincipleSet) -> Progress {
    let result = evaluate(password, principles);
    Progress {
        now: result.percent,
        style: result.tier().bar_style(),
    }
}

/// Derives the entry field validation state ("error", "warning" or
/// "success").
pub fn field_validation(password: &SecretString, principles: &PrincipleSet) -> &'static str {
    evaluate(password, principles).tier().field_style()
}
