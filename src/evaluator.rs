//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::principles::PrincipleSet;
use crate::types::EvaluationResult;

/// Evaluates a password against a principle set.
///
/// Applies every principle's predicate to the password, counts the ones
/// that hold, and derives the percent satisfied. Pure and deterministic:
/// the same `(password, principles)` pair always produces the same result,
/// and nothing is cached between calls.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `principles` - The configured principle set
///
/// # Returns
/// An `EvaluationResult` with the satisfied count, the set size, and the
/// percent satisfied. The tier follows via [`EvaluationResult::tier`].
pub fn evaluate(password: &SecretString, principles: &PrincipleSet) -> EvaluationResult {
    let pwd = password.expose_secret();

    let satisfied = principles.iter().filter(|p| p.is_satisfied_by(pwd)).count();
    let total = principles.len();
    let percent = satisfied as f64 / total as f64 * 100.0;

    EvaluationResult {
        satisfied,
        total,
        percent,
    }
}

/// Async version that sends the evaluation result via channel.
///
/// Debounces keystrokes: sleeps briefly, then checks the cancellation token
/// so a newer keystroke can drop this evaluation before it runs. Nothing is
/// sent when the token was cancelled.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    principles: &PrincipleSet,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation superseded by a newer keystroke");
        return;
    }

    let result = evaluate(password, principles);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principles::{
        PrincipleSet, digit_principle, length_principle, special_char_principle,
    };
    use crate::types::Tier;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_empty_password() {
        let principles = PrincipleSet::default();
        let result = evaluate(&secret(""), &principles);

        assert_eq!(result.satisfied, 0);
        assert_eq!(result.total, 3);
        assert_eq!(result.percent, 0.0);
        assert_eq!(result.tier(), Tier::Low);
    }

    #[test]
    fn test_evaluate_all_principles_satisfied() {
        let principles = PrincipleSet::default();
        let result = evaluate(&secret("abcdef1!"), &principles);

        assert_eq!(result.satisfied, 3);
        assert_eq!(result.percent, 100.0);
        assert_eq!(result.tier(), Tier::High);
    }

    #[test]
    fn test_evaluate_length_only() {
        // "abcdef" satisfies the length principle alone: one of three.
        let principles = PrincipleSet::default();
        let result = evaluate(&secret("abcdef"), &principles);

        assert_eq!(result.satisfied, 1);
        assert!((result.percent - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.tier(), Tier::Low);
    }

    #[test]
    fn test_evaluate_two_of_three() {
        // Length and digit, no special character.
        let principles = PrincipleSet::default();
        let result = evaluate(&secret("abcdef1"), &principles);

        assert_eq!(result.satisfied, 2);
        assert!((result.percent - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.tier(), Tier::Medium);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let principles = PrincipleSet::default();
        let first = evaluate(&secret("MyPass1!"), &principles);
        let second = evaluate(&secret("MyPass1!"), &principles);
        assert_eq!(first, second);
    }

    #[test]
    fn test_satisfied_count_monotonic_under_qualifying_appends() {
        // Each appended character can only satisfy more principles; the
        // count never regresses along the way.
        let principles = PrincipleSet::default();
        let steps = [
            "", "a", "ab", "abc", "abcd", "abcde", "abcdef", "abcdef1", "abcdef1!",
        ];

        let mut previous = 0;
        for step in steps {
            let result = evaluate(&secret(step), &principles);
            assert!(
                result.satisfied >= previous,
                "satisfied count regressed at '{}': {} < {}",
                step,
                result.satisfied,
                previous
            );
            previous = result.satisfied;
        }
        assert_eq!(previous, 3);
    }

    #[test]
    fn test_principle_order_does_not_affect_percent() {
        let forward = PrincipleSet::new(vec![
            length_principle(6),
            digit_principle(),
            special_char_principle(),
        ])
        .unwrap();
        let reversed = PrincipleSet::new(vec![
            special_char_principle(),
            digit_principle(),
            length_principle(6),
        ])
        .unwrap();

        for pwd in ["", "abcdef", "abcdef1", "abcdef1!", "x!", "1234567"] {
            let a = evaluate(&secret(pwd), &forward);
            let b = evaluate(&secret(pwd), &reversed);
            assert_eq!(a.percent, b.percent, "order changed percent for '{}'", pwd);
        }
    }

    #[test]
    fn test_evaluate_custom_single_principle() {
        let principles = PrincipleSet::new(vec![length_principle(12)]).unwrap();

        let short = evaluate(&secret("tooshort"), &principles);
        assert_eq!(short.percent, 0.0);

        let long = evaluate(&secret("longenoughpwd"), &principles);
        assert_eq!(long.percent, 100.0);
        assert_eq!(long.tier(), Tier::High);
    }
}
