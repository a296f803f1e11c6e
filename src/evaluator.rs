//! Password evaluator - hints and scores.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::Blacklist;
use crate::name::validate_name;
use crate::rules::{Candidate, RULES};
use crate::types::{HintResult, PasswordEvaluation, StrengthScore};

/// Delay before a keystroke-triggered evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates passwords against [`RULES`].
///
/// The evaluator holds configuration only. Its output depends on nothing
/// but that configuration and the password.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    blacklist: Option<Blacklist>,
}

impl Evaluator {
    /// Evaluator without a blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator whose `notCommon` rule rejects passwords in `blacklist`.
    pub fn with_blacklist(blacklist: Blacklist) -> Self {
        Self {
            blacklist: Some(blacklist),
        }
    }

    pub fn blacklist(&self) -> Option<&Blacklist> {
        self.blacklist.as_ref()
    }

    /// Runs every rule and computes entropy and redundancy.
    ///
    /// Never fails: an empty password yields all hints unsatisfied and an
    /// entropy of 0.
    pub fn evaluate(&self, password: &SecretString) -> PasswordEvaluation {
        let candidate = Candidate::new(password.expose_secret(), self.blacklist.as_ref());

        let mut entropy = 0u32;
        let mut any_satisfied = false;
        let hints: Vec<HintResult> = RULES
            .iter()
            .map(|rule| {
                let satisfied = rule.is_satisfied(&candidate);
                if satisfied {
                    any_satisfied = true;
                    entropy += rule.weight();
                } else {
                    entropy += rule.partial_credit(&candidate);
                }
                HintResult {
                    rule: rule.id(),
                    label: rule.label(),
                    satisfied,
                }
            })
            .collect();

        if !any_satisfied {
            entropy = 0;
        }

        let score = StrengthScore {
            entropy: entropy.min(100) as u8,
            redundancy: candidate.redundancy(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            entropy = score.entropy,
            redundancy = score.redundancy,
            unsatisfied = hints.iter().filter(|h| !h.satisfied).count(),
            "password evaluated"
        );

        PasswordEvaluation { hints, score }
    }

    /// True iff the name is valid and the password satisfies every rule.
    pub fn can_submit(&self, name: &str, password: &SecretString) -> bool {
        validate_name(name).is_valid() && self.evaluate(password).all_satisfied()
    }
}

/// Evaluates a password with the default rules and no blacklist.
///
/// # Returns
/// A `PasswordEvaluation` with ordered hints, entropy and redundancy.
pub fn evaluate_password(password: &SecretString) -> PasswordEvaluation {
    Evaluator::new().evaluate(password)
}

/// Debounced evaluation for keystroke-driven UIs.
///
/// Waits [`DEBOUNCE`], then evaluates and sends the result. Cancelling
/// `token` ends the wait immediately and nothing is sent. Callers cancel the
/// previous token on every new input so only the most recent one produces a
/// result.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    evaluator: &Evaluator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded, dropping");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluator.evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use std::time::Duration;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_tx(&Evaluator::new(), &secret("AbcdEf12!@34"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.entropy(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_tx(&Evaluator::new(), &secret("abc"), token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_ends_debounce_early() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let start = tokio::time::Instant::now();

        let pending = {
            let token = token.clone();
            tokio::spawn(async move {
                evaluate_password_tx(&Evaluator::new(), &secret("abc"), token, tx).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
        pending.await.expect("task should finish");

        assert!(start.elapsed() < DEBOUNCE);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_most_recent_input_wins() {
        let (tx, mut rx) = mpsc::channel(2);
        let evaluator = Evaluator::new();
        let first = CancellationToken::new();
        let second = CancellationToken::new();

        let stale = {
            let evaluator = evaluator.clone();
            let tx = tx.clone();
            let token = first.clone();
            tokio::spawn(async move {
                evaluate_password_tx(&evaluator, &secret("abc"), token, tx).await;
            })
        };
        tokio::task::yield_now().await;
        first.cancel();
        evaluate_password_tx(&evaluator, &secret("AbcdEf12!@34"), second, tx).await;
        stale.await.expect("task should finish");

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.entropy(), 100);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // must not panic
        evaluate_password_tx(&Evaluator::new(), &secret("abc"), CancellationToken::new(), tx).await;
    }
}
