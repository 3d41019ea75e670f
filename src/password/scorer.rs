//! Runs a check set against a candidate password.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use super::{CheckSet, PasswordStrengthResult};

/// Scores `password` against `checks`.
///
/// Never fails; an empty password fails every default check.
pub fn score_password(password: &SecretString, checks: &CheckSet) -> PasswordStrengthResult {
    let pwd = password.expose_secret();

    let outcomes: Vec<(&'static str, bool)> = checks
        .iter()
        .map(|check| (check.name, check.passes(pwd)))
        .collect();
    let score = outcomes.iter().filter(|(_, ok)| *ok).count();

    PasswordStrengthResult {
        score,
        checks: outcomes,
    }
}

/// Scores `password` after `debounce` and sends the result on `tx`.
///
/// Nothing is sent when `token` is cancelled first, which is how a newer
/// keystroke supersedes this evaluation.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    checks: &CheckSet,
    debounce: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordStrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluation scheduled in {:?}", debounce);

    tokio::time::sleep(debounce).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("password evaluation superseded");
        return;
    }

    let result = score_password(password, checks);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_password_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        score_password_tx(
            &secret("Abcdef1!"),
            &CheckSet::default(),
            Duration::from_millis(300),
            token,
            tx,
        )
        .await;

        let result = rx.recv().await.expect("Should receive result");
        assert_eq!(result.score, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_evaluation_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        score_password_tx(
            &secret("Abcdef1!"),
            &CheckSet::default(),
            Duration::from_millis(300),
            token,
            tx,
        )
        .await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_keystroke_wins() {
        let (tx, mut rx) = mpsc::channel(2);
        let debounce = Duration::from_millis(300);

        let stale = CancellationToken::new();
        let stale_task = {
            let token = stale.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                score_password_tx(&secret("abc"), &CheckSet::default(), debounce, token, tx).await;
            })
        };

        // next keystroke lands while the first evaluation is still waiting
        tokio::time::advance(Duration::from_millis(100)).await;
        stale.cancel();
        let fresh_task = tokio::spawn(async move {
            score_password_tx(
                &secret("Abcdef1"),
                &CheckSet::default(),
                debounce,
                CancellationToken::new(),
                tx,
            )
            .await;
        });

        let result = rx.recv().await.expect("Should receive fresh result");
        assert_eq!(result.score, 4);

        stale_task.await.expect("stale evaluation panicked");
        fresh_task.await.expect("fresh evaluation panicked");
        assert!(rx.recv().await.is_none());
    }
}
