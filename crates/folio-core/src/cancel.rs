// crates/folio-core/src/cancel.rs
// Racing futures against a CancellationToken

use crate::error::{FolioError, Result};
use futures::future::{self, Either};
use tokio_util::sync::CancellationToken;

/// Drive `fut` unless `token` is cancelled first. Cancellation is checked
/// before the future on every poll.
pub async fn until_cancelled<F: Future>(token: &CancellationToken, fut: F) -> Result<F::Output> {
    let cancelled = token.cancelled();
    futures::pin_mut!(cancelled, fut);
    match future::select(cancelled, fut).await {
        Either::Left(_) => Err(FolioError::Cancelled),
        Either::Right((output, _)) => Ok(output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_until_cancelled_passes_output_through() {
        let token = CancellationToken::new();
        let out = until_cancelled(&token, async { 7 }).await.unwrap();
        assert_eq!(out, 7);
    }

    #[tokio::test]
    async fn test_until_cancelled_prefers_cancellation() {
        let token = CancellationToken::new();
        token.cancel();
        let err = until_cancelled(&token, async { 7 }).await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_until_cancelled_interrupts_pending_future() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        let (result, _) = futures::join!(
            until_cancelled(&token, std::future::pending::<()>()),
            async move {
                tokio::task::yield_now().await;
                trigger.cancel();
            }
        );
        assert!(matches!(result, Err(FolioError::Cancelled)));
    }

    #[tokio::test]
    async fn test_until_cancelled_ends_a_sleep() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        let sleep = tokio::time::sleep(std::time::Duration::from_secs(30));
        let (result, _) = futures::join!(until_cancelled(&token, sleep), async move {
            trigger.cancel();
        });
        assert!(result.is_err());
    }
}
