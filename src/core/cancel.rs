//! Cooperative cancellation for in-flight requests
//!
//! A [`CancellationSource`] is held by the view that issued requests; each
//! request receives a [`CancellationToken`]. When the view goes away it calls
//! [`CancellationSource::cancel`] and pending requests resolve as cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

struct CancellationInner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// The control handle that triggers cancellation
///
/// Dropping the source does not cancel its tokens.
pub struct CancellationSource {
    inner: Arc<CancellationInner>,
}

/// A cloneable signal observed by requests
#[derive(Clone)]
pub struct CancellationToken {
    inner: Arc<CancellationInner>,
}

impl CancellationSource {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CancellationInner {
                cancelled: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        }
    }

    /// Obtain a token observing this source
    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Signal cancellation to every token and wake pending waiters
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CancellationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationSource")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl CancellationToken {
    /// A token that is never cancelled
    pub fn none() -> Self {
        CancellationSource::new().token()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Resolve once cancellation has been requested
    pub async fn cancelled(&self) {
        loop {
            // Register before checking the flag so a concurrent cancel is not missed.
            let notified = self.inner.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

impl std::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_tokens_observe_source() {
        let source = CancellationSource::new();
        let token = source.token();
        let clone = token.clone();
        assert!(!token.is_cancelled());

        source.cancel();
        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
        assert!(source.is_cancelled());
    }

    #[test]
    fn test_drop_does_not_cancel() {
        let token = {
            let source = CancellationSource::new();
            source.token()
        };
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_wakes_pending_waiter() {
        let source = CancellationSource::new();
        let token = source.token();

        let waiter = tokio::spawn(async move { token.cancelled().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        source.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancelled_returns_immediately_when_already_cancelled() {
        let source = CancellationSource::new();
        source.cancel();
        tokio::time::timeout(Duration::from_millis(100), source.token().cancelled())
            .await
            .expect("already cancelled");
    }
}
