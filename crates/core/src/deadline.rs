//! Request-scoped deadline shared by every stage of one request.
//!
//! A [`Deadline`] is an absolute instant, not a per-stage timeout: the fetch
//! and persist stages receive the same value, so time spent fetching is time
//! the store write no longer has.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::errors::DeadlineExceeded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
        }
    }

    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    pub fn instant(&self) -> Instant {
        self.at
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Fails fast if the deadline already elapsed.
    pub fn check(&self) -> Result<(), DeadlineExceeded> {
        if self.is_expired() {
            Err(DeadlineExceeded)
        } else {
            Ok(())
        }
    }

    /// Drives `fut` until it completes or the deadline elapses.
    ///
    /// On expiry the future is dropped, which aborts whatever I/O it had in
    /// flight. An already-expired deadline never polls `fut` at all.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, DeadlineExceeded>
    where
        F: Future,
    {
        self.check()?;
        tokio::time::timeout_at(self.at, fut)
            .await
            .map_err(|_| DeadlineExceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_run_completes_within_budget() {
        let deadline = Deadline::after(Duration::from_millis(200));
        let value = deadline.run(async { 42 }).await;
        assert_eq!(value, Ok(42));
        assert!(!deadline.is_expired());
        assert!(deadline.remaining() <= Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_run_aborts_slow_future() {
        let deadline = Deadline::after(Duration::from_millis(20));
        let started = Instant::now();
        let result = deadline
            .run(sleep(Duration::from_secs(5)))
            .await;
        assert_eq!(result, Err(DeadlineExceeded));
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(deadline.is_expired());
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_expired_deadline_never_polls_future() {
        let deadline = Deadline::after(Duration::from_millis(5));
        sleep(Duration::from_millis(20)).await;

        let polled = AtomicBool::new(false);
        let result = deadline
            .run(async {
                polled.store(true, Ordering::SeqCst);
            })
            .await;

        assert_eq!(result, Err(DeadlineExceeded));
        assert!(!polled.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_shared_deadline_is_not_reset_between_stages() {
        let deadline = Deadline::after(Duration::from_millis(60));

        let first = deadline.run(sleep(Duration::from_millis(40))).await;
        assert!(first.is_ok());

        // Only ~20ms left: a second 40ms stage must not fit.
        let second = deadline.run(sleep(Duration::from_millis(40))).await;
        assert_eq!(second, Err(DeadlineExceeded));
    }
}
