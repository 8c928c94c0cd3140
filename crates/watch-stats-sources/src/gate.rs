use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::error::SourceError;

/// Caps the number of metadata requests in flight. Clones share permits.
#[derive(Debug, Clone)]
pub struct RequestGate {
    permits: Arc<Semaphore>,
    limit: usize,
}

impl RequestGate {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            permits: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Wait for a permit, then drive `request` while holding it
    pub async fn run<F, T>(&self, request: F) -> Result<T, SourceError>
    where
        F: Future<Output = Result<T, SourceError>>,
    {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| SourceError::GateClosed)?;
        request.await
    }

    /// Reject all waiting and future requests
    pub fn close(&self) {
        self.permits.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_limits_requests_in_flight() {
        let gate = RequestGate::new(2);
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let requests = (0..6).map(|i| {
            let gate = gate.clone();
            let in_flight = in_flight.clone();
            let peak = peak.clone();
            async move {
                gate.run(async {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                    Ok::<_, SourceError>(i)
                })
                .await
            }
        });

        let results = futures::future::join_all(requests).await;
        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(peak.load(Ordering::SeqCst), 2);
        assert_eq!(gate.available(), 2);
    }

    #[tokio::test]
    async fn test_zero_limit_still_admits_one() {
        let gate = RequestGate::new(0);
        assert_eq!(gate.limit(), 1);
        let value = gate.run(async { Ok::<_, SourceError>(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_closed_gate_rejects() {
        let gate = RequestGate::new(1);
        gate.close();
        let result = gate.run(async { Ok::<_, SourceError>(()) }).await;
        assert!(matches!(result, Err(SourceError::GateClosed)));
    }
}
