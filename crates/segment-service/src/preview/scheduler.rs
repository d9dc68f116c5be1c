//! Debounced, cancellable preview requests.

use std::sync::Arc;
use std::time::Duration;

use segment_filter::WireFilter;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::{DateRange, PreviewConfig, PreviewRequest, PreviewService, TRACING_TARGET};

/// Latest preview result, as published to subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviewState {
    /// Nothing requested yet, or the pending request was cancelled.
    #[default]
    Idle,
    /// A request is waiting for the debounce window or the provider.
    Pending {
        /// Sequence number of the request.
        sequence: u64,
    },
    /// The most recent request completed.
    Ready {
        /// Sequence number of the request.
        sequence: u64,
        /// Visitors matching the filter.
        matching_count: u64,
    },
    /// The most recent request failed.
    Failed {
        /// Sequence number of the request.
        sequence: u64,
        /// Rendered provider error.
        message: String,
    },
}

impl PreviewState {
    /// Sequence number of the request this state describes.
    pub fn sequence(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Pending { sequence }
            | Self::Ready { sequence, .. }
            | Self::Failed { sequence, .. } => Some(*sequence),
        }
    }

    /// Returns `true` once the latest request has completed or failed.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready { .. } | Self::Failed { .. })
    }
}

/// Issues preview requests as the filter changes.
///
/// Each call to [`schedule`](Self::schedule) supersedes the previous one:
/// the older request is cancelled whether it is still debouncing or already
/// waiting on the provider, and only the newest request may publish a result.
#[derive(Debug)]
pub struct PreviewScheduler {
    service: PreviewService,
    config: PreviewConfig,
    sequence: u64,
    current: Option<CancellationToken>,
    state: Arc<watch::Sender<PreviewState>>,
}

impl PreviewScheduler {
    /// Creates a scheduler in the idle state.
    pub fn new(service: PreviewService, config: PreviewConfig) -> Self {
        let (state, _) = watch::channel(PreviewState::Idle);
        Self {
            service,
            config,
            sequence: 0,
            current: None,
            state: Arc::new(state),
        }
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<PreviewState> {
        self.state.subscribe()
    }

    /// Current state.
    pub fn state(&self) -> PreviewState {
        self.state.borrow().clone()
    }

    /// Sequence number of the most recent request, zero before the first.
    pub fn latest_sequence(&self) -> u64 {
        self.sequence
    }

    /// Schedules a preview of `filter`, superseding any earlier request.
    ///
    /// The provider is called once the debounce window has passed without a
    /// newer request. The returned handle completes when the request has
    /// published its result or was superseded.
    pub fn schedule(&mut self, filter: WireFilter, date_range: DateRange) -> JoinHandle<()> {
        self.sequence += 1;
        let token = CancellationToken::new();
        if let Some(previous) = self.current.replace(token.clone()) {
            previous.cancel();
        }
        self.state.send_replace(PreviewState::Pending {
            sequence: self.sequence,
        });

        let task = PreviewTask {
            service: self.service.clone(),
            state: self.state.clone(),
            debounce: self.config.debounce(),
            sequence: self.sequence,
            token,
        };
        tokio::spawn(task.run(PreviewRequest::new(filter, date_range)))
    }

    /// Cancels the pending request, if any, and returns to idle.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
        self.state.send_replace(PreviewState::Idle);
    }
}

impl Drop for PreviewScheduler {
    fn drop(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

struct PreviewTask {
    service: PreviewService,
    state: Arc<watch::Sender<PreviewState>>,
    debounce: Duration,
    sequence: u64,
    token: CancellationToken,
}

impl PreviewTask {
    async fn run(self, request: PreviewRequest) {
        tokio::select! {
            () = self.token.cancelled() => {
                tracing::trace!(
                    target: TRACING_TARGET,
                    sequence = self.sequence,
                    "Preview superseded while debouncing"
                );
                return;
            }
            () = tokio::time::sleep(self.debounce) => {}
        }

        let result = tokio::select! {
            () = self.token.cancelled() => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    sequence = self.sequence,
                    request_id = %request.request_id,
                    "Preview superseded in flight"
                );
                return;
            }
            result = self.service.count(&request) => result,
        };

        let next = match result {
            Ok(response) => PreviewState::Ready {
                sequence: self.sequence,
                matching_count: response.matching_count,
            },
            Err(error) => PreviewState::Failed {
                sequence: self.sequence,
                message: error.to_string(),
            },
        };

        // Only the request that is still pending may publish.
        let expected = PreviewState::Pending {
            sequence: self.sequence,
        };
        let published = self.state.send_if_modified(|current| {
            if *current != expected {
                return false;
            }
            *current = next;
            true
        });

        if !published {
            tracing::debug!(
                target: TRACING_TARGET,
                sequence = self.sequence,
                request_id = %request.request_id,
                "Discarded stale preview"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use jiff::civil::date;
    use segment_filter::wire::{WireTriple, WireValue};

    use super::*;
    use crate::preview::{PreviewProvider, PreviewResponse};
    use crate::{Error, ErrorKind, Result};

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        delay: Duration,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl PreviewProvider for CountingProvider {
        async fn count(&self, request: &PreviewRequest) -> Result<PreviewResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(Error::new(ErrorKind::ServiceUnavailable).with_message("backend down"));
            }
            let count = request.filter.condition_count() as u64 * 100;
            Ok(PreviewResponse::new(request.request_id, count))
        }
    }

    fn scheduler(delay: Duration, fail: bool) -> (PreviewScheduler, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CountingProvider {
            calls: calls.clone(),
            delay,
            fail,
        };
        let scheduler = PreviewScheduler::new(PreviewService::new(provider), PreviewConfig::default());
        (scheduler, calls)
    }

    fn filter(conditions: usize) -> WireFilter {
        let triples = (0..conditions)
            .map(|i| {
                WireTriple(
                    "is".into(),
                    "country".into(),
                    vec![WireValue::Text(format!("C{i}"))],
                )
            })
            .collect();
        WireFilter::Flat(triples)
    }

    fn range() -> DateRange {
        DateRange::day(date(2024, 3, 1))
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_coalesces_requests() {
        let (mut scheduler, calls) = scheduler(Duration::from_millis(50), false);
        let mut state = scheduler.subscribe();

        scheduler.schedule(filter(1), range());
        scheduler.schedule(filter(2), range());
        let last = scheduler.schedule(filter(3), range());
        assert_eq!(scheduler.state(), PreviewState::Pending { sequence: 3 });

        last.await.unwrap();
        let settled = state.wait_for(PreviewState::is_settled).await.unwrap().clone();
        assert_eq!(
            settled,
            PreviewState::Ready {
                sequence: 3,
                matching_count: 300,
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_request_supersedes_in_flight() {
        let (mut scheduler, calls) = scheduler(Duration::from_secs(1), false);

        let first = scheduler.schedule(filter(1), range());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let second = scheduler.schedule(filter(2), range());
        first.await.unwrap();
        assert_eq!(scheduler.state(), PreviewState::Pending { sequence: 2 });

        second.await.unwrap();
        assert_eq!(
            scheduler.state(),
            PreviewState::Ready {
                sequence: 2,
                matching_count: 200,
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(scheduler.latest_sequence(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_returns_to_idle() {
        let (mut scheduler, calls) = scheduler(Duration::from_millis(50), false);

        let task = scheduler.schedule(filter(1), range());
        scheduler.cancel();
        task.await.unwrap();

        assert_eq!(scheduler.state(), PreviewState::Idle);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_published() {
        let (mut scheduler, _) = scheduler(Duration::from_millis(50), true);

        scheduler.schedule(filter(1), range()).await.unwrap();
        let PreviewState::Failed { sequence, message } = scheduler.state() else {
            panic!("expected failed state");
        };
        assert_eq!(sequence, 1);
        assert!(message.contains("backend down"));
    }

    #[test]
    fn test_state_sequence() {
        assert_eq!(PreviewState::Idle.sequence(), None);
        assert_eq!(PreviewState::Pending { sequence: 4 }.sequence(), Some(4));
        assert!(!PreviewState::Pending { sequence: 4 }.is_settled());
        assert!(
            PreviewState::Failed {
                sequence: 1,
                message: String::new(),
            }
            .is_settled()
        );
    }
}
