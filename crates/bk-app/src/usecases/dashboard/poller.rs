use std::future::Future;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info_span, warn, Instrument};

use bk_core::dashboard::DashboardWidget;
use bk_core::ports::ApiError;

use super::query_cache::QueryCache;

/// Fetch once and record the outcome in `cache`.
pub async fn refresh_once<T, F, Fut>(widget: DashboardWidget, cache: &QueryCache<T>, fetch: &F)
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    cache.begin_fetch();
    let result = fetch().await.map_err(|err| {
        warn!(widget = widget.query_key(), error = %err, "widget fetch failed");
        err.display_message(widget.fallback_message())
    });
    if result.is_ok() {
        debug!(widget = widget.query_key(), "widget refreshed");
    }
    cache.resolve(result);
}

/// Handle to a widget's polling task. Dropping it aborts the task.
pub struct PollerHandle {
    widget: DashboardWidget,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Poll `fetch` every `widget.refresh_interval()`, starting immediately.
    pub fn spawn<T, F, Fut>(widget: DashboardWidget, cache: QueryCache<T>, fetch: F) -> Self
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let period = widget.refresh_interval();
        let span = info_span!("usecase.dashboard.poll", widget = widget.query_key());
        let task = tokio::spawn(
            async move {
                let mut ticker = interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    refresh_once(widget, &cache, &fetch).await;
                }
            }
            .instrument(span),
        );
        Self { widget, task }
    }

    pub fn widget(&self) -> DashboardWidget {
        self.widget
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn counting_fetch(
        calls: Arc<AtomicUsize>,
    ) -> impl Fn() -> std::future::Ready<Result<usize, ApiError>> + Send + Sync + 'static {
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(Ok(n))
        }
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn polls_immediately_then_on_interval() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = QueryCache::new(DashboardWidget::CashFlow.query_key());
        let _handle = PollerHandle::spawn(
            DashboardWidget::CashFlow,
            cache.clone(),
            counting_fetch(calls.clone()),
        );

        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.snapshot().data, Some(1));

        tokio::time::advance(Duration::from_secs(59)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_stops_polling_but_keeps_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = QueryCache::new(DashboardWidget::Recommendations.query_key());
        let handle = PollerHandle::spawn(
            DashboardWidget::Recommendations,
            cache.clone(),
            counting_fetch(calls.clone()),
        );
        settle().await;
        drop(handle);

        tokio::time::advance(Duration::from_secs(600)).await;
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.snapshot().data, Some(1));
    }

    #[tokio::test]
    async fn refresh_failure_uses_widget_fallback() {
        let cache = QueryCache::<u32>::new(DashboardWidget::HealthStatus.query_key());
        let fetch = || async {
            Err::<u32, _>(ApiError::Status {
                status: 503,
                message: None,
            })
        };

        refresh_once(DashboardWidget::HealthStatus, &cache, &fetch).await;

        assert_eq!(
            cache.snapshot().error.as_deref(),
            Some("Failed to load health status")
        );
    }
}
