// File: crates/dashboard/src/feed.rs
// Summary: MetricSource trait, mock source, cancellation token and time-bounded refresh.

//! Panel refresh
//!
//! A page asks a [`MetricSource`] for fresh values, bounded by a timeout and
//! abandoned when the page is unmounted. Stale values stay on screen when a
//! refresh fails.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bastion_chart::Series;
use chrono::Utc;
use tokio::sync::watch;

use crate::error::FeedError;
use crate::page::PageState;
use crate::panel::{PanelState, PanelStatus};

/// Anything that can produce the current series for a panel.
#[async_trait]
pub trait MetricSource: Send + Sync {
    async fn fetch(&self, panel_id: &str) -> Result<Vec<f64>, FeedError>;
}

/// Canned source with a fixed response delay.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    latency: Duration,
    data: HashMap<String, Vec<f64>>,
}

impl MockSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency, data: HashMap::new() }
    }

    pub fn with_series(mut self, panel_id: impl Into<String>, values: Vec<f64>) -> Self {
        self.data.insert(panel_id.into(), values);
        self
    }

    /// Source serving the page's own series advanced by one tick
    /// (oldest sample moved to the end).
    pub fn for_page(page: &PageState, latency: Duration) -> Self {
        let data = page
            .panels
            .iter()
            .map(|p| {
                let mut v = p.series.values().to_vec();
                if !v.is_empty() {
                    v.rotate_left(1);
                }
                (p.id.clone(), v)
            })
            .collect();
        Self { latency, data }
    }

    pub fn latency(&self) -> Duration { self.latency }
}

#[async_trait]
impl MetricSource for MockSource {
    async fn fetch(&self, panel_id: &str) -> Result<Vec<f64>, FeedError> {
        tokio::time::sleep(self.latency).await;
        self.data.get(panel_id).cloned().ok_or_else(|| FeedError::UnknownPanel(panel_id.to_string()))
    }
}

/// Cancellation flag shared between a page and its in-flight refreshes.
/// Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once [`cancel`](Self::cancel) has been called on any clone.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                // sender gone: can never fire
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self { Self::new() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub timeout: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self { timeout: Duration::from_millis(2_000) }
    }
}

/// Fetch new values for `panel`.
///
/// On success the series is replaced, `refreshed_at` is stamped and the
/// panel goes back to idle. On timeout or source error the panel is marked
/// failed and keeps its previous series. Cancellation leaves the panel idle
/// and untouched.
pub async fn refresh_panel<S>(
    source: &S,
    panel: &mut PanelState,
    policy: RefreshPolicy,
    cancel: &CancelToken,
) -> Result<(), FeedError>
where
    S: MetricSource + ?Sized,
{
    if cancel.is_cancelled() {
        return Err(FeedError::Cancelled);
    }

    panel.status = PanelStatus::Loading;
    let id = panel.id.clone();
    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(FeedError::Cancelled),
        r = tokio::time::timeout(policy.timeout, source.fetch(&id)) => match r {
            Ok(r) => r,
            Err(_) => Err(FeedError::TimedOut(policy.timeout.as_millis() as u64)),
        },
    };

    match outcome {
        Ok(values) => {
            panel.series = Series::new(values);
            panel.refreshed_at = Some(Utc::now());
            panel.status = PanelStatus::Idle;
            tracing::debug!(panel = %id, samples = panel.series.len(), "panel refreshed");
            Ok(())
        }
        Err(FeedError::Cancelled) => {
            panel.status = PanelStatus::Idle;
            tracing::debug!(panel = %id, "refresh cancelled");
            Err(FeedError::Cancelled)
        }
        Err(e) => {
            tracing::warn!(panel = %id, error = %e, "refresh failed");
            panel.status = PanelStatus::Failed(e.to_string());
            Err(e)
        }
    }
}

/// Refresh every panel on the page in order. Stops early once cancelled.
pub async fn refresh_page<S>(
    source: &S,
    page: &mut PageState,
    policy: RefreshPolicy,
    cancel: &CancelToken,
) -> Vec<(String, Result<(), FeedError>)>
where
    S: MetricSource + ?Sized,
{
    let mut results = Vec::with_capacity(page.panels.len());
    for panel in &mut page.panels {
        if cancel.is_cancelled() {
            break;
        }
        let r = refresh_panel(source, panel, policy, cancel).await;
        results.push((panel.id.clone(), r));
    }
    results
}
