//! Request counters for the Notion client.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    errors: AtomicU64,
    duration_ms: AtomicU64,
    speakers_fetched: AtomicU64,
}

/// Shared counters. Clones observe the same values.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_http_request(&self, duration: Duration) {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        self.counters.duration_ms.fetch_add(millis, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.counters.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Count pages returned by a retrieve or a database query.
    pub fn record_speakers_fetched(&self, count: usize) {
        self.counters
            .speakers_fetched
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.counters.errors.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.counters.duration_ms.load(Ordering::Relaxed)
    }

    /// Mean request time, 0.0 before the first request.
    pub fn http_duration_avg_ms(&self) -> f64 {
        match self.http_requests_total() {
            0 => 0.0,
            n => self.http_duration_total_ms() as f64 / n as f64,
        }
    }

    pub fn speakers_fetched_total(&self) -> u64 {
        self.counters.speakers_fetched.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            speakers_fetched_total: self.speakers_fetched_total(),
        }
    }
}

/// Point-in-time copy of the counters, logged after each request.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub speakers_fetched_total: u64,
}

/// Times one request from `start` to `finish`.
pub struct HttpTimer {
    started: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn start(metrics: &Metrics) -> Self {
        Self {
            started: Instant::now(),
            metrics: metrics.clone(),
        }
    }

    /// Records the elapsed time, and an error when `succeeded` is false.
    pub fn finish(self, succeeded: bool) {
        self.metrics.record_http_request(self.started.elapsed());
        if !succeeded {
            self.metrics.record_http_error();
        }
    }
}
