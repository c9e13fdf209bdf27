//! Metrics sink boundary.
//!
//! Paginator logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::{obs::metrics, request::PageMode};

const LOG_TARGET: &str = "cursorpage";

///
/// StoreOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoreOp {
    First,
    RangeBefore,
    RangeAfter,
    ExistsBefore,
    ExistsAfter,
}

impl StoreOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::RangeBefore => "range_before",
            Self::RangeAfter => "range_after",
            Self::ExistsBefore => "exists_before",
            Self::ExistsAfter => "exists_after",
        }
    }
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    PageStart {
        mode: PageMode,
    },
    StoreRead {
        op: StoreOp,
        rows: u64,
    },
    PageFinish {
        mode: PageMode,
        rows: u64,
        has_previous: bool,
        has_next: bool,
    },
    NotFound {
        mode: PageMode,
    },
    Rejected {
        mode: PageMode,
        page_size: u32,
    },
    Failed {
        mode: PageMode,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

///
/// GlobalMetricsSink
/// Default sink: thread-local counters plus a structured log line per event.
///

pub struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| {
            let ops = &mut m.ops;

            match event {
                MetricsEvent::PageStart { mode } => match mode {
                    PageMode::First => ops.first_calls = ops.first_calls.saturating_add(1),
                    PageMode::Before => ops.before_calls = ops.before_calls.saturating_add(1),
                    PageMode::After => ops.after_calls = ops.after_calls.saturating_add(1),
                },

                MetricsEvent::StoreRead { op, rows } => {
                    let counter = match op {
                        StoreOp::First => &mut ops.reads_first,
                        StoreOp::RangeBefore => &mut ops.reads_range_before,
                        StoreOp::RangeAfter => &mut ops.reads_range_after,
                        StoreOp::ExistsBefore => &mut ops.reads_exists_before,
                        StoreOp::ExistsAfter => &mut ops.reads_exists_after,
                    };
                    *counter = counter.saturating_add(1);
                    ops.rows_read = ops.rows_read.saturating_add(rows);
                }

                MetricsEvent::PageFinish {
                    rows,
                    has_previous,
                    has_next,
                    ..
                } => {
                    ops.pages_returned = ops.pages_returned.saturating_add(1);
                    ops.rows_returned = ops.rows_returned.saturating_add(rows);
                    if has_previous {
                        ops.pages_with_previous = ops.pages_with_previous.saturating_add(1);
                    }
                    if has_next {
                        ops.pages_with_next = ops.pages_with_next.saturating_add(1);
                    }
                }

                MetricsEvent::NotFound { .. } => ops.not_found = ops.not_found.saturating_add(1),
                MetricsEvent::Rejected { .. } => ops.rejected = ops.rejected.saturating_add(1),
                MetricsEvent::Failed { .. } => ops.failed = ops.failed.saturating_add(1),
            }
        });

        log_event(event);
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

///
/// TracingSink
/// Log-only sink; emits each event through `tracing` without touching counters.
///

pub struct TracingSink;

impl MetricsSink for TracingSink {
    fn record(&self, event: MetricsEvent) {
        log_event(event);
    }
}

fn log_event(event: MetricsEvent) {
    match event {
        MetricsEvent::PageStart { mode } => {
            tracing::trace!(target: LOG_TARGET, mode = mode.as_str(), "page start");
        }
        MetricsEvent::StoreRead { op, rows } => {
            tracing::trace!(target: LOG_TARGET, op = op.as_str(), rows, "store read");
        }
        MetricsEvent::PageFinish {
            mode,
            rows,
            has_previous,
            has_next,
        } => {
            tracing::debug!(
                target: LOG_TARGET,
                mode = mode.as_str(),
                rows,
                has_previous,
                has_next,
                "page finish"
            );
        }
        MetricsEvent::NotFound { mode } => {
            tracing::debug!(target: LOG_TARGET, mode = mode.as_str(), "strict window empty");
        }
        MetricsEvent::Rejected { mode, page_size } => {
            tracing::warn!(target: LOG_TARGET, mode = mode.as_str(), page_size, "page request rejected");
        }
        MetricsEvent::Failed { mode } => {
            tracing::warn!(target: LOG_TARGET, mode = mode.as_str(), "ordered store read failed");
        }
    }
}

/// Snapshot the current thread's pagination counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset the current thread's pagination counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

///
/// Span
/// RAII guard that emits start/finish events for one paginator call.
/// Finish accounting happens on every exit path, including `?` returns.
///

pub(crate) struct Span<'a> {
    sink: &'a dyn MetricsSink,
    mode: PageMode,
    outcome: SpanOutcome,
}

#[derive(Clone, Copy)]
enum SpanOutcome {
    Pending,
    Page {
        rows: u64,
        has_previous: bool,
        has_next: bool,
    },
    NotFound,
}

impl<'a> Span<'a> {
    pub(crate) fn new(sink: &'a dyn MetricsSink, mode: PageMode) -> Self {
        sink.record(MetricsEvent::PageStart { mode });

        Self {
            sink,
            mode,
            outcome: SpanOutcome::Pending,
        }
    }

    pub(crate) fn store_read(&self, op: StoreOp, rows: usize) {
        self.sink.record(MetricsEvent::StoreRead {
            op,
            rows: u64::try_from(rows).unwrap_or(u64::MAX),
        });
    }

    pub(crate) fn set_page(&mut self, rows: usize, has_previous: bool, has_next: bool) {
        self.outcome = SpanOutcome::Page {
            rows: u64::try_from(rows).unwrap_or(u64::MAX),
            has_previous,
            has_next,
        };
    }

    pub(crate) const fn set_not_found(&mut self) {
        self.outcome = SpanOutcome::NotFound;
    }
}

impl Drop for Span<'_> {
    fn drop(&mut self) {
        let mode = self.mode;
        let event = match self.outcome {
            SpanOutcome::Pending => MetricsEvent::Failed { mode },
            SpanOutcome::Page {
                rows,
                has_previous,
                has_next,
            } => MetricsEvent::PageFinish {
                mode,
                rows,
                has_previous,
                has_next,
            },
            SpanOutcome::NotFound => MetricsEvent::NotFound { mode },
        };

        self.sink.record(event);
    }
}

///
/// TESTS
///
