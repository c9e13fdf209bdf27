//! Observability: pagination telemetry (metrics + structured logs) and sink abstractions.
//!
//! Paginator logic never writes global state directly; every signal flows
//! through `MetricsEvent` and a `MetricsSink`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{
    GlobalMetricsSink, MetricsEvent, MetricsSink, StoreOp, TracingSink, metrics_report,
    metrics_reset_all,
};
pub(crate) use sink::{GLOBAL_METRICS_SINK, Span};
