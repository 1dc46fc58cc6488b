//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Deterministic telemetry fixtures for testing the pipeline graph
//!
//! Record contents depend only on the requested size, so two calls with
//! the same arguments produce payloads that compare equal record-by-record.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::types::{
    LogData, LogLevel, LogsBatch, MetricData, MetricType, MetricValue, MetricsBatch, SignalKind,
    SpanData, SpanKind, SpanStatus, StatusCode, TelemetryPayload, TracesBatch,
};

const BASE_TIMESTAMP: i64 = 1_718_000_000;

fn timestamp(offset: usize) -> DateTime<Utc> {
    DateTime::from_timestamp(BASE_TIMESTAMP + offset as i64, 0).unwrap_or_default()
}

/// Generate a traces batch with `count` spans
pub fn traces_batch(count: usize) -> TracesBatch {
    let spans = (0..count)
        .map(|i| SpanData {
            trace_id: format!("{:032x}", i + 1),
            span_id: format!("{:016x}", i + 1),
            parent_span_id: None,
            name: format!("operation-{i}"),
            kind: SpanKind::Internal,
            start_time: timestamp(i),
            end_time: Some(timestamp(i + 1)),
            status: SpanStatus {
                code: StatusCode::Ok,
                message: None,
            },
            attributes: HashMap::new(),
        })
        .collect();
    TracesBatch::new(spans)
}

/// Generate a metrics batch with `count` data points
pub fn metrics_batch(count: usize) -> MetricsBatch {
    let metrics = (0..count)
        .map(|i| MetricData {
            name: format!("example.metric.{i}"),
            description: None,
            unit: Some("count".to_string()),
            metric_type: MetricType::Counter,
            value: MetricValue::Counter(i as f64),
            labels: HashMap::new(),
            timestamp: timestamp(i),
        })
        .collect();
    MetricsBatch::new(metrics)
}

/// Generate a logs batch with `count` records
pub fn logs_batch(count: usize) -> LogsBatch {
    let logs = (0..count)
        .map(|i| LogData {
            timestamp: timestamp(i),
            level: LogLevel::Info,
            message: format!("example log {i}"),
            attributes: HashMap::new(),
            severity_text: Some("INFO".to_string()),
        })
        .collect();
    LogsBatch::new(logs)
}

/// Generate a traces payload with `count` spans
pub fn traces(count: usize) -> TelemetryPayload {
    TelemetryPayload::Traces(traces_batch(count))
}

/// Generate a metrics payload with `count` data points
pub fn metrics(count: usize) -> TelemetryPayload {
    TelemetryPayload::Metrics(metrics_batch(count))
}

/// Generate a logs payload with `count` records
pub fn logs(count: usize) -> TelemetryPayload {
    TelemetryPayload::Logs(logs_batch(count))
}

/// Generate a payload of the given signal kind
pub fn payload(signal: SignalKind, count: usize) -> TelemetryPayload {
    match signal {
        SignalKind::Traces => traces(count),
        SignalKind::Metrics => metrics(count),
        SignalKind::Logs => logs(count),
    }
}

/// Translate a payload to the target signal kind
///
/// Same-kind translation is the identity; cross-kind translation keeps
/// the record count and synthesizes contents.
pub fn translate(input: TelemetryPayload, to: SignalKind) -> TelemetryPayload {
    if input.signal() == to {
        input
    } else {
        payload(to, input.len())
    }
}
