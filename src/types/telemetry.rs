//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Signal-tagged payload for the telemetry pipeline graph
//!
//! This module provides the payload enum carried on every graph edge. The
//! tag is the signal kind of the edge; the builder guarantees that a
//! consumer only ever sees the kind its node was wired for, and connectors
//! are the only place where the tag changes.

use serde::{Deserialize, Serialize};

use super::component::SignalKind;
use super::logs::LogsBatch;
use super::metrics::MetricsBatch;
use super::traces::TracesBatch;

/// Telemetry payload carried between pipeline components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryPayload {
    /// Traces batch
    Traces(TracesBatch),

    /// Metrics batch
    Metrics(MetricsBatch),

    /// Logs batch
    Logs(LogsBatch),
}

impl TelemetryPayload {
    /// Get the signal kind of the payload
    pub fn signal(&self) -> SignalKind {
        match self {
            TelemetryPayload::Traces(_) => SignalKind::Traces,
            TelemetryPayload::Metrics(_) => SignalKind::Metrics,
            TelemetryPayload::Logs(_) => SignalKind::Logs,
        }
    }

    /// Get the number of records in the payload
    pub fn len(&self) -> usize {
        match self {
            TelemetryPayload::Traces(batch) => batch.len(),
            TelemetryPayload::Metrics(batch) => batch.len(),
            TelemetryPayload::Logs(batch) => batch.len(),
        }
    }

    /// Check if the payload carries no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create an independent copy with its own record storage
    pub fn deep_copy(&self) -> Self {
        match self {
            TelemetryPayload::Traces(batch) => TelemetryPayload::Traces(batch.deep_copy()),
            TelemetryPayload::Metrics(batch) => TelemetryPayload::Metrics(batch.deep_copy()),
            TelemetryPayload::Logs(batch) => TelemetryPayload::Logs(batch.deep_copy()),
        }
    }

    /// Check whether two payloads share the same record storage
    ///
    /// Payloads of different signal kinds never share.
    pub fn shares_records_with(&self, other: &Self) -> bool {
        match (self, other) {
            (TelemetryPayload::Traces(a), TelemetryPayload::Traces(b)) => a.shares_spans_with(b),
            (TelemetryPayload::Metrics(a), TelemetryPayload::Metrics(b)) => {
                a.shares_metrics_with(b)
            }
            (TelemetryPayload::Logs(a), TelemetryPayload::Logs(b)) => a.shares_logs_with(b),
            _ => false,
        }
    }
}

impl From<TracesBatch> for TelemetryPayload {
    fn from(batch: TracesBatch) -> Self {
        TelemetryPayload::Traces(batch)
    }
}

impl From<MetricsBatch> for TelemetryPayload {
    fn from(batch: MetricsBatch) -> Self {
        TelemetryPayload::Metrics(batch)
    }
}

impl From<LogsBatch> for TelemetryPayload {
    fn from(batch: LogsBatch) -> Self {
        TelemetryPayload::Logs(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_tag() {
        let payload = TelemetryPayload::Traces(TracesBatch::new(vec![]));
        assert_eq!(payload.signal(), SignalKind::Traces);
        assert!(payload.is_empty());
    }

    #[test]
    fn test_clone_shares_deep_copy_does_not() {
        let payload = TelemetryPayload::Logs(LogsBatch::new(vec![]));
        let shared = payload.clone();
        let copy = payload.deep_copy();

        assert!(payload.shares_records_with(&shared));
        assert!(!payload.shares_records_with(&copy));
    }

    #[test]
    fn test_cross_signal_never_shares() {
        let traces = TelemetryPayload::Traces(TracesBatch::new(vec![]));
        let logs = TelemetryPayload::Logs(LogsBatch::new(vec![]));
        assert!(!traces.shares_records_with(&logs));
    }
}
