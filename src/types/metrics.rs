//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Metric data structures for the telemetry pipeline graph
//!
//! This module provides metric records and the metrics batch carried
//! between pipeline components, with the same shared-storage semantics as
//! the traces batch.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metric record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricData {
    /// Metric name
    pub name: String,

    /// Metric description
    pub description: Option<String>,

    /// Metric unit
    pub unit: Option<String>,

    /// Metric type
    pub metric_type: MetricType,

    /// Metric value
    pub value: MetricValue,

    /// Metric labels
    pub labels: HashMap<String, String>,

    /// Metric timestamp
    pub timestamp: DateTime<Utc>,
}

/// Metric types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricType {
    Counter,
    Gauge,
    Histogram,
}

/// Metric values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    /// Counter value
    Counter(f64),

    /// Gauge value
    Gauge(f64),

    /// Histogram sum and count
    Histogram { sum: f64, count: u64 },
}

/// Metrics batch carried between pipeline components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsBatch {
    /// Batch ID
    pub id: Uuid,

    /// Batch timestamp
    pub timestamp: DateTime<Utc>,

    /// Metric records, shared across read-only branches
    metrics: Arc<Vec<MetricData>>,

    /// Batch metadata
    pub metadata: HashMap<String, String>,
}

impl MetricsBatch {
    /// Create a new metrics batch
    pub fn new(metrics: Vec<MetricData>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            metrics: Arc::new(metrics),
            metadata: HashMap::new(),
        }
    }

    /// Get the metric records
    pub fn metrics(&self) -> &[MetricData] {
        &self.metrics
    }

    /// Get mutable metric records
    ///
    /// Unshares the record storage first when other batches still hold it.
    pub fn metrics_mut(&mut self) -> &mut Vec<MetricData> {
        Arc::make_mut(&mut self.metrics)
    }

    /// Get batch size
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Check if batch is empty
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Create an independent copy with its own record storage
    pub fn deep_copy(&self) -> Self {
        Self {
            id: self.id,
            timestamp: self.timestamp,
            metrics: Arc::new(self.metrics.as_ref().clone()),
            metadata: self.metadata.clone(),
        }
    }

    /// Check whether two batches share the same record storage
    pub fn shares_metrics_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.metrics, &other.metrics)
    }
}
