//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Trace data structures for the telemetry pipeline graph
//!
//! This module provides span records and the traces batch carried between
//! pipeline components. Batches keep their records behind an `Arc` so that
//! fan-out to read-only branches shares storage, while mutation goes
//! through copy-on-write.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Span record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanData {
    /// Trace ID
    pub trace_id: String,

    /// Span ID
    pub span_id: String,

    /// Parent span ID
    pub parent_span_id: Option<String>,

    /// Span name
    pub name: String,

    /// Span kind
    pub kind: SpanKind,

    /// Span start time
    pub start_time: DateTime<Utc>,

    /// Span end time
    pub end_time: Option<DateTime<Utc>>,

    /// Span status
    pub status: SpanStatus,

    /// Span attributes
    pub attributes: HashMap<String, String>,
}

/// Span kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpanKind {
    Internal,
    Server,
    Client,
    Producer,
    Consumer,
}

/// Span status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanStatus {
    /// Status code
    pub code: StatusCode,

    /// Status message
    pub message: Option<String>,
}

/// Status codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatusCode {
    Ok,
    Error,
    Unset,
}

/// Traces batch carried between pipeline components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracesBatch {
    /// Batch ID
    pub id: Uuid,

    /// Batch timestamp
    pub timestamp: DateTime<Utc>,

    /// Span records, shared across read-only branches
    spans: Arc<Vec<SpanData>>,

    /// Batch metadata
    pub metadata: HashMap<String, String>,
}

impl TracesBatch {
    /// Create a new traces batch
    pub fn new(spans: Vec<SpanData>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            spans: Arc::new(spans),
            metadata: HashMap::new(),
        }
    }

    /// Get the span records
    pub fn spans(&self) -> &[SpanData] {
        &self.spans
    }

    /// Get mutable span records
    ///
    /// Unshares the record storage first when other batches still hold it.
    pub fn spans_mut(&mut self) -> &mut Vec<SpanData> {
        Arc::make_mut(&mut self.spans)
    }

    /// Get batch size
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if batch is empty
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Create an independent copy with its own record storage
    pub fn deep_copy(&self) -> Self {
        Self {
            id: self.id,
            timestamp: self.timestamp,
            spans: Arc::new(self.spans.as_ref().clone()),
            metadata: self.metadata.clone(),
        }
    }

    /// Check whether two batches share the same record storage
    pub fn shares_spans_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.spans, &other.spans)
    }
}
