//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Log data structures for the telemetry pipeline graph
//!
//! This module provides log records and the logs batch carried between
//! pipeline components, with the same shared-storage semantics as the
//! traces batch.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogData {
    /// Log timestamp
    pub timestamp: DateTime<Utc>,

    /// Log level
    pub level: LogLevel,

    /// Log message
    pub message: String,

    /// Log attributes
    pub attributes: HashMap<String, String>,

    /// Log severity text
    pub severity_text: Option<String>,
}

/// Log levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Logs batch carried between pipeline components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsBatch {
    /// Batch ID
    pub id: Uuid,

    /// Batch timestamp
    pub timestamp: DateTime<Utc>,

    /// Log records, shared across read-only branches
    logs: Arc<Vec<LogData>>,

    /// Batch metadata
    pub metadata: HashMap<String, String>,
}

impl LogsBatch {
    /// Create a new logs batch
    pub fn new(logs: Vec<LogData>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            logs: Arc::new(logs),
            metadata: HashMap::new(),
        }
    }

    /// Get the log records
    pub fn logs(&self) -> &[LogData] {
        &self.logs
    }

    /// Get mutable log records
    ///
    /// Unshares the record storage first when other batches still hold it.
    pub fn logs_mut(&mut self) -> &mut Vec<LogData> {
        Arc::make_mut(&mut self.logs)
    }

    /// Get batch size
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// Check if batch is empty
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Create an independent copy with its own record storage
    pub fn deep_copy(&self) -> Self {
        Self {
            id: self.id,
            timestamp: self.timestamp,
            logs: Arc::new(self.logs.as_ref().clone()),
            metadata: self.metadata.clone(),
        }
    }

    /// Check whether two batches share the same record storage
    pub fn shares_logs_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.logs, &other.logs)
    }
}
