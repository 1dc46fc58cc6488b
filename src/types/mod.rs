//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Core type definitions for the telemetry pipeline graph
//!
//! This module provides the identity types used to address components and
//! pipelines, and the signal payload structures carried on the data path.

pub mod component;
pub mod logs;
pub mod metrics;
pub mod telemetry;
pub mod traces;

// Re-export commonly used types
pub use component::{ComponentId, PipelineId, SignalKind};
pub use logs::{LogData, LogLevel, LogsBatch};
pub use metrics::{MetricData, MetricType, MetricValue, MetricsBatch};
pub use telemetry::TelemetryPayload;
pub use traces::{SpanData, SpanKind, SpanStatus, StatusCode, TracesBatch};
