//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Telemetry Pipeline Graph Engine
//!
//! This crate compiles a declarative set of telemetry pipelines — each an
//! ordered sequence of receivers, processors and exporters, optionally
//! bridged by connectors — into a single directed acyclic graph of runtime
//! components, then drives the lifecycle of that graph: ordered startup,
//! in-flight data forwarding, and ordered shutdown.
//!
//! Components referenced by several pipelines are instantiated exactly
//! once and wired so that mutating branches receive exclusive payload
//! copies while read-only branches share record storage. Cycles, unknown
//! factories and unsupported signal kinds are rejected at build time,
//! before any component is constructed.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pipeline_graph::{GraphSettings, NoopHost, PipelineGraph};
//!
//! # async fn run(settings: GraphSettings) -> pipeline_graph::GraphResult<()> {
//! let graph = PipelineGraph::build(settings).await?;
//! graph.start_all(Arc::new(NoopHost)).await?;
//! // ... data flows from receivers to exporters ...
//! graph.shutdown_all().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use error::{GraphError, GraphResult};
pub use graph::{
    ConnectorRegistry, ExporterRegistry, GraphSettings, NodeKey, PipelineGraph, PipelineView,
    ProcessorRegistry, ReceiverRegistry,
};
pub use traits::{
    ComponentConfig, ConnectorFactory, ConnectorSettings, ConsumerCapabilities, ExporterFactory,
    ExporterSettings, NoopHost, PipelineHost, ProcessorFactory, ProcessorSettings,
    ReceiverFactory, ReceiverSettings, TelemetryConnector, TelemetryConsumer, TelemetryExporter,
    TelemetryProcessor, TelemetryReceiver,
};
pub use types::{
    ComponentId, LogsBatch, MetricsBatch, PipelineId, SignalKind, TelemetryPayload, TracesBatch,
};

/// Engine version information
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
