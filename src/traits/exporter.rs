//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Telemetry exporter traits for the telemetry pipeline graph
//!
//! Exporters are the sinks of the graph: they consume payloads and emit
//! them outside the system. An exporter is not bound to a downstream
//! consumer; its `consume` is the end of the synchronous call chain.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GraphResult;
use crate::types::{ComponentId, SignalKind, TelemetryPayload};

use super::consumer::ConsumerCapabilities;
use super::{ComponentConfig, PipelineHost};

/// Telemetry exporter component
#[async_trait]
pub trait TelemetryExporter: Send + Sync {
    /// Start the exporter
    async fn start(&self, _host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        Ok(())
    }

    /// Shutdown the exporter
    async fn shutdown(&self) -> GraphResult<()> {
        Ok(())
    }

    /// Get the exporter capabilities
    fn capabilities(&self) -> ConsumerCapabilities {
        ConsumerCapabilities::default()
    }

    /// Consume a payload and export it
    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()>;
}

/// Creation-time settings for an exporter instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterSettings {
    /// Component identifier
    pub id: ComponentId,

    /// Signal kind the exporter drains
    pub signal: SignalKind,
}

/// Factory producing exporter components
///
/// A factory that does not support the requested signal kind must return
/// [`GraphError::SignalNotSupported`](crate::error::GraphError).
#[async_trait]
pub trait ExporterFactory: Send + Sync {
    /// Create an exporter
    async fn create(
        &self,
        settings: ExporterSettings,
        config: Arc<dyn ComponentConfig>,
    ) -> GraphResult<Arc<dyn TelemetryExporter>>;
}
