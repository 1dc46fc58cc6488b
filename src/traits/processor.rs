//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Telemetry processor traits for the telemetry pipeline graph
//!
//! Processors sit inside a single pipeline, transform payloads, and
//! forward them to the consumer they were bound to at creation. A
//! processor that mutates payloads in place must say so through its
//! capabilities; upstream fan-out relies on that flag for copy decisions.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GraphResult;
use crate::types::{ComponentId, PipelineId, TelemetryPayload};

use super::consumer::{ConsumerCapabilities, TelemetryConsumer};
use super::{ComponentConfig, PipelineHost};

/// Telemetry processor component
#[async_trait]
pub trait TelemetryProcessor: Send + Sync {
    /// Start the processor
    async fn start(&self, _host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        Ok(())
    }

    /// Shutdown the processor
    async fn shutdown(&self) -> GraphResult<()> {
        Ok(())
    }

    /// Get the processor capabilities
    fn capabilities(&self) -> ConsumerCapabilities {
        ConsumerCapabilities::default()
    }

    /// Consume a payload, transform it, and forward it downstream
    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()>;
}

/// Creation-time settings for a processor instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorSettings {
    /// Component identifier
    pub id: ComponentId,

    /// Pipeline the processor instance belongs to
    pub pipeline: PipelineId,
}

/// Factory producing processor components
///
/// A factory that does not support the pipeline's signal kind must return
/// [`GraphError::SignalNotSupported`](crate::error::GraphError).
#[async_trait]
pub trait ProcessorFactory: Send + Sync {
    /// Create a processor bound to its downstream consumer
    async fn create(
        &self,
        settings: ProcessorSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryProcessor>>;
}
