//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Telemetry connector traits for the telemetry pipeline graph
//!
//! A connector is an exporter in one pipeline and a receiver in another:
//! it consumes payloads of its `from` signal kind and emits payloads of
//! its `to` signal kind into the consumer it was bound to at creation.
//! The two kinds may differ, which is the only place the graph changes the
//! signal kind of an edge.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GraphResult;
use crate::types::{ComponentId, SignalKind, TelemetryPayload};

use super::consumer::{ConsumerCapabilities, TelemetryConsumer};
use super::{ComponentConfig, PipelineHost};

/// Telemetry connector component for one (from, to) signal pair
#[async_trait]
pub trait TelemetryConnector: Send + Sync {
    /// Start the connector
    async fn start(&self, _host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        Ok(())
    }

    /// Shutdown the connector
    async fn shutdown(&self) -> GraphResult<()> {
        Ok(())
    }

    /// Get the connector capabilities on its consuming side
    fn capabilities(&self) -> ConsumerCapabilities {
        ConsumerCapabilities::default()
    }

    /// Consume a payload of the `from` kind and forward the `to` kind
    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()>;
}

/// Creation-time settings for a connector instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorSettings {
    /// Component identifier
    pub id: ComponentId,

    /// Signal kind consumed on the exporter side
    pub from: SignalKind,

    /// Signal kind emitted on the receiver side
    pub to: SignalKind,
}

/// Factory producing connector components
///
/// The factory is called once per (from, to) signal pair in use; whether
/// those calls share one underlying component is the factory's choice. A
/// factory that does not support the requested pair must return
/// [`GraphError::SignalNotSupported`](crate::error::GraphError).
#[async_trait]
pub trait ConnectorFactory: Send + Sync {
    /// Create a connector bound to its downstream consumer
    async fn create(
        &self,
        settings: ConnectorSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryConnector>>;
}
