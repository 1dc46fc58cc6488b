//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Telemetry receiver traits for the telemetry pipeline graph
//!
//! Receivers ingest telemetry data from outside the graph and push it into
//! the consumer they were bound to at creation. The engine never pulls
//! from a receiver; it only drives the lifecycle.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GraphResult;
use crate::types::{ComponentId, SignalKind};

use super::consumer::TelemetryConsumer;
use super::{ComponentConfig, PipelineHost};

/// Telemetry receiver component
#[async_trait]
pub trait TelemetryReceiver: Send + Sync {
    /// Start the receiver
    async fn start(&self, _host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        Ok(())
    }

    /// Shutdown the receiver
    async fn shutdown(&self) -> GraphResult<()> {
        Ok(())
    }
}

/// Creation-time settings for a receiver instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverSettings {
    /// Component identifier
    pub id: ComponentId,

    /// Signal kind the receiver emits
    pub signal: SignalKind,
}

/// Factory producing receiver components
///
/// A factory that does not support the requested signal kind must return
/// [`GraphError::SignalNotSupported`](crate::error::GraphError).
#[async_trait]
pub trait ReceiverFactory: Send + Sync {
    /// Create a receiver bound to its downstream consumer
    async fn create(
        &self,
        settings: ReceiverSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryReceiver>>;
}
