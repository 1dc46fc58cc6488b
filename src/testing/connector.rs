//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Example connector for testing the telemetry pipeline graph
//!
//! Bridges two pipelines for any (from, to) signal pair. Same-kind pairs
//! forward the payload unchanged; cross-kind pairs synthesize a payload of
//! the target kind with the same record count.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{GraphError, GraphResult};
use crate::traits::{
    ComponentConfig, ConnectorFactory, ConnectorSettings, PipelineHost, TelemetryConnector,
    TelemetryConsumer,
};
use crate::types::{ComponentId, SignalKind, TelemetryPayload};

use super::testdata;

/// Example connector configuration
#[derive(Debug, Clone, Default)]
pub struct ExampleConnectorConfig;

impl ComponentConfig for ExampleConnectorConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Example connector for one (from, to) signal pair
pub struct ExampleConnector {
    from: SignalKind,
    to: SignalKind,
    next: Arc<dyn TelemetryConsumer>,
    started: AtomicBool,
    stopped: AtomicBool,
}

impl ExampleConnector {
    /// Get the signal kind consumed on the exporter side
    pub fn from_signal(&self) -> SignalKind {
        self.from
    }

    /// Get the signal kind emitted on the receiver side
    pub fn to_signal(&self) -> SignalKind {
        self.to
    }

    /// Check whether the connector was started
    pub fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Check whether the connector was shut down
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TelemetryConnector for ExampleConnector {
    async fn start(&self, _host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn shutdown(&self) -> GraphResult<()> {
        self.stopped.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()> {
        if payload.signal() != self.from {
            return Err(GraphError::consume(format!(
                "connector expected {} but received {}",
                self.from,
                payload.signal()
            )));
        }
        self.next.consume(testdata::translate(payload, self.to)).await
    }
}

/// Factory producing example connectors for every signal pair
///
/// One component is created per (id, from, to) combination; tests assert
/// the E·R node property through `create_count`.
#[derive(Default)]
pub struct ExampleConnectorFactory {
    created: Mutex<Vec<(ConnectorSettings, Arc<ExampleConnector>)>>,
}

impl ExampleConnectorFactory {
    /// Number of components created so far
    pub async fn create_count(&self) -> usize {
        self.created.lock().await.len()
    }

    /// Look up a created connector by id and signal pair
    pub async fn connector(
        &self,
        id: &ComponentId,
        from: SignalKind,
        to: SignalKind,
    ) -> Option<Arc<ExampleConnector>> {
        self.created
            .lock()
            .await
            .iter()
            .find(|(settings, _)| {
                settings.id == *id && settings.from == from && settings.to == to
            })
            .map(|(_, connector)| connector.clone())
    }
}

#[async_trait]
impl ConnectorFactory for ExampleConnectorFactory {
    async fn create(
        &self,
        settings: ConnectorSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryConnector>> {
        config
            .as_any()
            .downcast_ref::<ExampleConnectorConfig>()
            .ok_or_else(|| GraphError::internal("unexpected example connector config type"))?;

        let connector = Arc::new(ExampleConnector {
            from: settings.from,
            to: settings.to,
            next,
            started: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
        });
        self.created
            .lock()
            .await
            .push((settings, connector.clone()));
        Ok(connector)
    }
}
