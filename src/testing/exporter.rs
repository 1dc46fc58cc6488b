//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Example exporter for testing the telemetry pipeline graph
//!
//! Stores every payload it consumes so tests can assert on delivery
//! counts, contents and record-storage identity.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{GraphError, GraphResult};
use crate::traits::{
    ComponentConfig, ExporterFactory, ExporterSettings, PipelineHost, TelemetryExporter,
};
use crate::types::{ComponentId, SignalKind, TelemetryPayload};

/// Example exporter configuration
#[derive(Debug, Clone, Default)]
pub struct ExampleExporterConfig;

impl ComponentConfig for ExampleExporterConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Example exporter
pub struct ExampleExporter {
    signal: SignalKind,
    received: Mutex<Vec<TelemetryPayload>>,
    started: AtomicBool,
    stopped: AtomicBool,
}

impl ExampleExporter {
    /// Get the signal kind this exporter drains
    pub fn signal(&self) -> SignalKind {
        self.signal
    }

    /// Check whether the exporter was started
    pub fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Check whether the exporter was shut down
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Get every payload observed so far
    pub async fn received(&self) -> Vec<TelemetryPayload> {
        self.received.lock().await.clone()
    }
}

#[async_trait]
impl TelemetryExporter for ExampleExporter {
    async fn start(&self, _host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn shutdown(&self) -> GraphResult<()> {
        self.stopped.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()> {
        self.received.lock().await.push(payload);
        Ok(())
    }
}

/// Factory producing example exporters for every signal kind
#[derive(Default)]
pub struct ExampleExporterFactory {
    created: Mutex<Vec<(ExporterSettings, Arc<ExampleExporter>)>>,
}

impl ExampleExporterFactory {
    /// Number of components created so far
    pub async fn create_count(&self) -> usize {
        self.created.lock().await.len()
    }

    /// Look up a created exporter by id and signal kind
    pub async fn exporter(
        &self,
        id: &ComponentId,
        signal: SignalKind,
    ) -> Option<Arc<ExampleExporter>> {
        self.created
            .lock()
            .await
            .iter()
            .find(|(settings, _)| settings.id == *id && settings.signal == signal)
            .map(|(_, exporter)| exporter.clone())
    }
}

#[async_trait]
impl ExporterFactory for ExampleExporterFactory {
    async fn create(
        &self,
        settings: ExporterSettings,
        config: Arc<dyn ComponentConfig>,
    ) -> GraphResult<Arc<dyn TelemetryExporter>> {
        config
            .as_any()
            .downcast_ref::<ExampleExporterConfig>()
            .ok_or_else(|| GraphError::internal("unexpected example exporter config type"))?;

        let exporter = Arc::new(ExampleExporter {
            signal: settings.signal,
            received: Mutex::new(Vec::new()),
            started: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
        });
        self.created.lock().await.push((settings, exporter.clone()));
        Ok(exporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::testdata;

    #[tokio::test]
    async fn test_records_received_payloads() {
        let factory = ExampleExporterFactory::default();
        let id = ComponentId::new("exampleexporter");
        let exporter = factory
            .create(
                ExporterSettings {
                    id: id.clone(),
                    signal: SignalKind::Metrics,
                },
                Arc::new(ExampleExporterConfig),
            )
            .await
            .unwrap();

        exporter.consume(testdata::metrics(2)).await.unwrap();

        let handle = factory.exporter(&id, SignalKind::Metrics).await.unwrap();
        let received = handle.received().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].len(), 2);
    }
}
