//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Example processor for testing the telemetry pipeline graph
//!
//! A pass-through transformer. Instances named `mutate` advertise the
//! mutates-data capability without actually touching the payload, which
//! lets tests observe copy decisions by payload identity.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{GraphError, GraphResult};
use crate::traits::{
    ComponentConfig, ConsumerCapabilities, PipelineHost, ProcessorFactory, ProcessorSettings,
    TelemetryConsumer, TelemetryProcessor,
};
use crate::types::{ComponentId, PipelineId, TelemetryPayload};

/// Name that switches an example processor into mutating mode
pub const MUTATE_NAME: &str = "mutate";

/// Example processor configuration
#[derive(Debug, Clone, Default)]
pub struct ExampleProcessorConfig;

impl ComponentConfig for ExampleProcessorConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Example processor
pub struct ExampleProcessor {
    mutate: bool,
    next: Arc<dyn TelemetryConsumer>,
    started: AtomicBool,
    stopped: AtomicBool,
}

impl ExampleProcessor {
    /// Check whether the processor was started
    pub fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Check whether the processor was shut down
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TelemetryProcessor for ExampleProcessor {
    async fn start(&self, _host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn shutdown(&self) -> GraphResult<()> {
        self.stopped.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn capabilities(&self) -> ConsumerCapabilities {
        ConsumerCapabilities {
            mutates_data: self.mutate,
        }
    }

    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()> {
        self.next.consume(payload).await
    }
}

/// Factory producing example processors for every signal kind
#[derive(Default)]
pub struct ExampleProcessorFactory {
    created: Mutex<Vec<(ProcessorSettings, Arc<ExampleProcessor>)>>,
}

impl ExampleProcessorFactory {
    /// Number of components created so far
    pub async fn create_count(&self) -> usize {
        self.created.lock().await.len()
    }

    /// Look up a created processor by pipeline and id
    pub async fn processor(
        &self,
        pipeline: &PipelineId,
        id: &ComponentId,
    ) -> Option<Arc<ExampleProcessor>> {
        self.created
            .lock()
            .await
            .iter()
            .find(|(settings, _)| settings.pipeline == *pipeline && settings.id == *id)
            .map(|(_, processor)| processor.clone())
    }
}

#[async_trait]
impl ProcessorFactory for ExampleProcessorFactory {
    async fn create(
        &self,
        settings: ProcessorSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryProcessor>> {
        config
            .as_any()
            .downcast_ref::<ExampleProcessorConfig>()
            .ok_or_else(|| GraphError::internal("unexpected example processor config type"))?;

        let processor = Arc::new(ExampleProcessor {
            mutate: settings.id.name() == MUTATE_NAME,
            next,
            started: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
        });
        self.created
            .lock()
            .await
            .push((settings, processor.clone()));
        Ok(processor)
    }
}
