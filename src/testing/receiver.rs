//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Example receiver for testing the telemetry pipeline graph
//!
//! A push-through source: tests hand it a payload with `send` and it
//! forwards into the consumer the graph bound it to.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::traits::{
    ComponentConfig, PipelineHost, ReceiverFactory, ReceiverSettings, TelemetryConsumer,
    TelemetryReceiver,
};
use crate::types::{ComponentId, SignalKind, TelemetryPayload};

/// Example receiver configuration
#[derive(Debug, Clone, Default)]
pub struct ExampleReceiverConfig;

impl ComponentConfig for ExampleReceiverConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Example receiver
pub struct ExampleReceiver {
    signal: SignalKind,
    next: Arc<dyn TelemetryConsumer>,
    started: AtomicBool,
    stopped: AtomicBool,
}

impl ExampleReceiver {
    /// Get the signal kind this receiver emits
    pub fn signal(&self) -> SignalKind {
        self.signal
    }

    /// Check whether the receiver was started
    pub fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Check whether the receiver was shut down
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Inject a payload as if it arrived from outside the graph
    pub async fn send(&self, payload: TelemetryPayload) -> GraphResult<()> {
        self.next.consume(payload).await
    }
}

#[async_trait]
impl TelemetryReceiver for ExampleReceiver {
    async fn start(&self, _host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        self.started.store(true, Ordering::SeqCst);
        debug!("example receiver started ({})", self.signal);
        Ok(())
    }

    async fn shutdown(&self) -> GraphResult<()> {
        self.stopped.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Factory producing example receivers for every signal kind
#[derive(Default)]
pub struct ExampleReceiverFactory {
    created: Mutex<Vec<(ReceiverSettings, Arc<ExampleReceiver>)>>,
}

impl ExampleReceiverFactory {
    /// Number of components created so far
    pub async fn create_count(&self) -> usize {
        self.created.lock().await.len()
    }

    /// Look up a created receiver by id and signal kind
    pub async fn receiver(
        &self,
        id: &ComponentId,
        signal: SignalKind,
    ) -> Option<Arc<ExampleReceiver>> {
        self.created
            .lock()
            .await
            .iter()
            .find(|(settings, _)| settings.id == *id && settings.signal == signal)
            .map(|(_, receiver)| receiver.clone())
    }
}

#[async_trait]
impl ReceiverFactory for ExampleReceiverFactory {
    async fn create(
        &self,
        settings: ReceiverSettings,
        config: Arc<dyn ComponentConfig>,
        next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryReceiver>> {
        config
            .as_any()
            .downcast_ref::<ExampleReceiverConfig>()
            .ok_or_else(|| GraphError::internal("unexpected example receiver config type"))?;

        let receiver = Arc::new(ExampleReceiver {
            signal: settings.signal,
            next,
            started: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
        });
        self.created.lock().await.push((settings, receiver.clone()));
        Ok(receiver)
    }
}
