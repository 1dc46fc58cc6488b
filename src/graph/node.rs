//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Node identity and runtime node variants for the telemetry pipeline graph
//!
//! A node key names one vertex of the global graph. Keys are hashed into
//! stable 64-bit ids; two configuration references producing equal keys
//! collapse to one runtime node, which is how components are shared across
//! pipelines. The runtime node wraps the instantiated component and exposes
//! the lifecycle plus the consumer seen by upstream neighbors.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{GraphError, GraphResult};
use crate::traits::{
    PipelineHost, TelemetryConnector, TelemetryConsumer, TelemetryExporter, TelemetryProcessor,
    TelemetryReceiver,
};
use crate::types::{ComponentId, PipelineId, SignalKind, TelemetryPayload};

use super::capabilities::CapabilityConsumer;

/// Stable 64-bit node identifier derived from a node key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Identity of one vertex in the global component graph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// One per (shared receiver, signal kind it feeds)
    Receiver { signal: SignalKind, id: ComponentId },

    /// Private per pipeline
    Processor { pipeline: PipelineId, id: ComponentId },

    /// One per (shared exporter, signal kind it drains)
    Exporter { signal: SignalKind, id: ComponentId },

    /// One per (connector, from-signal, to-signal)
    Connector {
        id: ComponentId,
        from: SignalKind,
        to: SignalKind,
    },

    /// Exactly one per pipeline, between sources and processors
    Capabilities { pipeline: PipelineId },

    /// Exactly one per pipeline, after the last processor
    Fanout { pipeline: PipelineId },
}

impl NodeKey {
    /// Hash the key into its stable node id
    pub fn node_id(&self) -> NodeId {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        NodeId(hasher.finish())
    }

    /// Get the node role name as used in error messages
    pub fn role(&self) -> &'static str {
        match self {
            NodeKey::Receiver { .. } => "receiver",
            NodeKey::Processor { .. } => "processor",
            NodeKey::Exporter { .. } => "exporter",
            NodeKey::Connector { .. } => "connector",
            NodeKey::Capabilities { .. } => "capabilities",
            NodeKey::Fanout { .. } => "fanout",
        }
    }

    /// Human-readable node description for logs and cycle listings
    pub fn describe(&self) -> String {
        match self {
            NodeKey::Receiver { signal, id } => format!("receiver \"{id}\" ({signal})"),
            NodeKey::Processor { pipeline, id } => {
                format!("processor \"{id}\" in pipeline \"{pipeline}\"")
            }
            NodeKey::Exporter { signal, id } => format!("exporter \"{id}\" ({signal})"),
            NodeKey::Connector { id, from, to } => {
                format!("connector \"{id}\" ({from} to {to})")
            }
            NodeKey::Capabilities { pipeline } => format!("capabilities \"{pipeline}\""),
            NodeKey::Fanout { pipeline } => format!("fanout \"{pipeline}\""),
        }
    }
}

/// Instantiated component state, one variant per node role
///
/// Slots are `None` until the builder instantiates the graph in reverse
/// topological order; every slot is filled before the graph is handed to
/// the driver.
pub(crate) enum NodeInner {
    Receiver {
        component: Option<Arc<dyn TelemetryReceiver>>,
    },
    Processor {
        component: Option<Arc<dyn TelemetryProcessor>>,
    },
    Exporter {
        component: Option<Arc<dyn TelemetryExporter>>,
    },
    Connector {
        component: Option<Arc<dyn TelemetryConnector>>,
    },
    Capabilities {
        consumer: Option<Arc<CapabilityConsumer>>,
    },
    Fanout {
        consumer: Option<Arc<dyn TelemetryConsumer>>,
    },
}

/// One vertex of the runtime graph
pub(crate) struct Node {
    key: NodeKey,
    inner: NodeInner,
    started: AtomicBool,
    shut_down: AtomicBool,
}

impl Node {
    /// Create an empty node for a key; the component is attached later
    pub(crate) fn new(key: NodeKey) -> Self {
        let inner = match &key {
            NodeKey::Receiver { .. } => NodeInner::Receiver { component: None },
            NodeKey::Processor { .. } => NodeInner::Processor { component: None },
            NodeKey::Exporter { .. } => NodeInner::Exporter { component: None },
            NodeKey::Connector { .. } => NodeInner::Connector { component: None },
            NodeKey::Capabilities { .. } => NodeInner::Capabilities { consumer: None },
            NodeKey::Fanout { .. } => NodeInner::Fanout { consumer: None },
        };
        Self {
            key,
            inner,
            started: AtomicBool::new(false),
            shut_down: AtomicBool::new(false),
        }
    }

    pub(crate) fn key(&self) -> &NodeKey {
        &self.key
    }

    pub(crate) fn describe(&self) -> String {
        self.key.describe()
    }

    pub(crate) fn set_receiver(&mut self, component: Arc<dyn TelemetryReceiver>) {
        if let NodeInner::Receiver { component: slot } = &mut self.inner {
            *slot = Some(component);
        }
    }

    pub(crate) fn set_processor(&mut self, component: Arc<dyn TelemetryProcessor>) {
        if let NodeInner::Processor { component: slot } = &mut self.inner {
            *slot = Some(component);
        }
    }

    pub(crate) fn set_exporter(&mut self, component: Arc<dyn TelemetryExporter>) {
        if let NodeInner::Exporter { component: slot } = &mut self.inner {
            *slot = Some(component);
        }
    }

    pub(crate) fn set_connector(&mut self, component: Arc<dyn TelemetryConnector>) {
        if let NodeInner::Connector { component: slot } = &mut self.inner {
            *slot = Some(component);
        }
    }

    pub(crate) fn set_capabilities(&mut self, consumer: Arc<CapabilityConsumer>) {
        if let NodeInner::Capabilities { consumer: slot } = &mut self.inner {
            *slot = Some(consumer);
        }
    }

    pub(crate) fn set_fanout(&mut self, consumer: Arc<dyn TelemetryConsumer>) {
        if let NodeInner::Fanout { consumer: slot } = &mut self.inner {
            *slot = Some(consumer);
        }
    }

    /// Get the instantiated receiver component, if this is a receiver node
    pub(crate) fn receiver(&self) -> Option<Arc<dyn TelemetryReceiver>> {
        match &self.inner {
            NodeInner::Receiver { component } => component.clone(),
            _ => None,
        }
    }

    /// Get the instantiated exporter component, if this is an exporter node
    pub(crate) fn exporter(&self) -> Option<Arc<dyn TelemetryExporter>> {
        match &self.inner {
            NodeInner::Exporter { component } => component.clone(),
            _ => None,
        }
    }

    /// Get the consumer upstream neighbors push into
    ///
    /// Receiver nodes are pure sources and have none.
    pub(crate) fn consumer(&self) -> GraphResult<Arc<dyn TelemetryConsumer>> {
        match &self.inner {
            NodeInner::Processor {
                component: Some(component),
            } => Ok(Arc::new(ProcessorConsumer(component.clone()))),
            NodeInner::Exporter {
                component: Some(component),
            } => Ok(Arc::new(ExporterConsumer(component.clone()))),
            NodeInner::Connector {
                component: Some(component),
            } => Ok(Arc::new(ConnectorConsumer(component.clone()))),
            NodeInner::Capabilities {
                consumer: Some(consumer),
            } => Ok(consumer.clone()),
            NodeInner::Fanout {
                consumer: Some(consumer),
            } => Ok(consumer.clone()),
            NodeInner::Receiver { .. } => Err(GraphError::internal(format!(
                "{} exposes no consumer",
                self.describe()
            ))),
            _ => Err(GraphError::internal(format!(
                "{} is not constructed yet",
                self.describe()
            ))),
        }
    }

    /// Start the node's component; duplicate scheduling is a no-op
    pub(crate) async fn start(&self, host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        match &self.inner {
            NodeInner::Receiver {
                component: Some(component),
            } => component.start(host).await,
            NodeInner::Processor {
                component: Some(component),
            } => component.start(host).await,
            NodeInner::Exporter {
                component: Some(component),
            } => component.start(host).await,
            NodeInner::Connector {
                component: Some(component),
            } => component.start(host).await,
            NodeInner::Capabilities { .. } | NodeInner::Fanout { .. } => Ok(()),
            _ => Err(GraphError::internal(format!(
                "{} started before construction",
                self.describe()
            ))),
        }
    }

    /// Shut down the node's component; duplicate scheduling is a no-op
    pub(crate) async fn shutdown(&self) -> GraphResult<()> {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        match &self.inner {
            NodeInner::Receiver {
                component: Some(component),
            } => component.shutdown().await,
            NodeInner::Processor {
                component: Some(component),
            } => component.shutdown().await,
            NodeInner::Exporter {
                component: Some(component),
            } => component.shutdown().await,
            NodeInner::Connector {
                component: Some(component),
            } => component.shutdown().await,
            NodeInner::Capabilities { .. } | NodeInner::Fanout { .. } => Ok(()),
            _ => Err(GraphError::internal(format!(
                "{} shut down before construction",
                self.describe()
            ))),
        }
    }
}

struct ProcessorConsumer(Arc<dyn TelemetryProcessor>);

#[async_trait]
impl TelemetryConsumer for ProcessorConsumer {
    fn capabilities(&self) -> crate::traits::ConsumerCapabilities {
        self.0.capabilities()
    }

    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()> {
        self.0.consume(payload).await
    }
}

struct ExporterConsumer(Arc<dyn TelemetryExporter>);

#[async_trait]
impl TelemetryConsumer for ExporterConsumer {
    fn capabilities(&self) -> crate::traits::ConsumerCapabilities {
        self.0.capabilities()
    }

    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()> {
        self.0.consume(payload).await
    }
}

struct ConnectorConsumer(Arc<dyn TelemetryConnector>);

#[async_trait]
impl TelemetryConsumer for ConnectorConsumer {
    fn capabilities(&self) -> crate::traits::ConsumerCapabilities {
        self.0.capabilities()
    }

    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()> {
        self.0.consume(payload).await
    }
}
