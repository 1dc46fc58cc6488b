//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Pipeline graph engine
//!
//! This module provides the built component graph and its lifecycle
//! driver. Build compiles the pipeline configurations into one DAG of
//! runtime nodes; start-all walks the nodes in reverse topological order
//! (sinks first) and shutdown-all walks them forward (sources first), so
//! that every edge u -> v observes "v started before u" and "u stopped
//! before v".

pub mod builder;
pub mod node;
pub mod registry;

pub(crate) mod capabilities;
pub(crate) mod fanout;
pub(crate) mod topo;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::error::{GraphError, GraphResult};
use crate::traits::{PipelineHost, TelemetryExporter, TelemetryReceiver};
use crate::types::{ComponentId, PipelineId, SignalKind};

// Re-export commonly used types
pub use builder::GraphSettings;
pub use node::{NodeId, NodeKey};
pub use registry::{ConnectorRegistry, ExporterRegistry, ProcessorRegistry, ReceiverRegistry};

use node::Node;

/// Node bookkeeping for one pipeline
#[derive(Default)]
pub(crate) struct PipelineNodes {
    pub(crate) receivers: Vec<NodeId>,
    pub(crate) processors: Vec<NodeId>,
    pub(crate) exporters: Vec<NodeId>,
    pub(crate) mutates_data: bool,
}

/// Read-only view of one pipeline in the built graph
#[derive(Debug, Clone)]
pub struct PipelineView {
    /// Pipeline identifier
    pub id: PipelineId,

    /// Aggregate mutates-data flag advertised by the capabilities node
    pub mutates_data: bool,

    /// Receiver-role nodes feeding the pipeline (connectors included)
    pub receivers: Vec<NodeKey>,

    /// Processor nodes, in pipeline order
    pub processors: Vec<NodeKey>,

    /// Exporter-role nodes draining the pipeline (connectors included)
    pub exporters: Vec<NodeKey>,
}

/// The built component graph
///
/// Holds every runtime node exactly once, the topological order computed
/// at build time, and the per-pipeline node bookkeeping.
pub struct PipelineGraph {
    pub(crate) nodes: HashMap<NodeId, Node>,
    pub(crate) order: Vec<NodeId>,
    pub(crate) pipelines: BTreeMap<PipelineId, PipelineNodes>,
}

impl PipelineGraph {
    /// Build the graph from pipeline configurations and factory registries
    ///
    /// Fails without constructing any component when the configuration
    /// references unknown factories or components, or when the global
    /// graph is cyclic.
    pub async fn build(settings: GraphSettings) -> GraphResult<Self> {
        builder::build(settings).await
    }

    /// Start every node, sinks first
    ///
    /// Stops at the first failing node and returns its error; already
    /// started nodes stay up, and rolling them back is the caller's
    /// responsibility via [`shutdown_all`](Self::shutdown_all).
    pub async fn start_all(&self, host: Arc<dyn PipelineHost>) -> GraphResult<()> {
        info!("starting {} component nodes", self.order.len());
        for node_id in self.order.iter().rev() {
            let node = self.node(node_id)?;
            debug!("starting {}", node.describe());
            node.start(host.clone()).await?;
        }
        Ok(())
    }

    /// Shut down every node, sources first
    ///
    /// Keeps stopping remaining nodes after a failure; the first observed
    /// error is returned, the rest are logged.
    pub async fn shutdown_all(&self) -> GraphResult<()> {
        info!("stopping {} component nodes", self.order.len());
        let mut first_error = None;
        for node_id in &self.order {
            let node = self.node(node_id)?;
            debug!("stopping {}", node.describe());
            if let Err(e) = node.shutdown().await {
                error!("failed to stop {}: {}", node.describe(), e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// True receiver components, grouped by the signal kind they emit
    ///
    /// Connector-as-receiver nodes are excluded; shared receivers appear
    /// once regardless of how many pipelines reference them.
    pub fn receivers(&self) -> HashMap<SignalKind, HashMap<ComponentId, Arc<dyn TelemetryReceiver>>> {
        let mut map: HashMap<SignalKind, HashMap<ComponentId, Arc<dyn TelemetryReceiver>>> =
            HashMap::new();
        for node in self.nodes.values() {
            if let NodeKey::Receiver { signal, id } = node.key() {
                if let Some(component) = node.receiver() {
                    map.entry(*signal).or_default().insert(id.clone(), component);
                }
            }
        }
        map
    }

    /// True exporter components, grouped by the signal kind they drain
    ///
    /// Connector-as-exporter nodes are excluded; shared exporters appear
    /// once regardless of how many pipelines reference them.
    pub fn exporters(&self) -> HashMap<SignalKind, HashMap<ComponentId, Arc<dyn TelemetryExporter>>> {
        let mut map: HashMap<SignalKind, HashMap<ComponentId, Arc<dyn TelemetryExporter>>> =
            HashMap::new();
        for node in self.nodes.values() {
            if let NodeKey::Exporter { signal, id } = node.key() {
                if let Some(component) = node.exporter() {
                    map.entry(*signal).or_default().insert(id.clone(), component);
                }
            }
        }
        map
    }

    /// Per-pipeline views with the capability flag and role-grouped nodes
    pub fn pipelines(&self) -> Vec<PipelineView> {
        self.pipelines
            .iter()
            .map(|(id, nodes)| PipelineView {
                id: id.clone(),
                mutates_data: nodes.mutates_data,
                receivers: self.keys_of(&nodes.receivers),
                processors: self.keys_of(&nodes.processors),
                exporters: self.keys_of(&nodes.exporters),
            })
            .collect()
    }

    /// View of a single pipeline, if it exists
    pub fn pipeline(&self, id: &PipelineId) -> Option<PipelineView> {
        self.pipelines().into_iter().find(|view| view.id == *id)
    }

    fn keys_of(&self, ids: &[NodeId]) -> Vec<NodeKey> {
        ids.iter()
            .filter_map(|id| self.nodes.get(id))
            .map(|node| node.key().clone())
            .collect()
    }

    fn node(&self, id: &NodeId) -> GraphResult<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::internal(format!("unknown node {id}")))
    }
}

impl std::fmt::Debug for PipelineGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineGraph")
            .field("nodes", &self.nodes.len())
            .field("pipelines", &self.pipelines.len())
            .finish()
    }
}
