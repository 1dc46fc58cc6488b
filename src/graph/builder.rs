//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Graph builder for the telemetry pipeline graph
//!
//! Builds the global component DAG from the pipeline configurations in
//! three phases: structural node and edge creation (keying collapses
//! shared references), cycle check, then component instantiation in
//! reverse topological order so every node can be bound to its already
//! constructed downstream consumers.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::{GraphError, GraphResult};
use crate::traits::{
    ConnectorSettings, ConsumerCapabilities, ExporterSettings, ProcessorSettings,
    ReceiverSettings, TelemetryConsumer,
};
use crate::types::{ComponentId, PipelineId, SignalKind};

use super::capabilities::CapabilityConsumer;
use super::fanout;
use super::node::{Node, NodeId, NodeKey};
use super::registry::{ConnectorRegistry, ExporterRegistry, ProcessorRegistry, ReceiverRegistry};
use super::topo;
use super::{PipelineGraph, PipelineNodes};

/// Inputs to the graph builder
///
/// The pipeline map and the four factory registries. Everything else the
/// engine needs is derived from these.
pub struct GraphSettings {
    /// Pipeline configurations keyed by pipeline id
    pub pipelines: BTreeMap<PipelineId, PipelineConfig>,

    /// Receiver factories and configurations
    pub receivers: ReceiverRegistry,

    /// Processor factories and configurations
    pub processors: ProcessorRegistry,

    /// Exporter factories and configurations
    pub exporters: ExporterRegistry,

    /// Connector factories and configurations
    pub connectors: ConnectorRegistry,
}

pub(crate) async fn build(settings: GraphSettings) -> GraphResult<PipelineGraph> {
    let mut builder = GraphBuilder::default();
    builder.create_nodes(&settings)?;

    // No component is constructed before the graph is known to be acyclic.
    let order = topo::sort(&builder.nodes, &builder.edges)?;
    builder.instantiate(&settings, &order).await?;

    info!(
        "built pipeline graph: {} pipelines, {} nodes, {} edges",
        builder.pipelines.len(),
        builder.nodes.len(),
        builder.edges.len()
    );

    Ok(PipelineGraph {
        nodes: builder.nodes,
        order,
        pipelines: builder.pipelines,
    })
}

#[derive(Default)]
struct GraphBuilder {
    nodes: HashMap<NodeId, Node>,
    edges: Vec<(NodeId, NodeId)>,
    successors: HashMap<NodeId, Vec<NodeId>>,
    pipelines: BTreeMap<PipelineId, PipelineNodes>,
}

impl GraphBuilder {
    fn add_node(&mut self, key: NodeKey) -> NodeId {
        let id = key.node_id();
        self.nodes.entry(id).or_insert_with(|| Node::new(key));
        id
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId) {
        let successors = self.successors.entry(from).or_default();
        if !successors.contains(&to) {
            successors.push(to);
            self.edges.push((from, to));
        }
    }

    /// Walk every pipeline and lay down nodes and edges, without
    /// instantiating anything
    fn create_nodes(&mut self, settings: &GraphSettings) -> GraphResult<()> {
        for (pipeline_id, config) in &settings.pipelines {
            debug!("creating nodes for pipeline \"{pipeline_id}\"");

            let capabilities = self.add_node(NodeKey::Capabilities {
                pipeline: pipeline_id.clone(),
            });
            let fanout = self.add_node(NodeKey::Fanout {
                pipeline: pipeline_id.clone(),
            });
            let mut pipeline_nodes = PipelineNodes::default();

            for receiver_id in &config.receivers {
                if settings.connectors.is_configured(receiver_id) {
                    settings.connectors.ensure_factory(receiver_id)?;
                    for from in connector_source_signals(&settings.pipelines, receiver_id) {
                        let node = self.add_node(NodeKey::Connector {
                            id: receiver_id.clone(),
                            from,
                            to: pipeline_id.signal(),
                        });
                        self.add_edge(node, capabilities);
                        if !pipeline_nodes.receivers.contains(&node) {
                            pipeline_nodes.receivers.push(node);
                        }
                    }
                } else {
                    let node = self.add_node(NodeKey::Receiver {
                        signal: pipeline_id.signal(),
                        id: receiver_id.clone(),
                    });
                    self.add_edge(node, capabilities);
                    if !pipeline_nodes.receivers.contains(&node) {
                        pipeline_nodes.receivers.push(node);
                    }
                }
            }

            let mut upstream = capabilities;
            for processor_id in &config.processors {
                let node = self.add_node(NodeKey::Processor {
                    pipeline: pipeline_id.clone(),
                    id: processor_id.clone(),
                });
                self.add_edge(upstream, node);
                pipeline_nodes.processors.push(node);
                upstream = node;
            }
            self.add_edge(upstream, fanout);

            for exporter_id in &config.exporters {
                if settings.connectors.is_configured(exporter_id) {
                    settings.connectors.ensure_factory(exporter_id)?;
                    for to in connector_sink_signals(&settings.pipelines, exporter_id) {
                        let node = self.add_node(NodeKey::Connector {
                            id: exporter_id.clone(),
                            from: pipeline_id.signal(),
                            to,
                        });
                        self.add_edge(fanout, node);
                        if !pipeline_nodes.exporters.contains(&node) {
                            pipeline_nodes.exporters.push(node);
                        }
                    }
                } else {
                    let node = self.add_node(NodeKey::Exporter {
                        signal: pipeline_id.signal(),
                        id: exporter_id.clone(),
                    });
                    self.add_edge(fanout, node);
                    if !pipeline_nodes.exporters.contains(&node) {
                        pipeline_nodes.exporters.push(node);
                    }
                }
            }

            self.pipelines.insert(pipeline_id.clone(), pipeline_nodes);
        }
        Ok(())
    }

    /// Instantiate components sinks-first so that every upstream node can
    /// be handed its downstream consumer
    async fn instantiate(&mut self, settings: &GraphSettings, order: &[NodeId]) -> GraphResult<()> {
        for node_id in order.iter().rev() {
            let key = self
                .nodes
                .get(node_id)
                .ok_or_else(|| GraphError::internal(format!("unknown node {node_id}")))?
                .key()
                .clone();
            debug!("instantiating {}", key.describe());

            match key {
                NodeKey::Exporter { signal, id } => {
                    let exporter = settings
                        .exporters
                        .create(ExporterSettings {
                            id: id.clone(),
                            signal,
                        })
                        .await
                        .map_err(|e| {
                            GraphError::build_failed(&id, "exporter", format!("{signal}/*"), e)
                        })?;
                    if let Some(node) = self.nodes.get_mut(node_id) {
                        node.set_exporter(exporter);
                    }
                }
                NodeKey::Connector { id, from, to } => {
                    let next = fanout::fan_out(self.next_consumers(*node_id)?)?;
                    let connector = settings
                        .connectors
                        .create(
                            ConnectorSettings {
                                id: id.clone(),
                                from,
                                to,
                            },
                            next,
                        )
                        .await
                        .map_err(|e| GraphError::cannot_connect(&id, from, to, e))?;
                    if let Some(node) = self.nodes.get_mut(node_id) {
                        node.set_connector(connector);
                    }
                }
                NodeKey::Fanout { .. } => {
                    let consumer = fanout::fan_out(self.next_consumers(*node_id)?)?;
                    if let Some(node) = self.nodes.get_mut(node_id) {
                        node.set_fanout(consumer);
                    }
                }
                NodeKey::Processor { pipeline, id } => {
                    let next = self.single_next(*node_id)?;
                    let processor = settings
                        .processors
                        .create(
                            ProcessorSettings {
                                id: id.clone(),
                                pipeline: pipeline.clone(),
                            },
                            next,
                        )
                        .await
                        .map_err(|e| {
                            GraphError::build_failed(&id, "processor", pipeline.to_string(), e)
                        })?;
                    if let Some(node) = self.nodes.get_mut(node_id) {
                        node.set_processor(processor);
                    }
                }
                NodeKey::Capabilities { pipeline } => {
                    // Processors are downstream of this node, so they are
                    // already constructed and can be asked for their flags.
                    let mut capabilities = ConsumerCapabilities::default();
                    let processor_nodes = self
                        .pipelines
                        .get(&pipeline)
                        .map(|p| p.processors.clone())
                        .unwrap_or_default();
                    for processor_id in processor_nodes {
                        let consumer = self
                            .nodes
                            .get(&processor_id)
                            .ok_or_else(|| {
                                GraphError::internal(format!("unknown node {processor_id}"))
                            })?
                            .consumer()?;
                        capabilities.mutates_data |= consumer.capabilities().mutates_data;
                    }

                    let next = self.single_next(*node_id)?;
                    if let Some(node) = self.nodes.get_mut(node_id) {
                        node.set_capabilities(Arc::new(CapabilityConsumer::new(
                            capabilities,
                            next,
                        )));
                    }
                    if let Some(pipeline_nodes) = self.pipelines.get_mut(&pipeline) {
                        pipeline_nodes.mutates_data = capabilities.mutates_data;
                    }
                }
                NodeKey::Receiver { signal, id } => {
                    let next = fanout::fan_out(self.next_consumers(*node_id)?)?;
                    let receiver = settings
                        .receivers
                        .create(
                            ReceiverSettings {
                                id: id.clone(),
                                signal,
                            },
                            next,
                        )
                        .await
                        .map_err(|e| {
                            GraphError::build_failed(&id, "receiver", format!("{signal}/*"), e)
                        })?;
                    if let Some(node) = self.nodes.get_mut(node_id) {
                        node.set_receiver(receiver);
                    }
                }
            }
        }
        Ok(())
    }

    /// Collect the consumers of a node's successors, in configuration order
    fn next_consumers(&self, node_id: NodeId) -> GraphResult<Vec<Arc<dyn TelemetryConsumer>>> {
        let successors = self.successors.get(&node_id).cloned().unwrap_or_default();
        let mut consumers = Vec::with_capacity(successors.len());
        for successor in &successors {
            let node = self
                .nodes
                .get(successor)
                .ok_or_else(|| GraphError::internal(format!("unknown node {successor}")))?;
            consumers.push(node.consumer()?);
        }
        Ok(consumers)
    }

    fn single_next(&self, node_id: NodeId) -> GraphResult<Arc<dyn TelemetryConsumer>> {
        let mut consumers = self.next_consumers(node_id)?;
        if consumers.len() != 1 {
            return Err(GraphError::internal(format!(
                "expected exactly one downstream consumer, found {}",
                consumers.len()
            )));
        }
        Ok(consumers.swap_remove(0))
    }
}

/// Signal kinds of the pipelines that use the connector as an exporter
fn connector_source_signals(
    pipelines: &BTreeMap<PipelineId, PipelineConfig>,
    id: &ComponentId,
) -> Vec<SignalKind> {
    let mut signals = Vec::new();
    for (pipeline_id, config) in pipelines {
        if config.exporters.contains(id) && !signals.contains(&pipeline_id.signal()) {
            signals.push(pipeline_id.signal());
        }
    }
    signals
}

/// Signal kinds of the pipelines that use the connector as a receiver
fn connector_sink_signals(
    pipelines: &BTreeMap<PipelineId, PipelineConfig>,
    id: &ComponentId,
) -> Vec<SignalKind> {
    let mut signals = Vec::new();
    for (pipeline_id, config) in pipelines {
        if config.receivers.contains(id) && !signals.contains(&pipeline_id.signal()) {
            signals.push(pipeline_id.signal());
        }
    }
    signals
}
