//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Shared helpers for the pipeline graph integration tests

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use pipeline_graph::testing::{
    ExampleConnectorConfig, ExampleConnectorFactory, ExampleExporterConfig,
    ExampleExporterFactory, ExampleProcessorConfig, ExampleProcessorFactory,
    ExampleReceiverConfig, ExampleReceiverFactory,
};
use pipeline_graph::{
    ComponentConfig, ComponentId, ConnectorFactory, ConnectorRegistry, ExporterFactory,
    ExporterRegistry, GraphSettings, PipelineConfig, PipelineId, ProcessorFactory,
    ProcessorRegistry, ReceiverFactory, ReceiverRegistry,
};

pub const CONNECTOR_TYPE: &str = "exampleconnector";

/// Example factories shared by one test scenario
///
/// The factories remember what they create, so tests can reach concrete
/// component instances after the graph is built.
#[derive(Default)]
pub struct TestBed {
    pub receivers: Arc<ExampleReceiverFactory>,
    pub processors: Arc<ExampleProcessorFactory>,
    pub exporters: Arc<ExampleExporterFactory>,
    pub connectors: Arc<ExampleConnectorFactory>,
}

impl TestBed {
    /// Graph settings wiring the example factories and a generous set of
    /// pre-registered component configurations
    pub fn settings(&self, pipelines: BTreeMap<PipelineId, PipelineConfig>) -> GraphSettings {
        let mut receiver_factories: HashMap<String, Arc<dyn ReceiverFactory>> = HashMap::new();
        receiver_factories.insert("examplereceiver".to_string(), self.receivers.clone());

        let mut processor_factories: HashMap<String, Arc<dyn ProcessorFactory>> = HashMap::new();
        processor_factories.insert("exampleprocessor".to_string(), self.processors.clone());

        let mut exporter_factories: HashMap<String, Arc<dyn ExporterFactory>> = HashMap::new();
        exporter_factories.insert("exampleexporter".to_string(), self.exporters.clone());

        let mut connector_factories: HashMap<String, Arc<dyn ConnectorFactory>> = HashMap::new();
        connector_factories.insert(CONNECTOR_TYPE.to_string(), self.connectors.clone());

        GraphSettings {
            pipelines,
            receivers: ReceiverRegistry::new(
                receiver_factories,
                configs(
                    &["examplereceiver", "examplereceiver/1"],
                    ExampleReceiverConfig,
                ),
            ),
            processors: ProcessorRegistry::new(
                processor_factories,
                configs(
                    &["exampleprocessor", "exampleprocessor/mutate"],
                    ExampleProcessorConfig,
                ),
            ),
            exporters: ExporterRegistry::new(
                exporter_factories,
                configs(
                    &["exampleexporter", "exampleexporter/1"],
                    ExampleExporterConfig,
                ),
            ),
            connectors: ConnectorRegistry::new(
                connector_factories,
                configs(
                    &[
                        "exampleconnector",
                        "exampleconnector/fork",
                        "exampleconnector/merge",
                        "exampleconnector/x",
                        "exampleconnector/y",
                        "exampleconnector/z",
                        "exampleconnector/loop",
                    ],
                    ExampleConnectorConfig,
                ),
            ),
        }
    }
}

fn configs<C>(ids: &[&str], config: C) -> HashMap<ComponentId, Arc<dyn ComponentConfig>>
where
    C: ComponentConfig + Clone + 'static,
{
    ids.iter()
        .map(|id| {
            (
                id.parse().unwrap(),
                Arc::new(config.clone()) as Arc<dyn ComponentConfig>,
            )
        })
        .collect()
}

/// Parse a pipeline table: (pipeline, receivers, processors, exporters)
pub fn pipelines(
    entries: &[(&str, &[&str], &[&str], &[&str])],
) -> BTreeMap<PipelineId, PipelineConfig> {
    entries
        .iter()
        .map(|(id, receivers, processors, exporters)| {
            (
                id.parse().unwrap(),
                PipelineConfig::new(
                    receivers.iter().map(|r| r.parse().unwrap()).collect(),
                    processors.iter().map(|p| p.parse().unwrap()).collect(),
                    exporters.iter().map(|e| e.parse().unwrap()).collect(),
                ),
            )
        })
        .collect()
}

/// Expected receiver and exporter node counts for one pipeline
///
/// One node per plain receiver or exporter. A connector used as a
/// receiver contributes one node per signal kind in which it is used as
/// an exporter, and vice versa.
pub fn expected_instances(
    configs: &BTreeMap<PipelineId, PipelineConfig>,
    pipeline: &PipelineId,
) -> (usize, usize) {
    let config = &configs[pipeline];
    let mut receivers = 0;
    for receiver_id in &config.receivers {
        if receiver_id.component_type() != CONNECTOR_TYPE {
            receivers += 1;
            continue;
        }
        let mut kinds = Vec::new();
        for (other_id, other_cfg) in configs {
            if other_cfg.exporters.contains(receiver_id) && !kinds.contains(&other_id.signal()) {
                kinds.push(other_id.signal());
            }
        }
        receivers += kinds.len();
    }

    let mut exporters = 0;
    for exporter_id in &config.exporters {
        if exporter_id.component_type() != CONNECTOR_TYPE {
            exporters += 1;
            continue;
        }
        let mut kinds = Vec::new();
        for (other_id, other_cfg) in configs {
            if other_cfg.receivers.contains(exporter_id) && !kinds.contains(&other_id.signal()) {
                kinds.push(other_id.signal());
            }
        }
        exporters += kinds.len();
    }

    (receivers, exporters)
}
