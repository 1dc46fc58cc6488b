//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Build-time failure tests: unknown factories, unconfigured components,
//! unsupported signal kinds and cyclic graphs. The exact error strings
//! are part of the engine's contract.

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use pipeline_graph::testing::{
    ExampleConnectorConfig, ExampleConnectorFactory, ExampleExporterConfig,
    ExampleExporterFactory, ExampleProcessorConfig, ExampleProcessorFactory,
    ExampleReceiverConfig, ExampleReceiverFactory,
};
use pipeline_graph::{
    ComponentConfig, ConnectorFactory, ConnectorRegistry, ConnectorSettings, ExporterFactory,
    ExporterRegistry, ExporterSettings, GraphError, GraphResult, GraphSettings, PipelineGraph,
    ProcessorFactory, ProcessorRegistry, ProcessorSettings, ReceiverFactory, ReceiverRegistry,
    ReceiverSettings, TelemetryConnector, TelemetryConsumer, TelemetryExporter,
    TelemetryProcessor, TelemetryReceiver,
};

use common::{pipelines, TestBed};

struct BadReceiverFactory;

#[async_trait]
impl ReceiverFactory for BadReceiverFactory {
    async fn create(
        &self,
        _settings: ReceiverSettings,
        _config: Arc<dyn ComponentConfig>,
        _next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryReceiver>> {
        Err(GraphError::SignalNotSupported)
    }
}

struct BadProcessorFactory;

#[async_trait]
impl ProcessorFactory for BadProcessorFactory {
    async fn create(
        &self,
        _settings: ProcessorSettings,
        _config: Arc<dyn ComponentConfig>,
        _next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryProcessor>> {
        Err(GraphError::SignalNotSupported)
    }
}

struct BadExporterFactory;

#[async_trait]
impl ExporterFactory for BadExporterFactory {
    async fn create(
        &self,
        _settings: ExporterSettings,
        _config: Arc<dyn ComponentConfig>,
    ) -> GraphResult<Arc<dyn TelemetryExporter>> {
        Err(GraphError::SignalNotSupported)
    }
}

struct BadConnectorFactory;

#[async_trait]
impl ConnectorFactory for BadConnectorFactory {
    async fn create(
        &self,
        _settings: ConnectorSettings,
        _config: Arc<dyn ComponentConfig>,
        _next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryConnector>> {
        Err(GraphError::SignalNotSupported)
    }
}

fn config_map<C>(ids: &[&str], config: C) -> HashMap<pipeline_graph::ComponentId, Arc<dyn ComponentConfig>>
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

/// Settings with the example factories plus "bad" factories registered
/// under the `bf` type for every role
fn error_settings(
    table: &[(&str, &[&str], &[&str], &[&str])],
    receiver_cfgs: &[&str],
    processor_cfgs: &[&str],
    exporter_cfgs: &[&str],
    connector_cfgs: &[&str],
) -> GraphSettings {
    let mut receiver_factories: HashMap<String, Arc<dyn ReceiverFactory>> = HashMap::new();
    receiver_factories.insert(
        "examplereceiver".to_string(),
        Arc::new(ExampleReceiverFactory::default()),
    );
    receiver_factories.insert("bf".to_string(), Arc::new(BadReceiverFactory));

    let mut processor_factories: HashMap<String, Arc<dyn ProcessorFactory>> = HashMap::new();
    processor_factories.insert(
        "exampleprocessor".to_string(),
        Arc::new(ExampleProcessorFactory::default()),
    );
    processor_factories.insert("bf".to_string(), Arc::new(BadProcessorFactory));

    let mut exporter_factories: HashMap<String, Arc<dyn ExporterFactory>> = HashMap::new();
    exporter_factories.insert(
        "exampleexporter".to_string(),
        Arc::new(ExampleExporterFactory::default()),
    );
    exporter_factories.insert("bf".to_string(), Arc::new(BadExporterFactory));

    let mut connector_factories: HashMap<String, Arc<dyn ConnectorFactory>> = HashMap::new();
    connector_factories.insert(
        "exampleconnector".to_string(),
        Arc::new(ExampleConnectorFactory::default()),
    );
    connector_factories.insert("bf".to_string(), Arc::new(BadConnectorFactory));

    GraphSettings {
        pipelines: pipelines(table),
        receivers: ReceiverRegistry::new(
            receiver_factories,
            config_map(receiver_cfgs, ExampleReceiverConfig),
        ),
        processors: ProcessorRegistry::new(
            processor_factories,
            config_map(processor_cfgs, ExampleProcessorConfig),
        ),
        exporters: ExporterRegistry::new(
            exporter_factories,
            config_map(exporter_cfgs, ExampleExporterConfig),
        ),
        connectors: ConnectorRegistry::new(
            connector_factories,
            config_map(connector_cfgs, ExampleConnectorConfig),
        ),
    }
}

struct Case {
    name: &'static str,
    table: &'static [(
        &'static str,
        &'static [&'static str],
        &'static [&'static str],
        &'static [&'static str],
    )],
    receiver_cfgs: &'static [&'static str],
    processor_cfgs: &'static [&'static str],
    exporter_cfgs: &'static [&'static str],
    connector_cfgs: &'static [&'static str],
    expected: &'static str,
}

#[tokio::test]
async fn test_build_error_messages() {
    let cases = [
        Case {
            name: "not_supported_exporter",
            table: &[("logs", &["examplereceiver"], &[], &["bf"])],
            receiver_cfgs: &["examplereceiver"],
            processor_cfgs: &[],
            exporter_cfgs: &["bf"],
            connector_cfgs: &[],
            expected:
                "failed to create \"bf\" exporter, in pipeline \"logs/*\": telemetry type is not supported",
        },
        Case {
            name: "not_supported_processor",
            table: &[("metrics", &["examplereceiver"], &["bf"], &["exampleexporter"])],
            receiver_cfgs: &["examplereceiver"],
            processor_cfgs: &["bf"],
            exporter_cfgs: &["exampleexporter"],
            connector_cfgs: &[],
            expected:
                "failed to create \"bf\" processor, in pipeline \"metrics\": telemetry type is not supported",
        },
        Case {
            name: "not_supported_receiver",
            table: &[("traces", &["bf"], &[], &["exampleexporter"])],
            receiver_cfgs: &["bf"],
            processor_cfgs: &[],
            exporter_cfgs: &["exampleexporter"],
            connector_cfgs: &[],
            expected:
                "failed to create \"bf\" receiver, in pipeline \"traces/*\": telemetry type is not supported",
        },
        Case {
            name: "not_supported_connector",
            table: &[
                ("traces/in", &["examplereceiver"], &[], &["bf"]),
                ("metrics/out", &["bf"], &[], &["exampleexporter"]),
            ],
            receiver_cfgs: &["examplereceiver"],
            processor_cfgs: &[],
            exporter_cfgs: &["exampleexporter"],
            connector_cfgs: &["bf"],
            expected:
                "connector \"bf\" cannot connect from traces to metrics: telemetry type is not supported",
        },
        Case {
            name: "unknown_exporter_config",
            table: &[(
                "traces",
                &["examplereceiver"],
                &[],
                &["exampleexporter", "exampleexporter/9"],
            )],
            receiver_cfgs: &["examplereceiver"],
            processor_cfgs: &[],
            exporter_cfgs: &["exampleexporter"],
            connector_cfgs: &[],
            expected:
                "failed to create \"exampleexporter/9\" exporter, in pipeline \"traces/*\": exporter \"exampleexporter/9\" is not configured",
        },
        Case {
            name: "unknown_exporter_factory",
            table: &[("traces", &["examplereceiver"], &[], &["unknown"])],
            receiver_cfgs: &["examplereceiver"],
            processor_cfgs: &[],
            exporter_cfgs: &["unknown"],
            connector_cfgs: &[],
            expected:
                "failed to create \"unknown\" exporter, in pipeline \"traces/*\": exporter factory not available for: \"unknown\"",
        },
        Case {
            name: "unknown_processor_config",
            table: &[(
                "metrics",
                &["examplereceiver"],
                &["exampleprocessor", "exampleprocessor/9"],
                &["exampleexporter"],
            )],
            receiver_cfgs: &["examplereceiver"],
            processor_cfgs: &["exampleprocessor"],
            exporter_cfgs: &["exampleexporter"],
            connector_cfgs: &[],
            expected:
                "failed to create \"exampleprocessor/9\" processor, in pipeline \"metrics\": processor \"exampleprocessor/9\" is not configured",
        },
        Case {
            name: "unknown_processor_factory",
            table: &[("metrics", &["examplereceiver"], &["unknown"], &["exampleexporter"])],
            receiver_cfgs: &["examplereceiver"],
            processor_cfgs: &["unknown"],
            exporter_cfgs: &["exampleexporter"],
            connector_cfgs: &[],
            expected:
                "failed to create \"unknown\" processor, in pipeline \"metrics\": processor factory not available for: \"unknown\"",
        },
        Case {
            name: "unknown_receiver_config",
            table: &[(
                "logs",
                &["examplereceiver", "examplereceiver/9"],
                &[],
                &["exampleexporter"],
            )],
            receiver_cfgs: &["examplereceiver"],
            processor_cfgs: &[],
            exporter_cfgs: &["exampleexporter"],
            connector_cfgs: &[],
            expected:
                "failed to create \"examplereceiver/9\" receiver, in pipeline \"logs/*\": receiver \"examplereceiver/9\" is not configured",
        },
        Case {
            name: "unknown_receiver_factory",
            table: &[("logs", &["unknown"], &[], &["exampleexporter"])],
            receiver_cfgs: &["unknown"],
            processor_cfgs: &[],
            exporter_cfgs: &["exampleexporter"],
            connector_cfgs: &[],
            expected:
                "failed to create \"unknown\" receiver, in pipeline \"logs/*\": receiver factory not available for: \"unknown\"",
        },
        Case {
            name: "unknown_connector_factory",
            table: &[
                ("traces/in", &["examplereceiver"], &[], &["unknown"]),
                ("traces/out", &["unknown"], &[], &["exampleexporter"]),
            ],
            receiver_cfgs: &["examplereceiver"],
            processor_cfgs: &[],
            exporter_cfgs: &["exampleexporter"],
            connector_cfgs: &["unknown"],
            expected: "connector factory not available for: \"unknown\"",
        },
    ];

    for case in &cases {
        let settings = error_settings(
            case.table,
            case.receiver_cfgs,
            case.processor_cfgs,
            case.exporter_cfgs,
            case.connector_cfgs,
        );
        let err = PipelineGraph::build(settings)
            .await
            .expect_err(case.name);
        assert_eq!(err.to_string(), case.expected, "case {}", case.name);
    }
}

#[tokio::test]
async fn test_cycle_via_connector_loopback() {
    // The same connector as both receiver and exporter of one pipeline.
    let bed = TestBed::default();
    let configs = pipelines(&[(
        "traces",
        &["exampleconnector/loop"],
        &[],
        &["exampleconnector/loop"],
    )]);

    let err = PipelineGraph::build(bed.settings(configs)).await.unwrap_err();
    assert!(
        err.to_string()
            .starts_with("topo: no topological ordering: cyclic components"),
        "unexpected message: {err}"
    );

    // The cycle was detected before any component was constructed.
    assert_eq!(bed.connectors.create_count().await, 0);
    assert_eq!(bed.receivers.create_count().await, 0);
    assert_eq!(bed.exporters.create_count().await, 0);
}

#[tokio::test]
async fn test_deep_cycle_reports_node_count() {
    // Three pipelines chained into a ring through three connectors, with
    // two processors pushing the cyclic component past the listing cap:
    // 3 connectors + 3 capabilities + 3 fan-outs + 2 processors.
    let bed = TestBed::default();
    let configs = pipelines(&[
        (
            "traces/a",
            &["exampleconnector/z"],
            &["exampleprocessor"],
            &["exampleconnector/x"],
        ),
        (
            "traces/b",
            &["exampleconnector/x"],
            &["exampleprocessor"],
            &["exampleconnector/y"],
        ),
        ("traces/c", &["exampleconnector/y"], &[], &["exampleconnector/z"]),
    ]);

    let err = PipelineGraph::build(bed.settings(configs)).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "topo: no topological ordering: 11 nodes in 1 cyclic components"
    );
}
