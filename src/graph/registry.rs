//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Factory registries for the telemetry pipeline graph
//!
//! One registry per component role, each pairing the factories (keyed by
//! component type) with the per-instance configurations (keyed by
//! component id). The registries own the two lookups every instantiation
//! goes through; their error strings are part of the public contract.
//! Configuration is checked before the factory, so a reference that is
//! missing both reports "is not configured".

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{GraphError, GraphResult};
use crate::traits::{
    ComponentConfig, ConnectorFactory, ConnectorSettings, ExporterFactory, ExporterSettings,
    ProcessorFactory, ProcessorSettings, ReceiverFactory, ReceiverSettings, TelemetryConnector,
    TelemetryConsumer, TelemetryExporter, TelemetryProcessor, TelemetryReceiver,
};
use crate::types::ComponentId;

/// Registry of receiver factories and configurations
#[derive(Default)]
pub struct ReceiverRegistry {
    factories: HashMap<String, Arc<dyn ReceiverFactory>>,
    configs: HashMap<ComponentId, Arc<dyn ComponentConfig>>,
}

impl ReceiverRegistry {
    /// Create a registry from factories and per-instance configurations
    pub fn new(
        factories: HashMap<String, Arc<dyn ReceiverFactory>>,
        configs: HashMap<ComponentId, Arc<dyn ComponentConfig>>,
    ) -> Self {
        Self { factories, configs }
    }

    pub(crate) async fn create(
        &self,
        settings: ReceiverSettings,
        next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryReceiver>> {
        let config = self
            .configs
            .get(&settings.id)
            .ok_or_else(|| GraphError::not_configured("receiver", &settings.id))?
            .clone();
        let factory = self
            .factories
            .get(settings.id.component_type())
            .ok_or_else(|| {
                GraphError::factory_not_available("receiver", settings.id.component_type())
            })?
            .clone();
        factory.create(settings, config, next).await
    }
}

/// Registry of processor factories and configurations
#[derive(Default)]
pub struct ProcessorRegistry {
    factories: HashMap<String, Arc<dyn ProcessorFactory>>,
    configs: HashMap<ComponentId, Arc<dyn ComponentConfig>>,
}

impl ProcessorRegistry {
    /// Create a registry from factories and per-instance configurations
    pub fn new(
        factories: HashMap<String, Arc<dyn ProcessorFactory>>,
        configs: HashMap<ComponentId, Arc<dyn ComponentConfig>>,
    ) -> Self {
        Self { factories, configs }
    }

    pub(crate) async fn create(
        &self,
        settings: ProcessorSettings,
        next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryProcessor>> {
        let config = self
            .configs
            .get(&settings.id)
            .ok_or_else(|| GraphError::not_configured("processor", &settings.id))?
            .clone();
        let factory = self
            .factories
            .get(settings.id.component_type())
            .ok_or_else(|| {
                GraphError::factory_not_available("processor", settings.id.component_type())
            })?
            .clone();
        factory.create(settings, config, next).await
    }
}

/// Registry of exporter factories and configurations
#[derive(Default)]
pub struct ExporterRegistry {
    factories: HashMap<String, Arc<dyn ExporterFactory>>,
    configs: HashMap<ComponentId, Arc<dyn ComponentConfig>>,
}

impl ExporterRegistry {
    /// Create a registry from factories and per-instance configurations
    pub fn new(
        factories: HashMap<String, Arc<dyn ExporterFactory>>,
        configs: HashMap<ComponentId, Arc<dyn ComponentConfig>>,
    ) -> Self {
        Self { factories, configs }
    }

    pub(crate) async fn create(
        &self,
        settings: ExporterSettings,
    ) -> GraphResult<Arc<dyn TelemetryExporter>> {
        let config = self
            .configs
            .get(&settings.id)
            .ok_or_else(|| GraphError::not_configured("exporter", &settings.id))?
            .clone();
        let factory = self
            .factories
            .get(settings.id.component_type())
            .ok_or_else(|| {
                GraphError::factory_not_available("exporter", settings.id.component_type())
            })?
            .clone();
        factory.create(settings, config).await
    }
}

/// Registry of connector factories and configurations
///
/// Also answers whether a component id refers to a connector at all: an id
/// present in the connector configurations resolves to connector nodes
/// when it appears in a pipeline's receiver or exporter list.
#[derive(Default)]
pub struct ConnectorRegistry {
    factories: HashMap<String, Arc<dyn ConnectorFactory>>,
    configs: HashMap<ComponentId, Arc<dyn ComponentConfig>>,
}

impl ConnectorRegistry {
    /// Create a registry from factories and per-instance configurations
    pub fn new(
        factories: HashMap<String, Arc<dyn ConnectorFactory>>,
        configs: HashMap<ComponentId, Arc<dyn ComponentConfig>>,
    ) -> Self {
        Self { factories, configs }
    }

    /// Check whether the id is configured as a connector
    pub(crate) fn is_configured(&self, id: &ComponentId) -> bool {
        self.configs.contains_key(id)
    }

    /// Require a factory for the connector's type
    ///
    /// Checked at node-creation time, before any component is built.
    pub(crate) fn ensure_factory(&self, id: &ComponentId) -> GraphResult<()> {
        if self.factories.contains_key(id.component_type()) {
            Ok(())
        } else {
            Err(GraphError::factory_not_available(
                "connector",
                id.component_type(),
            ))
        }
    }

    pub(crate) async fn create(
        &self,
        settings: ConnectorSettings,
        next: Arc<dyn TelemetryConsumer>,
    ) -> GraphResult<Arc<dyn TelemetryConnector>> {
        let config = self
            .configs
            .get(&settings.id)
            .ok_or_else(|| GraphError::not_configured("connector", &settings.id))?
            .clone();
        let factory = self
            .factories
            .get(settings.id.component_type())
            .ok_or_else(|| {
                GraphError::factory_not_available("connector", settings.id.component_type())
            })?
            .clone();
        factory.create(settings, config, next).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ExampleReceiverConfig, ExampleReceiverFactory};
    use crate::types::SignalKind;
    use async_trait::async_trait;

    struct NullConsumer;

    #[async_trait]
    impl TelemetryConsumer for NullConsumer {
        async fn consume(&self, _payload: crate::types::TelemetryPayload) -> GraphResult<()> {
            Ok(())
        }
    }

    fn settings(id: ComponentId) -> ReceiverSettings {
        ReceiverSettings {
            id,
            signal: SignalKind::Traces,
        }
    }

    #[tokio::test]
    async fn test_missing_config_wins_over_missing_factory() {
        let registry = ReceiverRegistry::default();
        let err = registry
            .create(settings(ComponentId::new("unknown")), Arc::new(NullConsumer))
            .await
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "receiver \"unknown\" is not configured");
    }

    #[tokio::test]
    async fn test_missing_factory() {
        let mut configs: HashMap<ComponentId, Arc<dyn ComponentConfig>> = HashMap::new();
        configs.insert(
            ComponentId::new("unknown"),
            Arc::new(ExampleReceiverConfig::default()),
        );
        let registry = ReceiverRegistry::new(HashMap::new(), configs);

        let err = registry
            .create(settings(ComponentId::new("unknown")), Arc::new(NullConsumer))
            .await
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "receiver factory not available for: \"unknown\""
        );
    }

    #[tokio::test]
    async fn test_create_dispatches_to_factory() {
        let factory = Arc::new(ExampleReceiverFactory::default());
        let mut factories: HashMap<String, Arc<dyn ReceiverFactory>> = HashMap::new();
        factories.insert("examplereceiver".to_string(), factory.clone());
        let mut configs: HashMap<ComponentId, Arc<dyn ComponentConfig>> = HashMap::new();
        configs.insert(
            ComponentId::new("examplereceiver"),
            Arc::new(ExampleReceiverConfig::default()),
        );
        let registry = ReceiverRegistry::new(factories, configs);

        registry
            .create(settings(ComponentId::new("examplereceiver")), Arc::new(NullConsumer))
            .await
            .unwrap();
        assert_eq!(factory.create_count().await, 1);
    }

    #[tokio::test]
    async fn test_connector_factory_check() {
        let registry = ConnectorRegistry::default();
        assert!(!registry.is_configured(&ComponentId::new("fork")));
        let err = registry
            .ensure_factory(&ComponentId::new("unknown"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "connector factory not available for: \"unknown\""
        );
    }
}
