//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Pipeline configuration for the telemetry pipeline graph
//!
//! This module provides the declarative pipeline description consumed by
//! the graph builder. Parsing configuration files into these structures is
//! the caller's concern; the types here only define the schema.

use serde::{Deserialize, Serialize};

use crate::types::ComponentId;

/// Declarative description of one pipeline
///
/// Each list is ordered. Receiver and exporter entries may reference a
/// connector id, in which case the component bridges this pipeline to
/// another one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Receiver ids feeding the pipeline
    pub receivers: Vec<ComponentId>,

    /// Processor ids applied in order
    #[serde(default)]
    pub processors: Vec<ComponentId>,

    /// Exporter ids draining the pipeline
    pub exporters: Vec<ComponentId>,
}

impl PipelineConfig {
    /// Create a pipeline configuration from ordered component lists
    pub fn new(
        receivers: Vec<ComponentId>,
        processors: Vec<ComponentId>,
        exporters: Vec<ComponentId>,
    ) -> Self {
        Self {
            receivers,
            processors,
            exporters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_default_processors() {
        let cfg: PipelineConfig = serde_json::from_value(serde_json::json!({
            "receivers": ["otlp", "otlp/secondary"],
            "exporters": ["debug"],
        }))
        .unwrap();

        assert_eq!(
            cfg.receivers,
            vec![
                ComponentId::new("otlp"),
                ComponentId::with_name("otlp", "secondary")
            ]
        );
        assert!(cfg.processors.is_empty());
        assert_eq!(cfg.exporters, vec![ComponentId::new("debug")]);
    }

    #[test]
    fn test_round_trip() {
        let cfg = PipelineConfig::new(
            vec![ComponentId::new("otlp")],
            vec![ComponentId::with_name("batch", "mutate")],
            vec![ComponentId::new("debug")],
        );
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
