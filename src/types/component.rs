//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Component and pipeline identity types for the telemetry pipeline graph
//!
//! This module provides the signal kinds and the string-backed identifiers
//! used to address components and pipelines in configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Signal kinds carried by pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Traces,
    Metrics,
    Logs,
}

impl SignalKind {
    /// All signal kinds, in declaration order
    pub const ALL: [SignalKind; 3] = [SignalKind::Traces, SignalKind::Metrics, SignalKind::Logs];

    /// Get the configuration spelling of the signal kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Traces => "traces",
            SignalKind::Metrics => "metrics",
            SignalKind::Logs => "logs",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traces" => Ok(SignalKind::Traces),
            "metrics" => Ok(SignalKind::Metrics),
            "logs" => Ok(SignalKind::Logs),
            other => Err(GraphError::configuration(format!(
                "unknown signal kind: {other:?}"
            ))),
        }
    }
}

/// Component identifier: a factory type plus an optional instance name
///
/// The configuration spelling is `type` or `type/name`, e.g. `otlp` or
/// `otlp/secondary`. Two references with equal type and name address the
/// same component instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId {
    component_type: String,
    name: String,
}

impl ComponentId {
    /// Create an identifier with an empty instance name
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            name: String::new(),
        }
    }

    /// Create an identifier with an explicit instance name
    pub fn with_name(component_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            name: name.into(),
        }
    }

    /// Get the factory type
    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    /// Get the instance name (empty for unnamed instances)
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.component_type)
        } else {
            write!(f, "{}/{}", self.component_type, self.name)
        }
    }
}

impl FromStr for ComponentId {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (component_type, name) = match s.split_once('/') {
            Some((t, n)) => (t, n),
            None => (s, ""),
        };
        if component_type.is_empty() {
            return Err(GraphError::configuration(format!(
                "component id must start with a type: {s:?}"
            )));
        }
        Ok(ComponentId::with_name(component_type, name))
    }
}

impl TryFrom<String> for ComponentId {
    type Error = GraphError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> Self {
        id.to_string()
    }
}

/// Pipeline identifier: a signal kind plus an optional instance name
///
/// The configuration spelling is `signal` or `signal/name`, e.g. `traces`
/// or `traces/in`. Every pipeline carries exactly one signal kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PipelineId {
    signal: SignalKind,
    name: String,
}

impl PipelineId {
    /// Create a pipeline identifier
    pub fn new(signal: SignalKind, name: impl Into<String>) -> Self {
        Self {
            signal,
            name: name.into(),
        }
    }

    /// Create an unnamed pipeline identifier for a signal kind
    pub fn of(signal: SignalKind) -> Self {
        Self::new(signal, "")
    }

    /// Get the signal kind carried by the pipeline
    pub fn signal(&self) -> SignalKind {
        self.signal
    }

    /// Get the instance name (empty for unnamed pipelines)
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.signal)
        } else {
            write!(f, "{}/{}", self.signal, self.name)
        }
    }
}

impl FromStr for PipelineId {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (signal, name) = match s.split_once('/') {
            Some((t, n)) => (t, n),
            None => (s, ""),
        };
        Ok(PipelineId::new(signal.parse()?, name))
    }
}

impl TryFrom<String> for PipelineId {
    type Error = GraphError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PipelineId> for String {
    fn from(id: PipelineId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_kind_round_trip() {
        for signal in SignalKind::ALL {
            assert_eq!(signal.as_str().parse::<SignalKind>().unwrap(), signal);
        }
        assert!("spans".parse::<SignalKind>().is_err());
    }

    #[test]
    fn test_component_id_display() {
        assert_eq!(ComponentId::new("otlp").to_string(), "otlp");
        assert_eq!(
            ComponentId::with_name("otlp", "secondary").to_string(),
            "otlp/secondary"
        );
    }

    #[test]
    fn test_component_id_parse() {
        let id: ComponentId = "batch/2".parse().unwrap();
        assert_eq!(id.component_type(), "batch");
        assert_eq!(id.name(), "2");

        let unnamed: ComponentId = "batch".parse().unwrap();
        assert_eq!(unnamed, ComponentId::new("batch"));

        assert!("/orphan".parse::<ComponentId>().is_err());
    }

    #[test]
    fn test_pipeline_id_parse() {
        let id: PipelineId = "traces/in".parse().unwrap();
        assert_eq!(id.signal(), SignalKind::Traces);
        assert_eq!(id.name(), "in");
        assert_eq!(id.to_string(), "traces/in");

        let unnamed: PipelineId = "metrics".parse().unwrap();
        assert_eq!(unnamed, PipelineId::of(SignalKind::Metrics));

        assert!("spans/in".parse::<PipelineId>().is_err());
    }

    #[test]
    fn test_serde_string_form() {
        let id = ComponentId::with_name("otlp", "2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"otlp/2\"");
        let back: ComponentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let pid = PipelineId::new(SignalKind::Logs, "raw");
        let json = serde_json::to_string(&pid).unwrap();
        assert_eq!(json, "\"logs/raw\"");
        let back: PipelineId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pid);
    }
}
