//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Error types for the telemetry pipeline graph
//!
//! Build-time errors carry fixed message forms because callers (and the
//! integration tests) match on them verbatim.

use thiserror::Error;

use crate::types::{ComponentId, SignalKind};

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Main error type for the pipeline graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// A component id is referenced by a pipeline but has no configuration
    #[error("{role} \"{id}\" is not configured")]
    NotConfigured {
        role: &'static str,
        id: ComponentId,
    },

    /// No factory is registered for the component type
    #[error("{role} factory not available for: \"{component_type}\"")]
    FactoryNotAvailable {
        role: &'static str,
        component_type: String,
    },

    /// A factory does not implement the requested signal kind
    #[error("telemetry type is not supported")]
    SignalNotSupported,

    /// Component instantiation failed while building a pipeline
    #[error("failed to create \"{id}\" {role}, in pipeline \"{pipeline}\": {source}")]
    BuildFailed {
        id: ComponentId,
        role: &'static str,
        pipeline: String,
        source: Box<GraphError>,
    },

    /// Connector instantiation failed for a (from, to) signal pair
    #[error("connector \"{id}\" cannot connect from {from} to {to}: {source}")]
    CannotConnect {
        id: ComponentId,
        from: SignalKind,
        to: SignalKind,
        source: Box<GraphError>,
    },

    /// The global component graph contains at least one cycle
    #[error("topo: no topological ordering: {0}")]
    Cycle(String),

    /// Configuration errors (malformed identifiers, invalid pipeline shapes)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A consumer rejected a payload on the data path
    #[error("Consume error: {message}")]
    Consume { message: String },

    /// Internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GraphError {
    /// Create a not-configured error for a component reference
    pub fn not_configured(role: &'static str, id: &ComponentId) -> Self {
        GraphError::NotConfigured {
            role,
            id: id.clone(),
        }
    }

    /// Create a factory-not-available error for a component type
    pub fn factory_not_available(role: &'static str, component_type: impl Into<String>) -> Self {
        GraphError::FactoryNotAvailable {
            role,
            component_type: component_type.into(),
        }
    }

    /// Wrap a component creation failure with its pipeline context
    pub fn build_failed(
        id: &ComponentId,
        role: &'static str,
        pipeline: impl Into<String>,
        source: GraphError,
    ) -> Self {
        GraphError::BuildFailed {
            id: id.clone(),
            role,
            pipeline: pipeline.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a connector creation failure with its signal pair
    pub fn cannot_connect(
        id: &ComponentId,
        from: SignalKind,
        to: SignalKind,
        source: GraphError,
    ) -> Self {
        GraphError::CannotConnect {
            id: id.clone(),
            from,
            to,
            source: Box::new(source),
        }
    }

    /// Create a cycle error from a pre-formatted component listing
    pub fn cycle(message: impl Into<String>) -> Self {
        GraphError::Cycle(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        GraphError::Configuration {
            message: message.into(),
        }
    }

    /// Create a consume error
    pub fn consume(message: impl Into<String>) -> Self {
        GraphError::Consume {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        GraphError::Internal {
            message: message.into(),
        }
    }

    /// Check if the error was raised before any component was constructed
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            GraphError::NotConfigured { .. }
                | GraphError::FactoryNotAvailable { .. }
                | GraphError::SignalNotSupported
                | GraphError::BuildFailed { .. }
                | GraphError::CannotConnect { .. }
                | GraphError::Cycle(_)
                | GraphError::Configuration { .. }
        )
    }
}
