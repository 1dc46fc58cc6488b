//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Telemetry consumer trait for the telemetry pipeline graph
//!
//! This module provides the interface through which payloads move along
//! graph edges. Every node exposes a consumer to its upstream neighbors;
//! producers call `consume` on the caller's task, so backpressure is the
//! return value of the call chain.

use async_trait::async_trait;

use crate::error::GraphResult;
use crate::types::TelemetryPayload;

/// Capabilities a consumer advertises to its producers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumerCapabilities {
    /// Whether the consumer mutates payloads in place
    ///
    /// Producers that fan out to several consumers use this flag to decide
    /// which branches need a defensive copy.
    pub mutates_data: bool,
}

impl ConsumerCapabilities {
    /// Capabilities of a consumer that mutates payloads
    pub fn mutating() -> Self {
        Self { mutates_data: true }
    }
}

/// Consumer of telemetry payloads
#[async_trait]
pub trait TelemetryConsumer: Send + Sync {
    /// Get the consumer capabilities
    fn capabilities(&self) -> ConsumerCapabilities {
        ConsumerCapabilities::default()
    }

    /// Consume a telemetry payload
    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()>;
}
