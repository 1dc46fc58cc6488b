//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Capabilities node consumer for the telemetry pipeline graph
//!
//! The capabilities node is a pass-through sitting between a pipeline's
//! sources and its processor chain. Its only job is to advertise the
//! aggregate mutates-data flag of the pipeline so that upstream fan-out
//! can decide which branches need a payload copy.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GraphResult;
use crate::traits::{ConsumerCapabilities, TelemetryConsumer};
use crate::types::TelemetryPayload;

/// Pass-through consumer advertising a pipeline's aggregate capabilities
pub(crate) struct CapabilityConsumer {
    capabilities: ConsumerCapabilities,
    next: Arc<dyn TelemetryConsumer>,
}

impl CapabilityConsumer {
    /// Wrap the next consumer with fixed capabilities
    pub(crate) fn new(capabilities: ConsumerCapabilities, next: Arc<dyn TelemetryConsumer>) -> Self {
        Self { capabilities, next }
    }
}

#[async_trait]
impl TelemetryConsumer for CapabilityConsumer {
    fn capabilities(&self) -> ConsumerCapabilities {
        self.capabilities
    }

    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()> {
        self.next.consume(payload).await
    }
}
