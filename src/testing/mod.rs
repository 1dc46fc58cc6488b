//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Example components for testing the telemetry pipeline graph
//!
//! This module provides minimal receiver, processor, exporter and
//! connector implementations plus their factories, for tests and
//! development. The factories remember every component they create so
//! tests can reach the concrete instances behind the graph.

pub mod connector;
pub mod exporter;
pub mod processor;
pub mod receiver;
pub mod testdata;

// Re-export commonly used types
pub use connector::{ExampleConnector, ExampleConnectorConfig, ExampleConnectorFactory};
pub use exporter::{ExampleExporter, ExampleExporterConfig, ExampleExporterFactory};
pub use processor::{ExampleProcessor, ExampleProcessorConfig, ExampleProcessorFactory};
pub use receiver::{ExampleReceiver, ExampleReceiverConfig, ExampleReceiverFactory};
