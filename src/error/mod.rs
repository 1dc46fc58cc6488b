//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Error handling for the telemetry pipeline graph
//!
//! This module provides the structured error types used by the graph
//! builder, the topological driver, and the runtime data path.

pub mod types;

// Re-export commonly used types
pub use types::{GraphError, GraphResult};
